//! Simulation constants and tuning parameters.

/// Default particle radius, used both for drawing and as the hard-core
/// separation parameter of the force curve.
pub const DEFAULT_PARTICLE_SIZE: f64 = 3.0;

/// Number of particle types in the default attraction matrix.
pub const DEFAULT_TYPE_COUNT: usize = 6;

/// Largest matrix a `ParticleType` can index.
pub const MAX_TYPE_COUNT: usize = u8::MAX as usize + 1;

// --- Integration ---

/// Velocity magnitude cap applied after forces are summed.
pub const MAX_SPEED: f64 = 3.0;

// --- Force curve ---

/// Per-axis cutoff of the neighbour pre-filter.
pub const INTERACTION_RADIUS: f64 = 50.0;

/// Slope of the linear ramps of the force shell.
pub const FORCE_RAMP: f64 = 0.04;

/// Shell distance (beyond contact) at which the force peaks.
pub const FORCE_SHELL_PEAK: f64 = 25.0;

/// Shell distance (beyond contact) past which the force is zero.
pub const FORCE_SHELL_WIDTH: f64 = 50.0;
