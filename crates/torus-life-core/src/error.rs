use thiserror::Error;

use crate::particle::ParticleId;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring the engine or inserting particles.
///
/// All of these are validation failures: nothing was created or inserted
/// when one is returned. Ticking the simulation never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// A required collaborator was not supplied at construction.
    #[error("missing constructor parameter: '{0}'")]
    MissingDependency(&'static str),

    /// A particle with this id is already part of the world.
    #[error("duplicate particle id found: '{0}'")]
    DuplicateIdentity(ParticleId),

    /// Particle ids must be integers or non-empty strings.
    #[error("particle id must be integer or non-empty string, received: {0:?}")]
    InvalidIdentity(String),

    /// Particle type outside `[0, type_count - 1]`.
    #[error("particle type must be in 0..{type_count}, received: {value}")]
    InvalidType { value: u8, type_count: usize },

    /// Insertion positions must have finite coordinates.
    #[error("particle position must be finite, received: ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },

    /// Configuration values that cannot drive a simulation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
