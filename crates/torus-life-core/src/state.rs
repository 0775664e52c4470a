//! Snapshot of the committed world state, handed to frontends.

use serde::{Deserialize, Serialize};

use crate::particle::{ParticleId, ParticleType};
use crate::vector::Vector2;

/// Read-only copy of the committed (active) state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Number of completed ticks.
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub particle_size: f64,
    /// In index (insertion) order.
    pub particles: Vec<ParticleView>,
}

/// One particle as seen by a frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: ParticleId,
    #[serde(rename = "type")]
    pub kind: ParticleType,
    pub position: Vector2,
    pub velocity: Vector2,
}
