//! Per-tick systems operating on the particle arena.
//!
//! Systems are free functions over borrowed state. They do not own
//! anything; the engine decides which buffer each one reads or writes.

pub mod forces;
pub mod integration;
pub mod render;
pub mod snapshot;

use torus_life_core::matrix::AttractionMatrix;
use torus_life_core::particle::Particle;

/// Read-only inputs shared by every particle's update within one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub particles: &'a [Particle],
    pub matrix: &'a AttractionMatrix,
    pub particle_size: f64,
    pub width: f64,
    pub height: f64,
}
