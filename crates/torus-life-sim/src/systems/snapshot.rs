//! Snapshot system: copies the committed state into a `WorldSnapshot`.
//!
//! This system is read-only. Particles without committed state are skipped.

use torus_life_core::particle::Particle;
use torus_life_core::state::{ParticleView, WorldSnapshot};

use crate::buffers::Kinematics;

pub fn build_snapshot(
    tick: u64,
    width: f64,
    height: f64,
    particle_size: f64,
    particles: &[Particle],
    states: &[Kinematics],
) -> WorldSnapshot {
    WorldSnapshot {
        tick,
        width,
        height,
        particle_size,
        particles: particles
            .iter()
            .zip(states)
            .map(|(particle, state)| ParticleView {
                id: particle.id().clone(),
                kind: particle.kind(),
                position: state.position,
                velocity: state.velocity,
            })
            .collect(),
    }
}
