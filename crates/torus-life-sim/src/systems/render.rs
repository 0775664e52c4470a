//! Render pass: draws the committed state through the renderer capability.

use torus_life_core::particle::Particle;
use torus_life_core::render::{Color, Renderer};

use crate::buffers::Kinematics;

/// Clear the surface, then draw one disc per committed particle in index order.
/// `states` may be shorter than `particles` while insertions are pending.
pub fn run<R: Renderer>(
    renderer: &mut R,
    particles: &[Particle],
    states: &[Kinematics],
    particle_size: f64,
) {
    renderer.clear();
    for (particle, state) in particles.iter().zip(states) {
        renderer.draw_circle(
            state.position.x,
            state.position.y,
            particle_size,
            Color::for_type(particle.kind()),
        );
    }
}
