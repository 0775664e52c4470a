//! Population factories for setting up a world.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use torus_life_core::error::Result;
use torus_life_core::particle::{Particle, ParticleId, ParticleType};
use torus_life_core::render::Renderer;
use torus_life_core::vector::Vector2;

use crate::engine::World;

/// Add `per_type` particles of every configured type at uniformly random
/// positions on the surface. Returns the number of particles added.
///
/// Ids are integers continuing from the current particle count, skipping
/// any already taken.
pub fn populate<R: Renderer>(
    world: &mut World<R>,
    rng: &mut ChaCha8Rng,
    per_type: usize,
) -> Result<usize> {
    let type_count = world.config().attraction_mods.size();
    let (width, height) = (world.renderer().width(), world.renderer().height());
    let mut next_id = world.len() as i64;
    let mut added = 0;

    for kind in 0..type_count {
        let kind = ParticleType(kind as u8);
        for _ in 0..per_type {
            while world.index_of(&ParticleId::Number(next_id)).is_some() {
                next_id += 1;
            }
            let particle = Particle::with_type_count(next_id, kind, type_count)?;
            let position = random_position(rng, width, height);
            world.add_entity_at(particle, position)?;
            next_id += 1;
            added += 1;
        }
    }
    Ok(added)
}

/// Uniform position in `[0, width) x [0, height)`.
pub fn random_position(rng: &mut ChaCha8Rng, width: f64, height: f64) -> Vector2 {
    Vector2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
}
