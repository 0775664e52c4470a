//! The particle world and its tick loop.
//!
//! `World` owns the particle arena, the id index, and the double-buffered
//! kinematic state. It never ticks on its own: an external driver adds
//! particles, then calls `resolve_tic` (and optionally `render`) in a loop.

use std::collections::HashMap;

use torus_life_core::config::WorldConfig;
use torus_life_core::error::{Error, Result};
use torus_life_core::particle::{Particle, ParticleId};
use torus_life_core::render::Renderer;
use torus_life_core::state::WorldSnapshot;
use torus_life_core::vector::Vector2;

use crate::buffers::{Kinematics, StateBuffers};
use crate::systems::{self, TickContext};

/// Step-by-step construction of a `World`.
pub struct WorldBuilder<R> {
    renderer: Option<R>,
    config: WorldConfig,
}

impl<R: Renderer> Default for WorldBuilder<R> {
    fn default() -> Self {
        Self {
            renderer: None,
            config: WorldConfig::default(),
        }
    }
}

impl<R: Renderer> WorldBuilder<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn config(mut self, config: WorldConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and build.
    ///
    /// Errors:
    /// - `Error::MissingDependency` if no renderer was supplied.
    /// - `Error::InvalidConfig` if the config is invalid or the renderer
    ///   reports a non-positive or non-finite surface.
    pub fn build(self) -> Result<World<R>> {
        let renderer = self.renderer.ok_or(Error::MissingDependency("renderer"))?;
        self.config.validate()?;
        let (width, height) = (renderer.width(), renderer.height());
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "renderer surface must be finite and positive, got {width}x{height}"
            )));
        }
        Ok(World {
            renderer,
            config: self.config,
            particles: Vec::new(),
            id_index: HashMap::new(),
            buffers: StateBuffers::new(),
            tick: 0,
        })
    }
}

/// The simulation engine. Owns the particles and all kinematic state.
pub struct World<R> {
    renderer: R,
    config: WorldConfig,
    /// Insertion order is index order; never reordered or shrunk.
    particles: Vec<Particle>,
    id_index: HashMap<ParticleId, usize>,
    buffers: StateBuffers,
    tick: u64,
}

impl<R: Renderer> World<R> {
    /// Create a world drawing through `renderer`. See `WorldBuilder::build`.
    pub fn new(renderer: R, config: WorldConfig) -> Result<Self> {
        WorldBuilder::new().renderer(renderer).config(config).build()
    }

    pub fn builder() -> WorldBuilder<R> {
        WorldBuilder::new()
    }

    /// Add a particle at rest at `position` and return its index.
    ///
    /// The initial state is written to the writable arena only; the
    /// particle joins the committed state (and starts to exert and feel
    /// forces) with the next `resolve_tic`.
    ///
    /// Errors (the world is unchanged on failure):
    /// - `Error::DuplicateIdentity` if a particle with the same id exists.
    /// - `Error::InvalidPosition` if either coordinate is NaN or infinite.
    /// - `Error::InvalidType` if the particle's type has no row in the
    ///   configured attraction matrix.
    pub fn add_entity_at(&mut self, particle: Particle, position: Vector2) -> Result<usize> {
        if self.id_index.contains_key(particle.id()) {
            return Err(Error::DuplicateIdentity(particle.id().clone()));
        }
        if !(position.x.is_finite() && position.y.is_finite()) {
            return Err(Error::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }
        let matrix = &self.config.attraction_mods;
        if !matrix.contains(particle.kind()) {
            return Err(Error::InvalidType {
                value: particle.kind().0,
                type_count: matrix.size(),
            });
        }

        let index = self.particles.len();
        self.id_index.insert(particle.id().clone(), index);
        self.particles.push(particle);
        self.buffers.push(Kinematics::at_rest(position));
        Ok(index)
    }

    /// Advance every committed particle by exactly one tick.
    ///
    /// All new states are computed from the active buffer alone and
    /// written to the writable buffer; the buffers are then swapped.
    /// Particles inserted since the previous tick are committed unchanged.
    pub fn resolve_tic(&mut self) {
        let ctx = TickContext {
            particles: &self.particles,
            matrix: &self.config.attraction_mods,
            particle_size: self.config.particle_size,
            width: self.renderer.width(),
            height: self.renderer.height(),
        };
        let (current, next) = self.buffers.split();
        systems::integration::run(current, next, &ctx);
        self.buffers.swap();
        self.tick += 1;
    }

    /// Committed position of `particle`.
    ///
    /// # Panics
    /// If `particle` was never added to this world, or was added after the
    /// last `resolve_tic` and so has no committed state yet. Use
    /// `entity_position` when this is not already known.
    pub fn get_entity_position(&self, particle: &Particle) -> Vector2 {
        match (self.entity_position(particle.id()), self.index_of(particle.id())) {
            (Some(position), _) => position,
            (None, Some(_)) => panic!(
                "particle '{}' has no committed state until the next tick",
                particle.id()
            ),
            (None, None) => panic!("particle '{}' was never added to this world", particle.id()),
        }
    }

    /// Committed position, or `None` for unknown or not-yet-committed ids.
    pub fn entity_position(&self, id: &ParticleId) -> Option<Vector2> {
        self.state_of(id).map(|s| s.position)
    }

    pub fn entity_velocity(&self, id: &ParticleId) -> Option<Vector2> {
        self.state_of(id).map(|s| s.velocity)
    }

    /// Index assigned to `id` at insertion.
    pub fn index_of(&self, id: &ParticleId) -> Option<usize> {
        self.id_index.get(id).copied()
    }

    fn state_of(&self, id: &ParticleId) -> Option<Kinematics> {
        let index = self.index_of(id)?;
        self.buffers.active().get(index).copied()
    }

    /// Clear the surface and draw every committed particle at its position.
    pub fn render(&mut self) {
        systems::render::run(
            &mut self.renderer,
            &self.particles,
            self.buffers.active(),
            self.config.particle_size,
        );
    }

    /// Copy of the committed state.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(
            self.tick,
            self.renderer.width(),
            self.renderer.height(),
            self.config.particle_size,
            &self.particles,
            self.buffers.active(),
        )
    }

    pub fn particle_size(&self) -> f64 {
        self.config.particle_size
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles inserted since the last tick.
    pub fn pending(&self) -> usize {
        self.buffers.pending()
    }

    /// Committed kinematic state, by particle index. Shorter than
    /// `particles()` while insertions are pending.
    pub fn states(&self) -> &[Kinematics] {
        self.buffers.active()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Which of the two arenas is currently active (0 or 1).
    pub fn active_buffer(&self) -> usize {
        self.buffers.active_index()
    }
}
