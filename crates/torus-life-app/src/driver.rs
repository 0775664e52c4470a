//! Headless driver loop: build a world, populate it, and tick it.
//!
//! Progress goes to stderr; the caller decides what to do with the report.

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use torus_life_core::config::WorldConfig;
use torus_life_core::error::Result;
use torus_life_core::state::WorldSnapshot;
use torus_life_sim::headless::RecordingRenderer;
use torus_life_sim::world_setup;
use torus_life_sim::World;

use crate::cli::RunOptions;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub ticks: u64,
    pub particles: usize,
    /// Circles drawn by the final render.
    pub circles: usize,
    pub snapshot: WorldSnapshot,
}

/// Read a JSON `WorldConfig` from `path`, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<WorldConfig> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            WorldConfig::from_json(&json)
        }
        None => Ok(WorldConfig::default()),
    }
}

pub fn run(options: &RunOptions) -> Result<RunReport> {
    let config = load_config(options.config_path.as_deref())?;
    let renderer = RecordingRenderer::new(options.width, options.height);
    let mut world = World::new(renderer, config)?;

    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let added = world_setup::populate(&mut world, &mut rng, options.per_type)?;
    eprintln!(
        "World {}x{}: {} particles across {} types (seed {})",
        options.width,
        options.height,
        added,
        world.config().attraction_mods.size(),
        options.seed,
    );

    for _ in 0..options.ticks {
        world.resolve_tic();
        if options.report_every > 0 && world.tick() % options.report_every == 0 {
            eprintln!("tick {}/{}", world.tick(), options.ticks);
        }
    }

    world.render();
    let circles = world.renderer().frame().len();
    eprintln!("Done after {} ticks, rendered {circles} circles", world.tick());

    Ok(RunReport {
        ticks: world.tick(),
        particles: world.len(),
        circles,
        snapshot: world.snapshot(),
    })
}
