//! Simulation engine for TORUS-LIFE.
//!
//! Owns the particle arena and the double-buffered kinematic state,
//! resolves ticks, and produces `WorldSnapshot`s for frontends.

pub mod buffers;
pub mod engine;
pub mod headless;
pub mod systems;
pub mod world_setup;

pub use buffers::{Kinematics, StateBuffers};
pub use engine::{World, WorldBuilder};
pub use torus_life_core as core;
