//! Core types and definitions for the TORUS-LIFE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vectors on the torus, particles, the attraction matrix, configuration,
//! the renderer capability, state snapshots, errors, and constants.
//! It contains no engine logic.

pub mod config;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod particle;
pub mod render;
pub mod state;
pub mod vector;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
