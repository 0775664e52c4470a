//! World configuration recognised at engine construction.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARTICLE_SIZE, MAX_TYPE_COUNT};
use crate::error::{Error, Result};
use crate::matrix::AttractionMatrix;

/// Configuration for a new world. Both fields are optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Particle radius; also the minimum-separation parameter of the force curve.
    #[serde(default = "default_particle_size")]
    pub particle_size: f64,
    /// Type-to-type attraction coefficients.
    #[serde(default)]
    pub attraction_mods: AttractionMatrix,
}

fn default_particle_size() -> f64 {
    DEFAULT_PARTICLE_SIZE
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            particle_size: DEFAULT_PARTICLE_SIZE,
            attraction_mods: AttractionMatrix::default(),
        }
    }
}

impl WorldConfig {
    /// Parse a (possibly partial) JSON configuration object and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !self.particle_size.is_finite() || self.particle_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "particle_size must be finite and > 0, got {}",
                self.particle_size
            )));
        }
        if self.attraction_mods.size() == 0 {
            return Err(Error::InvalidConfig(
                "attraction matrix must cover at least one type".into(),
            ));
        }
        if self.attraction_mods.size() > MAX_TYPE_COUNT {
            return Err(Error::InvalidConfig(format!(
                "attraction matrix covers {} types, at most {MAX_TYPE_COUNT} are supported",
                self.attraction_mods.size()
            )));
        }
        Ok(())
    }
}
