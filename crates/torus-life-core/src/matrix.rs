//! Attraction coefficients between particle types.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TYPE_COUNT;
use crate::error::{Error, Result};
use crate::particle::ParticleType;

/// Square table of signed coefficients: entry `[a][b]` is how strongly
/// type `a` is pulled toward (positive) or pushed from (negative) type `b`.
///
/// Not necessarily symmetric. Serialized as a list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct AttractionMatrix {
    size: usize,
    /// Row-major, `size * size` entries.
    values: Vec<f64>,
}

impl AttractionMatrix {
    /// Build from explicit rows.
    ///
    /// Errors: `Error::InvalidConfig` if there are no rows, a row length
    /// differs from the row count, or a coefficient is not finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::InvalidConfig(
                "attraction matrix must have at least one row".into(),
            ));
        }
        let mut values = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::InvalidConfig(format!(
                    "attraction matrix must be square: row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            if let Some(v) = row.iter().find(|v| !v.is_finite()) {
                return Err(Error::InvalidConfig(format!(
                    "attraction matrix row {i} contains non-finite value {v}"
                )));
            }
            values.extend(row);
        }
        Ok(Self { size, values })
    }

    /// Each type attracts only its own kind: 1.0 on the diagonal, 0.0 elsewhere.
    pub fn self_attraction(size: usize) -> Self {
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            values[i * size + i] = 1.0;
        }
        Self { size, values }
    }

    /// Every coefficient drawn uniformly from `[-1, 1)`.
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        let values = (0..size * size).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Self { size, values }
    }

    /// Number of particle types this matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Coefficient of `a`'s response to `b`.
    ///
    /// # Panics
    /// If either type is outside the matrix. Types are validated when a
    /// particle enters the world, so this indicates a programming error.
    #[inline]
    pub fn get(&self, a: ParticleType, b: ParticleType) -> f64 {
        assert!(
            a.index() < self.size && b.index() < self.size,
            "particle type out of attraction matrix range"
        );
        self.values[a.index() * self.size + b.index()]
    }

    pub fn contains(&self, t: ParticleType) -> bool {
        t.index() < self.size
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.size.max(1))
    }
}

impl Default for AttractionMatrix {
    fn default() -> Self {
        Self::self_attraction(DEFAULT_TYPE_COUNT)
    }
}

impl TryFrom<Vec<Vec<f64>>> for AttractionMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<AttractionMatrix> for Vec<Vec<f64>> {
    fn from(m: AttractionMatrix) -> Self {
        m.rows().map(<[f64]>::to_vec).collect()
    }
}
