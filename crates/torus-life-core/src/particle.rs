//! Particle identity and type classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TYPE_COUNT;
use crate::error::{Error, Result};

/// Particle identity: either an integer or a non-empty string.
///
/// Serialized untagged, so JSON ids may be written as `7` or `"seven"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleId::Number(n) => write!(f, "{n}"),
            ParticleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParticleId {
    fn from(n: i64) -> Self {
        ParticleId::Number(n)
    }
}

impl From<i32> for ParticleId {
    fn from(n: i32) -> Self {
        ParticleId::Number(n.into())
    }
}

impl From<u32> for ParticleId {
    fn from(n: u32) -> Self {
        ParticleId::Number(n.into())
    }
}

impl From<&str> for ParticleId {
    fn from(s: &str) -> Self {
        ParticleId::Text(s.to_owned())
    }
}

impl From<String> for ParticleId {
    fn from(s: String) -> Self {
        ParticleId::Text(s)
    }
}

/// Row/column index into the attraction matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleType(pub u8);

impl ParticleType {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for ParticleType {
    fn from(t: u8) -> Self {
        ParticleType(t)
    }
}

/// One simulated entity. Immutable once constructed; identity is by `id`.
///
/// Not `Deserialize`: particles are only built through the validating constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Particle {
    id: ParticleId,
    #[serde(rename = "type")]
    kind: ParticleType,
}

impl Particle {
    /// Create a particle whose type indexes the default six-type matrix.
    ///
    /// Errors:
    /// - `Error::InvalidIdentity` if `id` is an empty string.
    /// - `Error::InvalidType` if `kind` is not in `0..6`.
    pub fn new(id: impl Into<ParticleId>, kind: impl Into<ParticleType>) -> Result<Self> {
        Self::with_type_count(id, kind, DEFAULT_TYPE_COUNT)
    }

    /// Create a particle whose type indexes a matrix of `type_count` rows.
    pub fn with_type_count(
        id: impl Into<ParticleId>,
        kind: impl Into<ParticleType>,
        type_count: usize,
    ) -> Result<Self> {
        let id = id.into();
        let kind = kind.into();
        if let ParticleId::Text(s) = &id {
            if s.is_empty() {
                return Err(Error::InvalidIdentity(s.clone()));
            }
        }
        if kind.index() >= type_count {
            return Err(Error::InvalidType {
                value: kind.0,
                type_count,
            });
        }
        Ok(Self { id, kind })
    }

    pub fn id(&self) -> &ParticleId {
        &self.id
    }

    pub fn kind(&self) -> ParticleType {
        self.kind
    }
}
