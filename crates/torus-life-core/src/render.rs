//! The drawing capability the engine renders through, and the type palette.

use serde::{Deserialize, Serialize};

use crate::particle::ParticleType;

/// Drawing surface the world wraps around and renders onto.
///
/// Implemented by frontends; the engine only ever calls these methods.
pub trait Renderer {
    /// Surface width; positions wrap at this value on the x axis.
    fn width(&self) -> f64;
    /// Surface height; positions wrap at this value on the y axis.
    fn height(&self) -> f64;
    /// Erase the previous frame.
    fn clear(&mut self);
    /// Fill a disc of `radius` centred at `(x, y)`.
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One colour per type of the default six-type matrix.
pub const PALETTE: [Color; 6] = [
    Color::rgb(0xe6, 0x39, 0x46), // red
    Color::rgb(0x2a, 0x9d, 0x8f), // teal
    Color::rgb(0xf4, 0xa2, 0x61), // orange
    Color::rgb(0x45, 0x7b, 0x9d), // blue
    Color::rgb(0xe9, 0xc4, 0x6a), // yellow
    Color::rgb(0x9b, 0x5d, 0xe5), // violet
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette colour for a particle type. Types past the palette wrap around.
    pub fn for_type(kind: ParticleType) -> Self {
        PALETTE[kind.index() % PALETTE.len()]
    }

    /// CSS-style `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
