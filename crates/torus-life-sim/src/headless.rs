//! Headless renderer: records draw calls instead of putting pixels anywhere.
//!
//! Used by tests and by the command-line driver.

use serde::{Deserialize, Serialize};

use torus_life_core::render::{Color, Renderer};

/// One recorded `draw_circle` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Keeps the circles drawn since the last `clear`.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    width: f64,
    height: f64,
    frame: Vec<Circle>,
    clears: u64,
}

impl RecordingRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            frame: Vec::new(),
            clears: 0,
        }
    }

    /// Circles of the current (last cleared) frame, in draw order.
    pub fn frame(&self) -> &[Circle] {
        &self.frame
    }

    /// Number of `clear` calls so far; one per rendered frame.
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl Renderer for RecordingRenderer {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.frame.clear();
        self.clears += 1;
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.frame.push(Circle {
            x,
            y,
            radius,
            color,
        });
    }
}
