//! 2D vector arithmetic on a toroidal (wrap-around) surface.
//!
//! `Vector2` is a plain `Copy` value. The operator impls and the methods
//! taking `self` are pure; the `*_mut` methods and the compound-assignment
//! operators update in place.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// 2D position, velocity, or force in surface units.
/// x grows to the right, y grows downward (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(a: Self, b: Self) -> Self {
        Self::new(a.x + b.x, a.y + b.y)
    }

    pub fn subtract(a: Self, b: Self) -> Self {
        Self::new(a.x - b.x, a.y - b.y)
    }

    pub fn scale(v: Self, k: f64) -> Self {
        Self::new(v.x * k, v.y * k)
    }

    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Plain Euclidean distance, ignoring wrap-around.
    pub fn distance(a: Self, b: Self) -> f64 {
        (b.x - a.x).hypot(b.y - a.y)
    }

    /// Unit vector in the same direction. The zero vector is returned unchanged.
    pub fn normalize(self) -> Self {
        if self.x == 0.0 && self.y == 0.0 {
            return self;
        }
        self * (1.0 / self.length())
    }

    /// Clamp the length to `max_len`, keeping the direction.
    ///
    /// Compares squared lengths; vectors within the cap come back unchanged.
    pub fn limit(self, max_len: f64) -> Self {
        if self.length_squared() > max_len * max_len {
            self.normalize() * max_len
        } else {
            self
        }
    }

    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    pub fn limit_mut(&mut self, max_len: f64) -> &mut Self {
        *self = self.limit(max_len);
        self
    }

    /// Reduce both coordinates into `[0, width)` x `[0, height)`.
    pub fn wrap(self, width: f64, height: f64) -> Self {
        Self::new(wrap_axis(self.x, width), wrap_axis(self.y, height))
    }

    /// Shortest displacement from `a` to `b` on a `width` x `height` torus.
    ///
    /// Two candidates exist per axis: the direct delta, and the delta taken
    /// after shifting both points by half the dimension (modulo the
    /// dimension), which exposes the path across the seam. Each axis keeps
    /// whichever candidate is shorter, so the result is the minimum-length
    /// displacement whether zero, one, or both axes wrap. Ties keep the
    /// direct delta.
    ///
    /// Choosing between the two whole 2D candidates instead is not the same:
    /// from (40, 10) to (60, 90) on a 100 x 100 torus they are (20, 80) and
    /// (-80, -20), but the shortest displacement is (20, -20).
    pub fn shortest_torus_delta(a: Self, b: Self, width: f64, height: f64) -> Self {
        Self::new(
            shortest_axis_delta(a.x, b.x, width),
            shortest_axis_delta(a.y, b.y, height),
        )
    }

    /// Non-directional distance on the torus: per axis `min(|d|, dim - |d|)`,
    /// combined with the Euclidean norm.
    pub fn wrapped_distance(a: Self, b: Self, width: f64, height: f64) -> f64 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        dx.min(width - dx).hypot(dy.min(height - dy))
    }
}

fn wrap_axis(value: f64, dim: f64) -> f64 {
    let wrapped = value.rem_euclid(dim);
    // rem_euclid rounds tiny negative inputs up to exactly `dim`.
    if wrapped >= dim {
        0.0
    } else {
        wrapped
    }
}

fn shortest_axis_delta(from: f64, to: f64, dim: f64) -> f64 {
    let half = dim * 0.5;
    let direct = to - from;
    let shifted = (to + half).rem_euclid(dim) - (from + half).rem_euclid(dim);
    if direct * direct > shifted * shifted {
        shifted
    } else {
        direct
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vector2::subtract(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Vector2::scale(self, rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
