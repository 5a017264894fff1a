//! 2D vector type used for positions, offsets and headings on the pitch.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Pitch-plane vector (centimetres, f32).
///
/// Used both as a point (offset from the pitch origin) and as a free vector.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    /// X component (along the pitch length)
    pub x: f32,
    /// Y component (along the pitch width)
    pub y: f32,
}

impl Vector2D {
    /// Zero vector (pitch origin)
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` (radians, CCW from +X).
    #[inline]
    pub fn unit_at(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Vector of the given length pointing at `angle`.
    #[inline]
    pub fn from_polar(angle: f32, length: f32) -> Self {
        Self::unit_at(angle) * length
    }

    /// Euclidean length
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length (avoids sqrt)
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Direction angle in (-π, π]. The zero vector reports 0.
    #[inline]
    pub fn direction(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Distance to another point
    #[inline]
    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*other - *self).length()
    }

    /// Rotate around the origin by `angle` (radians, CCW positive)
    #[inline]
    pub fn rotate(&self, angle: f32) -> Vector2D {
        let (sin_a, cos_a) = angle.sin_cos();
        Vector2D::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Vector2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    #[inline]
    pub fn normalized(&self) -> Option<Vector2D> {
        let len = self.length();
        if len > f32::EPSILON {
            Some(Vector2D::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Same direction, new length. `None` for a zero-length vector.
    #[inline]
    pub fn with_length(&self, length: f32) -> Option<Vector2D> {
        self.normalized().map(|unit| unit * length)
    }
}

impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vector2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
