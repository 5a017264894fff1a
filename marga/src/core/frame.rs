//! Local/global frame transforms.
//!
//! A local frame is anchored at a robot position with its heading mapped to
//! the local +X axis. Waypoint directions are stored in the local frame of
//! the step they belong to, so the motion layer can turn them into
//! "rotate by θ, drive d" commands without knowing the global orientation.

use serde::{Deserialize, Serialize};

use super::math::normalize_angle;
use super::vector::Vector2D;

/// Robot pose on the pitch: position plus heading.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2D {
    /// Position in pitch coordinates (cm)
    pub position: Vector2D,
    /// Heading in radians, CCW from +X
    pub heading: f32,
}

impl Pose2D {
    /// Create a pose; the heading is normalized to [-π, π).
    #[inline]
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            position: Vector2D::new(x, y),
            heading: normalize_angle(heading),
        }
    }

    /// Unit vector along the heading
    #[inline]
    pub fn heading_vector(&self) -> Vector2D {
        Vector2D::unit_at(self.heading)
    }

    /// Express a global point in this pose's frame.
    #[inline]
    pub fn to_local(&self, global: Vector2D) -> Vector2D {
        (global - self.position).rotate(-self.heading)
    }

    /// Express a point given in this pose's frame in global coordinates.
    #[inline]
    pub fn to_global(&self, local: Vector2D) -> Vector2D {
        self.position + local.rotate(self.heading)
    }
}

/// `target` relative to `origin`, rotated so that `heading` maps to +X.
#[inline]
pub fn local_frame_of(origin: Vector2D, heading: Vector2D, target: Vector2D) -> Vector2D {
    (target - origin).rotate(-heading.direction())
}

/// Inverse of [`local_frame_of`].
#[inline]
pub fn global_frame_of(origin: Vector2D, heading: Vector2D, local: Vector2D) -> Vector2D {
    origin + local.rotate(heading.direction())
}
