//! Circular obstacle regions and the tangent construction used by the planner.

use serde::{Deserialize, Serialize};

use super::vector::Vector2D;
use crate::error::GeometryError;

/// A circle on the pitch plane: centre plus strictly positive radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Vector2D,
    radius: f32,
}

impl Circle {
    /// Create a circle, rejecting non-positive or non-finite radii.
    pub fn new(center: Vector2D, radius: f32) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Build from a radius the caller has already validated.
    #[inline]
    pub(crate) fn new_unchecked(center: Vector2D, radius: f32) -> Self {
        debug_assert!(radius.is_finite() && radius > 0.0);
        Self { center, radius }
    }

    /// Centre point
    #[inline]
    pub fn center(&self) -> Vector2D {
        self.center
    }

    /// Radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// True iff `point` is on or inside the circle.
    #[inline]
    pub fn contains(&self, point: Vector2D) -> bool {
        self.center.distance(&point) <= self.radius
    }

    /// Tangent points on this circle as seen from `external`.
    ///
    /// Returns `[ccw, cw]`: the first point lies counter-clockwise of the
    /// line from `external` to the centre, the second clockwise. Returns
    /// `None` when `external` is on or inside the circle.
    ///
    /// ```text
    ///              ccw
    ///            .-*-.
    ///   E ------( C   )     tangent length = sqrt(d² - r²)
    ///            '-*-'      half angle     = asin(r / d)
    ///              cw
    /// ```
    pub fn tangent_points(&self, external: Vector2D) -> Option<[Vector2D; 2]> {
        let to_center = self.center - external;
        let d = to_center.length();
        if d <= self.radius {
            return None;
        }

        let base = to_center.direction();
        let half_angle = (self.radius / d).asin();
        let tangent_length = (d * d - self.radius * self.radius).sqrt();

        Some([
            external + Vector2D::from_polar(base + half_angle, tangent_length),
            external + Vector2D::from_polar(base - half_angle, tangent_length),
        ])
    }

    /// Move `point` along the ray from the centre through it so that it ends
    /// up exactly `distance` away from the centre.
    ///
    /// Fails when `point` coincides with the centre, since the ray is undefined.
    pub fn point_at_distance(
        &self,
        point: Vector2D,
        distance: f32,
    ) -> Result<Vector2D, GeometryError> {
        let radial = (point - self.center)
            .with_length(distance)
            .ok_or(GeometryError::PointAtCentre {
                x: point.x,
                y: point.y,
            })?;
        Ok(self.center + radial)
    }

    /// Shortest distance from the centre to the segment `a`-`b`.
    pub fn distance_to_segment(&self, a: Vector2D, b: Vector2D) -> f32 {
        let ab = b - a;
        let len_sq = ab.length_squared();
        if len_sq <= f32::EPSILON {
            return self.center.distance(&a);
        }

        let t = ((self.center - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
        self.center.distance(&(a + ab * t))
    }
}
