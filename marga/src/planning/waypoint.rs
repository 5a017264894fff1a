//! Waypoint and path types handed to the motion layer.

use serde::{Deserialize, Serialize};

use crate::core::math::normalize_angle;
use crate::core::{Vector2D, local_frame_of};

/// One step of a planned path.
///
/// The step's direction is stored in the local frame of the robot at the
/// start of the step (heading along +X), so the motion layer can read it
/// directly as "turn by [`turning_angle`](Self::turning_angle), drive
/// [`distance`](Self::distance)".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    origin: Vector2D,
    heading: f32,
    target: Vector2D,
    direction: Vector2D,
    cost_to_destination: f32,
    is_final: bool,
}

impl Waypoint {
    /// Create a waypoint from `origin` (facing `heading`) to `target`.
    ///
    /// `cost_to_destination` is the remaining path length from `origin`,
    /// this step included.
    pub fn new(
        origin: Vector2D,
        heading: f32,
        target: Vector2D,
        cost_to_destination: f32,
        is_final: bool,
    ) -> Self {
        let heading = normalize_angle(heading);
        Self {
            origin,
            heading,
            target,
            direction: local_frame_of(origin, Vector2D::unit_at(heading), target),
            cost_to_destination,
            is_final,
        }
    }

    /// Step start in pitch coordinates
    pub fn origin(&self) -> Vector2D {
        self.origin
    }

    /// Heading at the step start (radians)
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Step end in pitch coordinates
    pub fn target(&self) -> Vector2D {
        self.target
    }

    /// Step vector in the local frame of the step start
    pub fn direction(&self) -> Vector2D {
        self.direction
    }

    /// Remaining path length from this step onward
    pub fn cost_to_destination(&self) -> f32 {
        self.cost_to_destination
    }

    /// True for the last step, which ends at the destination itself
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Length of this step
    pub fn distance(&self) -> f32 {
        self.direction.length()
    }

    /// Rotation needed to face the step target, in (-π, π]
    pub fn turning_angle(&self) -> f32 {
        self.direction.direction()
    }
}

/// An ordered, non-empty sequence of waypoints ending at the destination.
///
/// Only the planners build paths, so the non-empty invariant always holds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// A one-step path straight to the destination.
    pub fn direct(waypoint: Waypoint) -> Self {
        Self {
            waypoints: vec![waypoint],
        }
    }

    /// A new path with `first` in front of this one.
    pub(crate) fn prepended(self, first: Waypoint) -> Self {
        let mut waypoints = Vec::with_capacity(self.waypoints.len() + 1);
        waypoints.push(first);
        waypoints.extend(self.waypoints);
        Self { waypoints }
    }

    /// All waypoints, first move first
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of waypoints
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First move to make
    pub fn first(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    /// Final step into the destination
    pub fn last(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }

    /// Total path cost (the first waypoint's cost-to-destination)
    pub fn cost(&self) -> f32 {
        self.first().cost_to_destination()
    }

    /// Global polyline: the first step's origin followed by every target.
    pub fn global_points(&self) -> Vec<Vector2D> {
        std::iter::once(self.first().origin())
            .chain(self.waypoints.iter().map(Waypoint::target))
            .collect()
    }

    /// Sum of the individual step lengths.
    pub fn segment_length_sum(&self) -> f32 {
        self.waypoints.iter().map(Waypoint::distance).sum()
    }

    /// Iterate over the waypoints
    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_waypoint_local_direction() {
        let wp = Waypoint::new(
            Vector2D::new(10.0, 10.0),
            FRAC_PI_2,
            Vector2D::new(10.0, 40.0),
            30.0,
            true,
        );
        assert_relative_eq!(wp.direction().x, 30.0, epsilon = 1e-4);
        assert_relative_eq!(wp.direction().y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(wp.distance(), 30.0, epsilon = 1e-4);
        assert_relative_eq!(wp.turning_angle(), 0.0, epsilon = 1e-5);
        assert!(wp.is_final());
    }

    #[test]
    fn test_turning_angle_sign() {
        // Facing +X, target straight to the left: turn +90°
        let wp = Waypoint::new(Vector2D::ZERO, 0.0, Vector2D::new(0.0, 5.0), 5.0, true);
        assert_relative_eq!(wp.turning_angle(), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_path_prepend_and_accessors() {
        let last = Waypoint::new(
            Vector2D::new(30.0, 40.0),
            0.0,
            Vector2D::new(60.0, 40.0),
            30.0,
            true,
        );
        let first = Waypoint::new(Vector2D::ZERO, 0.0, Vector2D::new(30.0, 40.0), 80.0, false);

        let path = Path::direct(last).prepended(first);
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert!(!path.first().is_final());
        assert!(path.last().is_final());
        assert_relative_eq!(path.cost(), 80.0);
        assert_relative_eq!(path.segment_length_sum(), 80.0, epsilon = 1e-4);

        let points = path.global_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Vector2D::ZERO);
        assert_eq!(points[2], Vector2D::new(60.0, 40.0));
        assert_eq!((&path).into_iter().count(), 2);
    }
}
