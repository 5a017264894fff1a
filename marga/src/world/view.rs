//! Read-only obstacle queries consumed by the planner.

use super::flags::ObstacleFlags;
use super::snapshot::{Pitch, WorldSnapshot};
use crate::core::math::DISTANCE_EPSILON;
use crate::core::{Circle, Vector2D};

/// Obstacle queries over one frozen world state.
///
/// Implementations must be side-effect free: the planner calls these
/// methods many times per search and expects the same answers each time.
pub trait ObstacleView {
    /// True iff `point` lies within the pitch shrunk by `padding` on every side.
    fn is_in_padded_bounds(&self, point: Vector2D, padding: f32) -> bool;

    /// True iff `point` lies within the pitch.
    fn is_in_bounds(&self, point: Vector2D) -> bool {
        self.is_in_padded_bounds(point, 0.0)
    }

    /// One circle per live entity selected by `mask`, in a stable order.
    ///
    /// The planning robot's own body must never be included.
    fn obstacle_circles(&self, mask: ObstacleFlags) -> Vec<Circle>;

    /// True iff the straight segment `from`-`to` does not enter any obstacle
    /// circle selected by `mask`.
    ///
    /// Clearance is against the bare obstacle radius, not radius plus the
    /// planner's clearance margin: a clear segment may pass closer than the
    /// margin. The margin only decides where detour points are placed.
    fn is_segment_clear(&self, from: Vector2D, to: Vector2D, mask: ObstacleFlags) -> bool {
        is_segment_clear_of(&self.obstacle_circles(mask), from, to)
    }
}

/// True iff the segment `from`-`to` stays outside every circle.
///
/// Only the circle radii count; no clearance margin is added. A segment
/// that only touches a boundary (within [`DISTANCE_EPSILON`]) counts as
/// clear: tangent detours run exactly along circle boundaries.
pub fn is_segment_clear_of(circles: &[Circle], from: Vector2D, to: Vector2D) -> bool {
    circles
        .iter()
        .all(|c| c.distance_to_segment(from, to) >= c.radius() - DISTANCE_EPSILON)
}

impl ObstacleView for WorldSnapshot {
    fn is_in_padded_bounds(&self, point: Vector2D, padding: f32) -> bool {
        self.pitch().contains_padded(point, padding)
    }

    fn obstacle_circles(&self, mask: ObstacleFlags) -> Vec<Circle> {
        self.circles(mask)
    }
}

/// A fixed list of flagged circles on a pitch.
///
/// For callers that keep their own world model, and for synthetic scenes
/// with more obstacles than a match ever has.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    pitch: Pitch,
    obstacles: Vec<(ObstacleFlags, Circle)>,
}

impl ObstacleSet {
    /// Create an empty set on the given pitch
    pub fn new(pitch: Pitch) -> Self {
        Self {
            pitch,
            obstacles: Vec::new(),
        }
    }

    /// Add a circle selected whenever `mask` overlaps `flags`.
    pub fn with_obstacle(mut self, flags: ObstacleFlags, circle: Circle) -> Self {
        self.push(flags, circle);
        self
    }

    /// Add a circle in place
    pub fn push(&mut self, flags: ObstacleFlags, circle: Circle) {
        self.obstacles.push((flags, circle));
    }

    /// Number of circles regardless of flags
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// True if the set holds no circles
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Pitch geometry
    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }
}

impl ObstacleView for ObstacleSet {
    fn is_in_padded_bounds(&self, point: Vector2D, padding: f32) -> bool {
        self.pitch.contains_padded(point, padding)
    }

    fn obstacle_circles(&self, mask: ObstacleFlags) -> Vec<Circle> {
        self.obstacles
            .iter()
            .filter(|(flags, _)| flags.bits() & mask.bits() != 0)
            .map(|(_, circle)| *circle)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pose2D;
    use crate::world::{ObstacleRadii, TeamColour};

    fn circle(x: f32, y: f32, r: f32) -> Circle {
        Circle::new(Vector2D::new(x, y), r).unwrap()
    }

    #[test]
    fn test_segment_through_circle_is_blocked() {
        let circles = [circle(50.0, 0.0, 20.0)];
        assert!(!is_segment_clear_of(
            &circles,
            Vector2D::new(0.0, 0.0),
            Vector2D::new(100.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_passing_beside_circle_is_clear() {
        let circles = [circle(50.0, 0.0, 20.0)];
        assert!(is_segment_clear_of(
            &circles,
            Vector2D::new(0.0, 25.0),
            Vector2D::new(100.0, 25.0)
        ));
        // Stops short of the circle
        assert!(is_segment_clear_of(
            &circles,
            Vector2D::new(0.0, 0.0),
            Vector2D::new(25.0, 0.0)
        ));
    }

    #[test]
    fn test_grazing_tangent_is_clear() {
        let c = circle(50.0, 0.0, 20.0);
        let external = Vector2D::new(0.0, 0.0);
        let [ccw, cw] = c.tangent_points(external).unwrap();
        assert!(is_segment_clear_of(&[c], external, ccw));
        assert!(is_segment_clear_of(&[c], external, cw));
    }

    #[test]
    fn test_clearance_ignores_margin() {
        // Passes 25 cm from a 20 cm circle: inside radius + 10 cm, still clear
        let circles = [circle(50.0, 0.0, 20.0)];
        assert!(is_segment_clear_of(
            &circles,
            Vector2D::new(0.0, 25.0),
            Vector2D::new(100.0, 25.0)
        ));
    }

    #[test]
    fn test_empty_set_is_always_clear() {
        assert!(is_segment_clear_of(
            &[],
            Vector2D::new(0.0, 0.0),
            Vector2D::new(1000.0, -5.0)
        ));
    }

    #[test]
    fn test_obstacle_set_mask_selection() {
        let set = ObstacleSet::new(Pitch::default())
            .with_obstacle(ObstacleFlags::BALL, circle(10.0, 10.0, 5.0))
            .with_obstacle(ObstacleFlags::BLUE, circle(60.0, 10.0, 5.0))
            .with_obstacle(
                ObstacleFlags::BLUE | ObstacleFlags::YELLOW,
                circle(90.0, 10.0, 5.0),
            );

        assert_eq!(set.len(), 3);
        assert_eq!(set.obstacle_circles(ObstacleFlags::BALL).len(), 1);
        assert_eq!(set.obstacle_circles(ObstacleFlags::YELLOW).len(), 1);
        assert_eq!(
            set.obstacle_circles(ObstacleFlags::BLUE)[0].center(),
            Vector2D::new(60.0, 10.0)
        );
        assert!(set.obstacle_circles(ObstacleFlags::NONE).is_empty());
    }

    #[test]
    fn test_snapshot_view() {
        let world = WorldSnapshot::new(
            Pitch::default(),
            TeamColour::Yellow,
            Pose2D::new(20.0, 50.0, 0.0),
            ObstacleRadii::default(),
        )
        .unwrap()
        .with_opponent(Pose2D::new(100.0, 50.0, 0.0));

        let mask = ObstacleFlags::for_opponent(false, TeamColour::Yellow);
        assert!(world.is_in_bounds(Vector2D::new(200.0, 100.0)));
        assert!(!world.is_in_bounds(Vector2D::new(250.0, 100.0)));
        assert!(world.is_in_bounds(Vector2D::new(5.0, 100.0)));
        assert!(!world.is_in_padded_bounds(Vector2D::new(5.0, 100.0), 10.0));
        assert!(!world.is_segment_clear(
            Vector2D::new(20.0, 50.0),
            Vector2D::new(200.0, 50.0),
            mask
        ));
        assert!(world.is_segment_clear(
            Vector2D::new(20.0, 100.0),
            Vector2D::new(200.0, 100.0),
            mask
        ));
    }
}
