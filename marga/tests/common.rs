//! Shared scene builders for the planner integration tests.

#![allow(dead_code)]

use marga::core::global_frame_of;
use marga::{
    Circle, ObstacleFlags, ObstacleSet, ObstacleView, Path, Pitch, Pose2D, TeamColour, Vector2D,
    WorldSnapshot,
};
use marga::world::ObstacleRadii;

/// Flag used for every obstacle in synthetic scenes.
pub const MASK: ObstacleFlags = ObstacleFlags::YELLOW;

/// Tolerance for comparing path lengths (cm).
pub const LENGTH_TOLERANCE: f32 = 1e-2;

/// Synthetic scene on the default pitch with the given (x, y, radius) circles.
pub fn scene(circles: &[(f32, f32, f32)]) -> ObstacleSet {
    circles
        .iter()
        .fold(ObstacleSet::new(Pitch::default()), |set, &(x, y, r)| {
            set.with_obstacle(MASK, Circle::new(Vector2D::new(x, y), r).unwrap())
        })
}

/// Unbounded plane with circles in insertion order.
///
/// No pitch edges, so scenes mirrored about y = 0 stay exactly symmetric.
pub struct OpenField(pub Vec<Circle>);

impl OpenField {
    /// Field with the given (x, y, radius) circles
    pub fn new(circles: &[(f32, f32, f32)]) -> Self {
        Self(
            circles
                .iter()
                .map(|&(x, y, r)| Circle::new(Vector2D::new(x, y), r).unwrap())
                .collect(),
        )
    }
}

impl ObstacleView for OpenField {
    fn is_in_padded_bounds(&self, _point: Vector2D, _padding: f32) -> bool {
        true
    }

    fn obstacle_circles(&self, _mask: ObstacleFlags) -> Vec<Circle> {
        self.0.clone()
    }
}

/// Match snapshot: we are blue, the opponent is yellow.
pub fn match_snapshot(
    own: Pose2D,
    opponent: Option<Pose2D>,
    ball: Option<Vector2D>,
) -> WorldSnapshot {
    let mut world =
        WorldSnapshot::new(Pitch::default(), TeamColour::Blue, own, ObstacleRadii::default())
            .unwrap();
    if let Some(pose) = opponent {
        world = world.with_opponent(pose);
    }
    if let Some(position) = ball {
        world = world.with_ball(position);
    }
    world
}

/// Rebuild the global polyline from each waypoint's local direction.
pub fn reconstruct_global(path: &Path) -> Vec<Vector2D> {
    let mut points = vec![path.first().origin()];
    for waypoint in path {
        points.push(global_frame_of(
            waypoint.origin(),
            Vector2D::unit_at(waypoint.heading()),
            waypoint.direction(),
        ));
    }
    points
}

/// Sum of consecutive segment lengths of a polyline.
pub fn polyline_length(points: &[Vector2D]) -> f32 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
