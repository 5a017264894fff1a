//! Immutable world snapshot handed to the planner by the vision layer.

use serde::{Deserialize, Serialize};

use super::flags::{ObstacleFlags, TeamColour};
use crate::core::{Circle, Pose2D, Vector2D};
use crate::error::GeometryError;

/// Pitch length (cm)
pub const PITCH_WIDTH_CM: f32 = 244.0;
/// Pitch width (cm)
pub const PITCH_HEIGHT_CM: f32 = 113.7;
/// Robot body length (cm)
pub const ROBOT_LENGTH_CM: f32 = 20.0;

/// The rectangular playing field, origin at one corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    /// Extent along X (cm)
    pub width: f32,
    /// Extent along Y (cm)
    pub height: f32,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            width: PITCH_WIDTH_CM,
            height: PITCH_HEIGHT_CM,
        }
    }
}

impl Pitch {
    /// Create a pitch of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True iff `point` lies on or inside the pitch rectangle.
    #[inline]
    pub fn contains(&self, point: Vector2D) -> bool {
        self.contains_padded(point, 0.0)
    }

    /// True iff `point` lies inside the pitch shrunk by `padding` on every side.
    #[inline]
    pub fn contains_padded(&self, point: Vector2D, padding: f32) -> bool {
        point.x >= padding
            && point.y >= padding
            && point.x <= self.width - padding
            && point.y <= self.height - padding
    }
}

/// Collision radii used when turning entities into obstacle circles.
///
/// Defaults grow the physical sizes (10 cm ball, 0.9 × robot length) by a
/// further 10 cm so the planning robot's own body is accounted for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRadii {
    /// Ball collision radius (cm)
    pub ball: f32,
    /// Robot collision radius (cm)
    pub robot: f32,
}

impl Default for ObstacleRadii {
    fn default() -> Self {
        Self {
            ball: 20.0,
            robot: ROBOT_LENGTH_CM * 0.9 + 10.0,
        }
    }
}

impl ObstacleRadii {
    /// Check both radii are strictly positive and finite.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for radius in [self.ball, self.robot] {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(GeometryError::NonPositiveRadius(radius));
            }
        }
        Ok(())
    }
}

/// Positions of every live entity at one perception cycle.
///
/// The planner treats a snapshot as frozen for the duration of one call.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pitch: Pitch,
    own_team: TeamColour,
    own_robot: Pose2D,
    opponent: Option<Pose2D>,
    ball: Option<Vector2D>,
    radii: ObstacleRadii,
}

impl WorldSnapshot {
    /// Create a snapshot containing only our own robot.
    pub fn new(
        pitch: Pitch,
        own_team: TeamColour,
        own_robot: Pose2D,
        radii: ObstacleRadii,
    ) -> Result<Self, GeometryError> {
        radii.validate()?;
        Ok(Self {
            pitch,
            own_team,
            own_robot,
            opponent: None,
            ball: None,
            radii,
        })
    }

    /// Add the opponent robot.
    pub fn with_opponent(mut self, pose: Pose2D) -> Self {
        self.opponent = Some(pose);
        self
    }

    /// Add the ball.
    pub fn with_ball(mut self, position: Vector2D) -> Self {
        self.ball = Some(position);
        self
    }

    /// Pitch geometry
    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    /// Our team colour
    pub fn own_team(&self) -> TeamColour {
        self.own_team
    }

    /// Our robot's pose
    pub fn own_robot(&self) -> Pose2D {
        self.own_robot
    }

    /// Opponent pose, if seen this cycle
    pub fn opponent(&self) -> Option<Pose2D> {
        self.opponent
    }

    /// Ball position, if seen this cycle
    pub fn ball(&self) -> Option<Vector2D> {
        self.ball
    }

    /// Collision radii
    pub fn radii(&self) -> &ObstacleRadii {
        &self.radii
    }

    /// Pose of the robot wearing `colour`, if present.
    pub fn robot(&self, colour: TeamColour) -> Option<Pose2D> {
        if colour == self.own_team {
            Some(self.own_robot)
        } else {
            self.opponent
        }
    }

    /// Obstacle circles selected by `mask`, in ball, blue, yellow order.
    ///
    /// Our own robot is skipped even if its colour bit is set.
    pub(crate) fn circles(&self, mask: ObstacleFlags) -> Vec<Circle> {
        let mut circles = Vec::with_capacity(3);

        if let Some(ball) = self.ball.filter(|_| mask.contains(ObstacleFlags::BALL)) {
            circles.push(Circle::new_unchecked(ball, self.radii.ball));
        }

        for colour in [TeamColour::Blue, TeamColour::Yellow] {
            if colour == self.own_team || !mask.contains(colour.flag()) {
                continue;
            }
            if let Some(pose) = self.robot(colour) {
                circles.push(Circle::new_unchecked(pose.position, self.radii.robot));
            }
        }

        circles
    }
}
