//! Pitch and obstacle configuration sections.

use serde::{Deserialize, Serialize};

use crate::world::{ObstacleRadii, Pitch};

use super::defaults;

/// Pitch configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitchSection {
    /// Extent along X (cm)
    #[serde(default = "defaults::pitch_width")]
    pub width: f32,

    /// Extent along Y (cm)
    #[serde(default = "defaults::pitch_height")]
    pub height: f32,
}

impl Default for PitchSection {
    fn default() -> Self {
        Self {
            width: defaults::pitch_width(),
            height: defaults::pitch_height(),
        }
    }
}

impl PitchSection {
    /// Convert to Pitch
    pub fn to_pitch(&self) -> Pitch {
        Pitch::new(self.width, self.height)
    }
}

/// Obstacle collision radii section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSection {
    /// Ball collision radius (cm)
    #[serde(default = "defaults::ball_radius")]
    pub ball_radius: f32,

    /// Robot collision radius (cm)
    #[serde(default = "defaults::robot_radius")]
    pub robot_radius: f32,
}

impl Default for ObstacleSection {
    fn default() -> Self {
        Self {
            ball_radius: defaults::ball_radius(),
            robot_radius: defaults::robot_radius(),
        }
    }
}

impl ObstacleSection {
    /// Convert to ObstacleRadii
    pub fn to_radii(&self) -> ObstacleRadii {
        ObstacleRadii {
            ball: self.ball_radius,
            robot: self.robot_radius,
        }
    }
}
