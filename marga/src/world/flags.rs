//! Obstacle selection bitmask and team colours.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Team colour of a robot on the pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColour {
    /// Blue team
    Blue,
    /// Yellow team
    Yellow,
}

impl TeamColour {
    /// The other team
    pub fn opponent(self) -> TeamColour {
        match self {
            TeamColour::Blue => TeamColour::Yellow,
            TeamColour::Yellow => TeamColour::Blue,
        }
    }

    /// Obstacle flag selecting the robot of this colour
    pub fn flag(self) -> ObstacleFlags {
        match self {
            TeamColour::Blue => ObstacleFlags::BLUE,
            TeamColour::Yellow => ObstacleFlags::YELLOW,
        }
    }
}

/// Selects which live entities become obstacle circles for one query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ObstacleFlags(u8);

impl ObstacleFlags {
    /// Nothing is an obstacle
    pub const NONE: ObstacleFlags = ObstacleFlags(0);
    /// The ball is an obstacle
    pub const BALL: ObstacleFlags = ObstacleFlags(0x1);
    /// The blue robot is an obstacle
    pub const BLUE: ObstacleFlags = ObstacleFlags(0x2);
    /// The yellow robot is an obstacle
    pub const YELLOW: ObstacleFlags = ObstacleFlags(0x4);

    /// Build flags from individual switches.
    pub fn new(ball: bool, blue: bool, yellow: bool) -> Self {
        let mut flags = Self::NONE;
        if ball {
            flags |= Self::BALL;
        }
        if blue {
            flags |= Self::BLUE;
        }
        if yellow {
            flags |= Self::YELLOW;
        }
        flags
    }

    /// Flags for planning our own robot: the opponent is always an obstacle,
    /// our own robot never is, the ball only on request.
    pub fn for_opponent(ball_is_obstacle: bool, own_team: TeamColour) -> Self {
        let mut flags = own_team.opponent().flag();
        if ball_is_obstacle {
            flags |= Self::BALL;
        }
        flags
    }

    /// Raw bit value
    pub fn bits(self) -> u8 {
        self.0
    }

    /// True if every bit of `other` is set
    pub fn contains(self, other: ObstacleFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no bit is set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ObstacleFlags {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOrAssign for ObstacleFlags {
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}
