//! World model adapter.
//!
//! The vision layer builds a [`WorldSnapshot`] every perception cycle; the
//! planner only sees it through the [`ObstacleView`] trait, which selects
//! obstacle circles with an [`ObstacleFlags`] mask and answers pitch
//! containment and line-of-sight queries.

mod flags;
mod snapshot;
mod view;

pub use flags::{ObstacleFlags, TeamColour};
pub use snapshot::{
    ObstacleRadii, PITCH_HEIGHT_CM, PITCH_WIDTH_CM, Pitch, ROBOT_LENGTH_CM, WorldSnapshot,
};
pub use view::{ObstacleSet, ObstacleView, is_segment_clear_of};
