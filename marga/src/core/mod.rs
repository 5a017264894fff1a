//! Geometry kernel for the Marga planner.
//!
//! Pure, stateless types and functions:
//! - [`Vector2D`]: pitch-plane vector (centimetres)
//! - [`Circle`]: obstacle region with tangent-point construction
//! - [`Pose2D`], [`local_frame_of`], [`global_frame_of`]: frame transforms
//! - [`math`]: angle normalization and tolerances
//!
//! Angles follow the ROS REP-103 convention: radians, counter-clockwise
//! positive from +X.

mod circle;
mod frame;
pub mod math;
mod vector;

pub use circle::Circle;
pub use frame::{Pose2D, global_frame_of, local_frame_of};
pub use vector::Vector2D;
