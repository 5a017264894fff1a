//! Angle helpers and scalar tolerances.
//!
//! All angles are in radians, counter-clockwise positive from +X.
//! Headings coming from the vision layer may be outside [-π, π); the planner
//! normalizes before storing them on a waypoint.

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Distance tolerance (cm) used by containment and clearance comparisons.
///
/// Tangent points pushed onto a clearance ring sit exactly on circle
/// boundaries, so exact float comparisons would flip on rounding noise.
pub const DISTANCE_EPSILON: f32 = 1e-3;

/// Normalize angle to [-π, π).
///
/// # Example
/// ```
/// use marga::core::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(PI / 2.0 + 2.0 * PI) - PI / 2.0).abs() < 1e-5);
/// assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TWO_PI;
    if a >= PI {
        a -= TWO_PI;
    } else if a < -PI {
        a += TWO_PI;
    }
    a
}

/// Signed shortest rotation from `from` to `to`, in [-π, π).
///
/// Positive means counter-clockwise.
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}
