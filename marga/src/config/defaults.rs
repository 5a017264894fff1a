//! Default value functions for serde deserialization.

use crate::world::{PITCH_HEIGHT_CM, PITCH_WIDTH_CM, ROBOT_LENGTH_CM};

pub fn clearance_margin() -> f32 {
    10.0
}

pub fn max_depth() -> usize {
    10
}

pub fn detour_padding() -> f32 {
    ROBOT_LENGTH_CM / 2.0
}

pub fn pitch_width() -> f32 {
    PITCH_WIDTH_CM
}

pub fn pitch_height() -> f32 {
    PITCH_HEIGHT_CM
}

pub fn ball_radius() -> f32 {
    20.0
}

pub fn robot_radius() -> f32 {
    ROBOT_LENGTH_CM * 0.9 + 10.0
}

pub fn section_count() -> usize {
    222
}

pub fn max_attempts() -> usize {
    5
}

pub fn shrink_step() -> f32 {
    ROBOT_LENGTH_CM
}
