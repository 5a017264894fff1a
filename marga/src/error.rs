//! Error types for Marga.
//!
//! "No path this cycle" is not an error: the planner reports it through
//! [`PlanOutcome::NoPath`](crate::planning::PlanOutcome). The variants here
//! mean the caller handed over malformed input.

use thiserror::Error;

/// Geometry precondition violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Radius zero, negative, NaN or infinite
    #[error("circle radius must be positive and finite, got {0}")]
    NonPositiveRadius(f32),

    /// Radial push requested from the exact centre
    #[error("point ({x:.3}, {y:.3}) coincides with circle centre, radial direction undefined")]
    PointAtCentre {
        /// Point X
        x: f32,
        /// Point Y
        y: f32,
    },
}

/// Planner error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Malformed obstacle geometry from upstream
    #[error("degenerate obstacle: {0}")]
    DegenerateObstacle(#[from] GeometryError),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or type error
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
