//! # Marga
//!
//! Obstacle-avoiding path planner for a small robot on a bounded pitch.
//!
//! ## Overview
//!
//! Given a frozen snapshot of the pitch (our robot, the opponent, the ball)
//! Marga plans a short sequence of straight moves from the robot's pose to a
//! destination. Obstacles are circles; when the straight line is blocked the
//! planner detours through tangent points of those circles, pushed out by a
//! clearance margin, recursing up to a fixed depth.
//!
//! - **Tangent planner**: greedy, depth-bounded, deterministic
//! - **Heuristic fallback**: a single ray-fan waypoint when no path exists
//! - **Local-frame waypoints**: each step is stored as "turn, then drive"
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{ObstacleFlags, ObstacleSet, Pitch, TangentPlanner, Vector2D, Circle};
//!
//! let scene = ObstacleSet::new(Pitch::default()).with_obstacle(
//!     ObstacleFlags::YELLOW,
//!     Circle::new(Vector2D::new(120.0, 56.0), 20.0).unwrap(),
//! );
//!
//! let planner = TangentPlanner::with_defaults();
//! let result = planner
//!     .plan(
//!         &scene,
//!         Vector2D::new(40.0, 56.0),
//!         0.0,
//!         Vector2D::new(200.0, 56.0),
//!         ObstacleFlags::YELLOW,
//!     )
//!     .unwrap();
//!
//! let path = result.path().expect("detour exists");
//! assert!(path.len() >= 2);
//! assert!(path.last().is_final());
//! ```
//!
//! ## Coordinate System
//!
//! - Lengths in centimetres, origin at a pitch corner
//! - Angles in radians, CCW positive from +X
//! - Waypoint directions are local: +X is the heading at the step start

#![warn(missing_docs)]

// Geometry kernel
pub mod core;

// World snapshot and obstacle queries
pub mod world;

// Planners and their output
pub mod planning;

// TOML configuration
pub mod config;

// SVG export
pub mod io;

// Error types
pub mod error;

pub use crate::core::{Circle, Pose2D, Vector2D};
pub use config::MargaConfig;
pub use error::{ConfigError, GeometryError, PlanError};
pub use planning::{
    HeuristicConfig, HeuristicPlanner, NoPathReason, Path, PlanOutcome, PlanResult,
    PlannerConfig, SearchStats, TangentPlanner, Waypoint,
};
pub use world::{ObstacleFlags, ObstacleSet, ObstacleView, Pitch, TeamColour, WorldSnapshot};
