//! Path planning.
//!
//! This module provides:
//! - [`TangentPlanner`]: depth-bounded recursive search over obstacle tangent points
//! - [`HeuristicPlanner`]: single-step ray-fan fallback
//! - [`Path`] and [`Waypoint`]: planner output for the motion layer

mod heuristic;
mod tangent;
mod types;
mod waypoint;

pub use heuristic::{HeuristicConfig, HeuristicPlanner};
pub use tangent::{PlannerConfig, TangentPlanner};
pub use types::{NoPathReason, PlanOutcome, PlanResult, SearchStats};
pub use waypoint::{Path, Waypoint};
