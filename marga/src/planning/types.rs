//! Planner result types.

use std::fmt;

use serde::Serialize;

use super::waypoint::Path;

/// Why a plan call produced no path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NoPathReason {
    /// Start or destination lies off the pitch; nothing was searched
    OutOfBounds,
    /// At least one branch ran into the depth limit
    DepthExceeded,
    /// Every candidate detour was blocked or dead-ended
    NoClearRoute,
}

impl fmt::Display for NoPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoPathReason::OutOfBounds => write!(f, "endpoint out of bounds"),
            NoPathReason::DepthExceeded => write!(f, "depth limit exceeded"),
            NoPathReason::NoClearRoute => write!(f, "no clear route"),
        }
    }
}

/// Outcome of one plan call.
///
/// `NoPath` is an ordinary answer ("no plan this cycle"), not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanOutcome {
    /// A path to the destination
    Found(Path),
    /// No plan this cycle
    NoPath(NoPathReason),
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Recursive calls entered, the top-level call included
    pub nodes_expanded: usize,
    /// Tangent points taken from obstacle circles
    pub tangent_points_evaluated: usize,
    /// Tangent points dropped because the leg to them was blocked
    pub candidates_rejected: usize,
    /// Branches cut by the depth limit
    pub depth_limit_hits: usize,
    /// Branches cut because an endpoint was off the pitch
    pub bounds_rejections: usize,
    /// Deepest recursion level entered
    pub max_depth_reached: usize,
}

/// Result of one plan call together with its search statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanResult {
    /// Path or failure reason
    pub outcome: PlanOutcome,
    /// Search counters
    pub stats: SearchStats,
}

impl PlanResult {
    /// The planned path, if one was found
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            PlanOutcome::Found(path) => Some(path),
            PlanOutcome::NoPath(_) => None,
        }
    }

    /// Consume the result, keeping only the path
    pub fn into_path(self) -> Option<Path> {
        match self.outcome {
            PlanOutcome::Found(path) => Some(path),
            PlanOutcome::NoPath(_) => None,
        }
    }

    /// True if a path was found
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, PlanOutcome::Found(_))
    }

    /// Failure reason, if no path was found
    pub fn no_path_reason(&self) -> Option<NoPathReason> {
        match self.outcome {
            PlanOutcome::Found(_) => None,
            PlanOutcome::NoPath(reason) => Some(reason),
        }
    }
}
