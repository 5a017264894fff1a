//! Ray-fan fallback for when the tangent search finds nothing.
//!
//! Produces a single next waypoint rather than a full path: rays are cast
//! around the robot at the target distance and the clear ray pointing most
//! nearly at the target wins. If every ray is blocked the fan is shrunk and
//! retried a few times before giving up and heading straight for the target.

use serde::{Deserialize, Serialize};

use super::waypoint::Waypoint;
use crate::config::defaults;
use crate::core::math::{TWO_PI, angle_diff, deg_to_rad, normalize_angle};
use crate::core::{Pose2D, Vector2D};
use crate::world::{ObstacleFlags, ObstacleView};

/// Ray fan parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Number of rays over the full circle
    #[serde(default = "defaults::section_count")]
    pub section_count: usize,
    /// Fan attempts before falling back to the raw target
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: usize,
    /// Ray length reduction between attempts (cm)
    #[serde(default = "defaults::shrink_step")]
    pub shrink_step: f32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            section_count: defaults::section_count(),
            max_attempts: defaults::max_attempts(),
            shrink_step: defaults::shrink_step(),
        }
    }
}

/// Greedy single-step planner.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPlanner {
    config: HeuristicConfig,
}

impl HeuristicPlanner {
    /// Create a planner with configuration.
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(HeuristicConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Pick the next waypoint from `pose` towards `target`.
    ///
    /// The waypoint is final only when the target itself is in line of
    /// sight. Otherwise it ends at the chosen ray tip, or at the raw target
    /// once every attempt has failed.
    pub fn next_waypoint<V: ObstacleView + ?Sized>(
        &self,
        view: &V,
        pose: Pose2D,
        target: Vector2D,
        mask: ObstacleFlags,
    ) -> Waypoint {
        let origin = pose.position;
        let local_target = pose.to_local(target);
        let target_distance = local_target.length();

        if view.is_segment_clear(origin, target, mask) {
            return Waypoint::new(origin, pose.heading, target, target_distance, true);
        }

        let target_angle = local_target.direction();
        let sections = self.config.section_count.max(1);
        let section_angle = TWO_PI / sections as f32;
        let mut ray_length = target_distance;

        for attempt in 0..self.config.max_attempts {
            if ray_length <= 0.0 {
                break;
            }

            let best = (0..sections)
                .map(|i| normalize_angle(deg_to_rad(-90.0) + section_angle * (i as f32 + 0.5)))
                .filter_map(|angle| {
                    let tip = pose.to_global(Vector2D::from_polar(angle, ray_length));
                    let usable = view.is_in_bounds(tip) && view.is_segment_clear(origin, tip, mask);
                    usable.then(|| (angle_diff(target_angle, angle).abs(), tip))
                })
                .min_by(|a, b| a.0.total_cmp(&b.0));

            if let Some((offset, tip)) = best {
                tracing::debug!(
                    "Fan attempt {} picked ray {:.3} rad off target at length {:.1}",
                    attempt,
                    offset,
                    ray_length
                );
                return Waypoint::new(origin, pose.heading, tip, ray_length, false);
            }

            ray_length -= self.config.shrink_step;
        }

        tracing::warn!("Every ray blocked, heading straight for target {}", target);
        Waypoint::new(origin, pose.heading, target, target_distance, false)
    }
}
