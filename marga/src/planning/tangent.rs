//! Recursive tangent-point planner.
//!
//! From the current point, head straight for the destination if nothing is
//! in the way. Otherwise try the two tangent points of every obstacle
//! circle (pushed out by the clearance margin), recurse from each reachable
//! one and keep the cheapest sub-path. Depth is bounded, so the search
//! always terminates; the result is a greedy detour, not a shortest path.
//!
//! Candidates are enumerated obstacle by obstacle, counter-clockwise tangent
//! first. On equal cost the first candidate found wins.

use serde::{Deserialize, Serialize};

use super::heuristic::HeuristicPlanner;
use super::types::{NoPathReason, PlanOutcome, PlanResult, SearchStats};
use super::waypoint::{Path, Waypoint};
use crate::config::defaults;
use crate::core::math::DISTANCE_EPSILON;
use crate::core::{Circle, Vector2D};
use crate::error::PlanError;
use crate::world::{ObstacleFlags, ObstacleView, WorldSnapshot};

/// Configuration for the tangent planner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Extra distance kept from obstacle boundaries when routing around them (cm)
    #[serde(default = "defaults::clearance_margin")]
    pub clearance_margin: f32,
    /// Recursion limit, which also caps the waypoint count
    #[serde(default = "defaults::max_depth")]
    pub max_depth: usize,
    /// Detour points must stay this far inside the pitch edges (cm)
    #[serde(default = "defaults::detour_padding")]
    pub detour_padding: f32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            clearance_margin: defaults::clearance_margin(),
            max_depth: defaults::max_depth(),
            detour_padding: defaults::detour_padding(),
        }
    }
}

/// Tangent-point path planner.
///
/// Holds no per-call state, so one planner may serve concurrent calls.
#[derive(Clone, Debug, Default)]
pub struct TangentPlanner {
    config: PlannerConfig,
}

/// A successful detour through one tangent point.
struct Candidate {
    cost: f32,
    point: Vector2D,
    rest: Path,
}

/// State shared by every level of one search.
struct Search<'a, V: ?Sized> {
    view: &'a V,
    circles: Vec<Circle>,
    destination: Vector2D,
    mask: ObstacleFlags,
    config: &'a PlannerConfig,
}

impl TangentPlanner {
    /// Create a new planner with configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Create a new planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a path from `start` (facing `start_heading`) to `destination`,
    /// avoiding the obstacles selected by `mask`.
    ///
    /// An unreachable destination is reported as [`PlanOutcome::NoPath`];
    /// `Err` only signals degenerate geometry from upstream.
    pub fn plan<V: ObstacleView + ?Sized>(
        &self,
        view: &V,
        start: Vector2D,
        start_heading: f32,
        destination: Vector2D,
        mask: ObstacleFlags,
    ) -> Result<PlanResult, PlanError> {
        let mut stats = SearchStats::default();

        tracing::debug!(
            "Planning {} -> {} (mask {:#x})",
            start,
            destination,
            mask.bits()
        );

        if !view.is_in_bounds(start) || !view.is_in_bounds(destination) {
            stats.bounds_rejections += 1;
            tracing::debug!("Endpoint off the pitch, not searching");
            return Ok(PlanResult {
                outcome: PlanOutcome::NoPath(NoPathReason::OutOfBounds),
                stats,
            });
        }

        let search = Search {
            view,
            circles: view.obstacle_circles(mask),
            destination,
            mask,
            config: &self.config,
        };
        let found = search.descend(start, start_heading, 0, &mut stats)?;

        let outcome = match found {
            Some(path) => {
                tracing::debug!(
                    "Found path: {} waypoints, cost {:.1}, {} nodes",
                    path.len(),
                    path.cost(),
                    stats.nodes_expanded
                );
                PlanOutcome::Found(path)
            }
            None => {
                let reason = if stats.depth_limit_hits > 0 {
                    NoPathReason::DepthExceeded
                } else {
                    NoPathReason::NoClearRoute
                };
                tracing::debug!("No path ({}), {} nodes", reason, stats.nodes_expanded);
                PlanOutcome::NoPath(reason)
            }
        };

        Ok(PlanResult { outcome, stats })
    }

    /// Plan for our own robot from its current pose.
    ///
    /// The opponent is always an obstacle, our own robot never is, and the
    /// ball only when `ball_is_obstacle` is set.
    pub fn plan_for_own_robot(
        &self,
        snapshot: &WorldSnapshot,
        destination: Vector2D,
        ball_is_obstacle: bool,
    ) -> Result<PlanResult, PlanError> {
        let pose = snapshot.own_robot();
        let mask = ObstacleFlags::for_opponent(ball_is_obstacle, snapshot.own_team());
        self.plan(snapshot, pose.position, pose.heading, destination, mask)
    }

    /// Like [`plan_for_own_robot`](Self::plan_for_own_robot), but falls back
    /// to a single heuristic waypoint when no tangent path exists.
    ///
    /// The fallback path holds exactly one waypoint, which is final only if
    /// the destination happens to be in direct line of sight.
    pub fn plan_for_own_robot_with_fallback(
        &self,
        snapshot: &WorldSnapshot,
        destination: Vector2D,
        ball_is_obstacle: bool,
        fallback: &HeuristicPlanner,
    ) -> Result<Path, PlanError> {
        let result = self.plan_for_own_robot(snapshot, destination, ball_is_obstacle)?;

        match result.outcome {
            PlanOutcome::Found(path) => Ok(path),
            PlanOutcome::NoPath(reason) => {
                tracing::warn!("Tangent planner failed ({}), using ray-fan fallback", reason);
                let mask = ObstacleFlags::for_opponent(ball_is_obstacle, snapshot.own_team());
                let waypoint =
                    fallback.next_waypoint(snapshot, snapshot.own_robot(), destination, mask);
                Ok(Path::direct(waypoint))
            }
        }
    }
}

impl<V: ObstacleView + ?Sized> Search<'_, V> {
    /// One level of the recursive search.
    fn descend(
        &self,
        start: Vector2D,
        heading: f32,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Result<Option<Path>, PlanError> {
        stats.nodes_expanded += 1;
        stats.max_depth_reached = stats.max_depth_reached.max(depth);

        if !self.view.is_in_bounds(start) || !self.view.is_in_bounds(self.destination) {
            stats.bounds_rejections += 1;
            return Ok(None);
        }

        if depth >= self.config.max_depth {
            stats.depth_limit_hits += 1;
            return Ok(None);
        }

        let Some(start) = self.push_out_of_obstacles(start)? else {
            return Ok(None);
        };

        if self.view.is_segment_clear(start, self.destination, self.mask) {
            let cost = (self.destination - start).length();
            return Ok(Some(Path::direct(Waypoint::new(
                start,
                heading,
                self.destination,
                cost,
                true,
            ))));
        }

        let tangents = self.circles.iter().filter_map(|circle| {
            circle
                .tangent_points(start)
                .map(|points| points.map(|point| (circle, point)))
        });

        let best = tangents.flatten().try_fold(
            None,
            |best: Option<Candidate>, (circle, tangent)| -> Result<Option<Candidate>, PlanError> {
                stats.tangent_points_evaluated += 1;

                let point = circle
                    .point_at_distance(tangent, circle.radius() + self.config.clearance_margin)?;

                if !self
                    .view
                    .is_in_padded_bounds(point, self.config.detour_padding)
                {
                    stats.bounds_rejections += 1;
                    tracing::trace!("depth {}: detour {} too close to the edge", depth, point);
                    return Ok(best);
                }

                if !self.view.is_segment_clear(start, point, self.mask) {
                    stats.candidates_rejected += 1;
                    tracing::trace!("depth {}: leg {} -> {} blocked", depth, start, point);
                    return Ok(best);
                }

                let leg = point - start;
                let Some(rest) = self.descend(point, leg.direction(), depth + 1, stats)? else {
                    return Ok(best);
                };

                let candidate = Candidate {
                    cost: rest.cost() + leg.length(),
                    point,
                    rest,
                };
                tracing::trace!(
                    "depth {}: candidate {} costs {:.1}",
                    depth,
                    point,
                    candidate.cost
                );

                Ok(Some(cheaper(best, candidate)))
            },
        )?;

        Ok(best.map(|winner| {
            winner
                .rest
                .prepended(Waypoint::new(start, heading, winner.point, winner.cost, false))
        }))
    }

    /// Move `point` out of every obstacle it lies in, onto the ring at
    /// radius plus clearance margin.
    ///
    /// A push out of one circle can land inside another, so passes repeat
    /// until one moves nothing, at most once per circle plus one. Overlapping
    /// circles can bounce the point forever; `None` means it is still inside
    /// an obstacle when the passes run out.
    fn push_out_of_obstacles(&self, point: Vector2D) -> Result<Option<Vector2D>, PlanError> {
        let mut current = point;

        for _ in 0..=self.circles.len() {
            let next = self.circles.iter().try_fold(current, |p, circle| {
                if circle.contains(p) {
                    circle.point_at_distance(p, circle.radius() + self.config.clearance_margin)
                } else {
                    Ok(p)
                }
            })?;
            if next == current {
                break;
            }
            current = next;
        }

        // Points left on a boundary (zero margin) count as outside
        let trapped = self
            .circles
            .iter()
            .any(|c| c.center().distance(&current) < c.radius() - DISTANCE_EPSILON);
        if trapped {
            tracing::debug!("Start {} trapped between overlapping obstacles", point);
            return Ok(None);
        }

        if current != point {
            tracing::debug!("Start {} inside an obstacle, moved to {}", point, current);
        }
        Ok(Some(current))
    }
}

/// The cheaper of the best candidate so far and a new one; `best` wins ties.
fn cheaper(best: Option<Candidate>, candidate: Candidate) -> Candidate {
    match best {
        Some(best) if best.cost <= candidate.cost => best,
        _ => candidate,
    }
}
