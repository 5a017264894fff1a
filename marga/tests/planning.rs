//! End-to-end planning scenarios.

mod common;

use approx::assert_relative_eq;
use common::MASK;
use marga::{
    HeuristicPlanner, MargaConfig, NoPathReason, PlanOutcome, PlannerConfig, Pose2D,
    TangentPlanner, Vector2D,
};

// ============================================================================
// Basic Scenarios
// ============================================================================

#[test]
fn test_no_obstacles_single_final_waypoint() {
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan(
            &common::scene(&[]),
            Vector2D::new(0.0, 0.0),
            0.0,
            Vector2D::new(100.0, 0.0),
            MASK,
        )
        .unwrap();

    let path = result.path().expect("direct path");
    assert_eq!(path.len(), 1);
    assert!(path.first().is_final());
    assert_relative_eq!(path.cost(), 100.0, epsilon = 1e-3);
    assert_relative_eq!(path.first().direction().x, 100.0, epsilon = 1e-3);
    assert_relative_eq!(path.first().direction().y, 0.0, epsilon = 1e-3);
}

#[test]
fn test_single_blocking_obstacle_detours_once() {
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan(
            &common::scene(&[(50.0, 0.0, 20.0)]),
            Vector2D::new(0.0, 0.0),
            0.0,
            Vector2D::new(100.0, 0.0),
            MASK,
        )
        .unwrap();

    let path = result.path().expect("detour path");
    assert_eq!(path.len(), 2);
    assert!(!path.first().is_final());
    assert!(path.last().is_final());
    assert!(path.cost() > 100.0);
    assert!(path.cost().is_finite());

    // The detour point sits on the clearance ring
    let detour = path.first().target();
    assert_relative_eq!(detour.distance(&Vector2D::new(50.0, 0.0)), 30.0, epsilon = 1e-3);
    assert_eq!(path.last().target(), Vector2D::new(100.0, 0.0));
}

#[test]
fn test_heading_changes_local_directions_only() {
    let planner = TangentPlanner::with_defaults();
    let scene = common::scene(&[(50.0, 0.0, 20.0)]);
    let plan = |heading: f32| {
        planner
            .plan(
                &scene,
                Vector2D::new(0.0, 0.0),
                heading,
                Vector2D::new(100.0, 0.0),
                MASK,
            )
            .unwrap()
            .into_path()
            .unwrap()
    };

    let facing_east = plan(0.0);
    let facing_north = plan(std::f32::consts::FRAC_PI_2);
    assert_eq!(facing_east.global_points(), facing_north.global_points());
    assert_relative_eq!(facing_east.cost(), facing_north.cost());
    assert_relative_eq!(
        facing_east.first().turning_angle() - facing_north.first().turning_angle(),
        std::f32::consts::FRAC_PI_2,
        epsilon = 1e-5
    );
}

// ============================================================================
// Tie-Breaking
// ============================================================================

#[test]
fn test_centred_obstacle_takes_counter_clockwise_detour() {
    // Both detours cost the same; the counter-clockwise tangent comes first
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan(
            &common::scene(&[(120.0, 56.0, 20.0)]),
            Vector2D::new(40.0, 56.0),
            0.0,
            Vector2D::new(200.0, 56.0),
            MASK,
        )
        .unwrap();

    let path = result.path().expect("detour path");
    assert_eq!(path.len(), 2);
    let detour = path.first().target();
    assert_relative_eq!(detour.x, 112.50, epsilon = 1e-2);
    assert_relative_eq!(detour.y, 85.05, epsilon = 1e-2);
    assert!(path.first().turning_angle() > 0.0);
}

#[test]
fn test_mirror_obstacles_resolved_by_insertion_order() {
    // Upper and lower circles mirror each other about the start->destination line
    let upper = (100.0, 15.0, 20.0);
    let lower = (100.0, -15.0, 20.0);
    let planner = TangentPlanner::with_defaults();
    let first_detour = |circles: &[(f32, f32, f32)]| {
        planner
            .plan(
                &common::OpenField::new(circles),
                Vector2D::new(0.0, 0.0),
                0.0,
                Vector2D::new(200.0, 0.0),
                MASK,
            )
            .unwrap()
            .into_path()
            .expect("detour path")
            .first()
            .target()
    };

    let upper_first = first_detour(&[upper, lower]);
    let lower_first = first_detour(&[lower, upper]);

    assert!(upper_first.y > 0.0, "upper circle listed first: {}", upper_first);
    assert!(lower_first.y < 0.0, "lower circle listed first: {}", lower_first);
    assert_relative_eq!(upper_first.x, lower_first.x);
    assert_relative_eq!(upper_first.y, -lower_first.y);
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_destination_off_pitch_is_rejected_without_search() {
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan(
            &common::scene(&[(50.0, 50.0, 20.0)]),
            Vector2D::new(10.0, 50.0),
            0.0,
            Vector2D::new(300.0, 50.0),
            MASK,
        )
        .unwrap();

    assert_eq!(
        result.outcome,
        PlanOutcome::NoPath(NoPathReason::OutOfBounds)
    );
    assert_eq!(result.stats.tangent_points_evaluated, 0);
    assert_eq!(result.stats.nodes_expanded, 0);
}

#[test]
fn test_start_off_pitch_is_rejected() {
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan(
            &common::scene(&[]),
            Vector2D::new(-5.0, 50.0),
            0.0,
            Vector2D::new(100.0, 50.0),
            MASK,
        )
        .unwrap();
    assert_eq!(result.no_path_reason(), Some(NoPathReason::OutOfBounds));
}

#[test]
fn test_destination_inside_obstacle_exhausts_depth() {
    // Every detour circles the obstacle on its clearance ring; the
    // destination at the centre is never visible.
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan(
            &common::scene(&[(122.0, 56.0, 20.0)]),
            Vector2D::new(20.0, 56.0),
            0.0,
            Vector2D::new(122.0, 56.0),
            MASK,
        )
        .unwrap();

    assert!(!result.is_found());
    assert_eq!(result.no_path_reason(), Some(NoPathReason::DepthExceeded));
    assert_eq!(result.stats.max_depth_reached, 10);
    assert!(result.stats.depth_limit_hits > 0);
}

#[test]
fn test_smaller_depth_budget_gives_up_sooner() {
    let scene = common::scene(&[(122.0, 56.0, 20.0)]);
    let run = |max_depth: usize| {
        TangentPlanner::new(PlannerConfig {
            max_depth,
            ..PlannerConfig::default()
        })
        .plan(
            &scene,
            Vector2D::new(20.0, 56.0),
            0.0,
            Vector2D::new(122.0, 56.0),
            MASK,
        )
        .unwrap()
    };

    let shallow = run(3);
    let deep = run(6);
    assert_eq!(shallow.stats.max_depth_reached, 3);
    assert!(shallow.stats.nodes_expanded < deep.stats.nodes_expanded);
}

#[test]
fn test_masked_out_obstacle_is_ignored() {
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan(
            &common::scene(&[(50.0, 0.0, 20.0)]),
            Vector2D::new(0.0, 0.0),
            0.0,
            Vector2D::new(100.0, 0.0),
            marga::ObstacleFlags::BALL,
        )
        .unwrap();
    assert_eq!(result.path().unwrap().len(), 1);
}

// ============================================================================
// Start Correction
// ============================================================================

#[test]
fn test_start_inside_obstacle_is_corrected() {
    let planner = TangentPlanner::with_defaults();
    let center = Vector2D::new(50.0, 50.0);
    let result = planner
        .plan(
            &common::scene(&[(50.0, 50.0, 20.0)]),
            Vector2D::new(55.0, 50.0),
            0.0,
            Vector2D::new(200.0, 50.0),
            MASK,
        )
        .unwrap();

    let first = *result.path().unwrap().first();
    assert_relative_eq!(first.origin().distance(&center), 30.0, epsilon = 1e-3);
    // Direction measured from the corrected start (80, 50), not (55, 50)
    assert_relative_eq!(first.direction().x, 120.0, epsilon = 1e-3);
    assert_relative_eq!(first.direction().y, 0.0, epsilon = 1e-3);
}

// ============================================================================
// Own Robot Planning
// ============================================================================

#[test]
fn test_own_robot_detours_around_opponent() {
    let world = common::match_snapshot(
        Pose2D::new(30.0, 56.0, 0.0),
        Some(Pose2D::new(120.0, 56.0, 3.0)),
        None,
    );
    let planner = TangentPlanner::with_defaults();
    let result = planner
        .plan_for_own_robot(&world, Vector2D::new(210.0, 56.0), false)
        .unwrap();

    let path = result.path().expect("route around the opponent");
    assert!(path.len() >= 2);
    assert_eq!(path.first().origin(), Vector2D::new(30.0, 56.0));
    for pair in path.global_points().windows(2) {
        assert!(
            marga::world::is_segment_clear_of(
                &marga::ObstacleView::obstacle_circles(&world, marga::ObstacleFlags::YELLOW),
                pair[0],
                pair[1]
            ),
            "segment {} -> {} crosses the opponent",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_fallback_returns_single_heuristic_waypoint() {
    let world = common::match_snapshot(
        Pose2D::new(30.0, 56.0, 0.0),
        Some(Pose2D::new(150.0, 56.0, 0.0)),
        None,
    );
    let config = MargaConfig::default();
    let path = config
        .tangent_planner()
        .plan_for_own_robot_with_fallback(
            &world,
            Vector2D::new(150.0, 56.0),
            false,
            &HeuristicPlanner::new(config.fallback.clone()),
        )
        .unwrap();

    assert_eq!(path.len(), 1);
    assert!(!path.first().is_final());
    assert!(path.first().distance() > 0.0);
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/marga.toml");
    let config = MargaConfig::load(&path).unwrap();
    assert_eq!(config, MargaConfig::default());
}
