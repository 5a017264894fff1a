//! Plan one move on a match-like pitch and write the scene to SVG.
//!
//! Usage: cargo run --example plan_demo -- [config.toml] [output.svg]
//!
//! Set RUST_LOG=marga=debug to watch the search.

use std::path::Path;

use marga::core::math::rad_to_deg;
use marga::io::{PlanVisualizer, SvgConfig};
use marga::{MargaConfig, ObstacleFlags, PlanOutcome, Pose2D, TeamColour, Vector2D, WorldSnapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => MargaConfig::load(Path::new(path))?,
        None => MargaConfig::load_default()?,
    };
    let output = args.get(2).map(String::as_str).unwrap_or("plan.svg");

    let world = WorldSnapshot::new(
        config.pitch(),
        TeamColour::Blue,
        Pose2D::new(30.0, 56.0, 0.0),
        config.radii(),
    )?
    .with_opponent(Pose2D::new(120.0, 62.0, 3.0))
    .with_ball(Vector2D::new(180.0, 45.0));

    let destination = Vector2D::new(225.0, 56.0);
    let ball_is_obstacle = true;

    let planner = config.tangent_planner();
    let result = planner.plan_for_own_robot(&world, destination, ball_is_obstacle)?;
    tracing::info!(
        "Search expanded {} nodes, {} tangent points, deepest level {}",
        result.stats.nodes_expanded,
        result.stats.tangent_points_evaluated,
        result.stats.max_depth_reached
    );

    let path = match result.outcome {
        PlanOutcome::Found(path) => path,
        PlanOutcome::NoPath(reason) => {
            tracing::warn!("No tangent path: {}", reason);
            planner.plan_for_own_robot_with_fallback(
                &world,
                destination,
                ball_is_obstacle,
                &config.heuristic_planner(),
            )?
        }
    };

    println!("Path cost {:.1} cm over {} waypoints", path.cost(), path.len());
    for (i, waypoint) in path.iter().enumerate() {
        println!(
            "  {}: turn {:+.1} deg, drive {:.1} cm -> {}{}",
            i + 1,
            rad_to_deg(waypoint.turning_angle()),
            waypoint.distance(),
            waypoint.target(),
            if waypoint.is_final() { " (final)" } else { "" }
        );
    }

    let mask = ObstacleFlags::for_opponent(ball_is_obstacle, world.own_team());
    PlanVisualizer::new(config.pitch(), SvgConfig::default())
        .with_title("marga plan")
        .with_obstacles(&world, mask)
        .with_clearance(config.planner.clearance_margin)
        .with_start(world.own_robot())
        .with_destination(destination)
        .with_path(path)
        .save(Path::new(output))?;
    tracing::info!("Wrote {}", output);

    Ok(())
}
