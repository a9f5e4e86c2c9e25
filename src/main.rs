//! Pathwright - Entry Point
//!
//! Short demonstration drive of the planner against the built-in course:
//! suggest, complete, plan a route, and print the progress projection.
//! The real service surface lives outside this crate.

use pathwright::core::error::Result;
use pathwright::core::types::GridPos;
use pathwright::planner::AdaptivePathPlanner;
use std::path::Path;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("pathwright=debug")
        .init();

    tracing::info!("Pathwright starting...");

    // Missing artifact is tolerated: the planner warns and runs untrained
    let model_path = Path::new("models/policy.json");
    let planner = AdaptivePathPlanner::with_default_course(Some(model_path), 0)?;

    let user = "demo_user";
    let session = planner.start_session(user);

    println!("\n=== PATHWRIGHT ===");
    println!("Suggested next: {:?}", planner.suggest_next(user, 3));

    planner.record_completion(
        user,
        "Introduction to Mathematical Logic",
        Some(GridPos::new(0, 0)),
        Some(&session),
    );
    planner.record_completion(user, "Sets", Some(GridPos::new(1, 1)), Some(&session));

    let route = planner.plan_to_goal(user, "set_theory", None, Some(&session));
    println!(
        "Planned {} resources toward '{}' ({} grid steps, reached goal: {})",
        route.curriculum.len(),
        route.goal,
        route.trajectory.steps.len(),
        route.trajectory.reached_goal
    );
    println!("Policy confidence at start: {:.2}", route.confidence);

    planner.end_session(&session);

    if let Some(stats) = planner.progress(user) {
        println!(
            "{}: {}/{} resources ({}%), score {}, achievements {:?}",
            stats.user_id,
            stats.completed_count,
            stats.total_resources,
            stats.progress_percentage,
            stats.score,
            stats.achievements
        );
    }

    Ok(())
}
