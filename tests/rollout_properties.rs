//! Property tests for the rollout contract
//!
//! Every trajectory, under any seed, must respect the step budget, stay
//! inside the grid, and move monotonically in both coordinates.

use pathwright::core::config::PlannerConfig;
use pathwright::core::types::GridPos;
use pathwright::policy::{PathPredictor, PolicyModel};
use proptest::prelude::*;

fn predictor(seed: u64) -> PathPredictor {
    PathPredictor::new(PolicyModel::untrained(&PlannerConfig::default(), seed))
}

proptest! {
    #[test]
    fn trajectory_respects_step_budget(
        seed in 0u64..64,
        sx in 0i32..10, sy in 0i32..10,
        gx in 0i32..10, gy in 0i32..10,
        max_steps in 1usize..80,
    ) {
        let t = predictor(seed).predict_path(
            GridPos::new(sx, sy),
            GridPos::new(gx, gy),
            max_steps,
        );
        prop_assert!(t.steps.len() <= max_steps);
    }

    #[test]
    fn positions_stay_in_bounds_and_monotone(
        seed in 0u64..64,
        sx in 0i32..10, sy in 0i32..10,
        max_steps in 1usize..80,
    ) {
        let start = GridPos::new(sx, sy);
        let t = predictor(seed).predict_path(start, GridPos::new(9, 9), max_steps);

        let mut prev = start;
        for (i, step) in t.steps.iter().enumerate() {
            prop_assert_eq!(step.step, i + 1);
            prop_assert!((0..10).contains(&step.position.x));
            prop_assert!((0..10).contains(&step.position.y));
            prop_assert!(step.position.x >= prev.x);
            prop_assert!(step.position.y >= prev.y);
            prev = step.position;
        }
        prop_assert_eq!(t.final_position, prev);
    }

    #[test]
    fn goal_behind_start_exhausts_budget(
        seed in 0u64..64,
        sx in 1i32..10, sy in 0i32..10,
        gy in 0i32..10,
        max_steps in 1usize..50,
    ) {
        // Goal strictly left of start: monotone actions cannot reach it
        let t = predictor(seed).predict_path(
            GridPos::new(sx, sy),
            GridPos::new(sx - 1, gy),
            max_steps,
        );
        prop_assert!(!t.reached_goal);
        prop_assert_eq!(t.steps.len(), max_steps);
    }

    #[test]
    fn reaching_goal_stops_the_rollout(
        seed in 0u64..64,
        sx in 0i32..10, sy in 0i32..10,
        max_steps in 1usize..80,
    ) {
        let start = GridPos::new(sx, sy);
        let t = predictor(seed).predict_path(start, GridPos::new(9, 9), max_steps);
        if t.reached_goal {
            prop_assert_eq!(t.final_position, GridPos::new(9, 9));
            prop_assert_eq!(
                t.steps.last().map(|s| s.position),
                Some(GridPos::new(9, 9))
            );
        }
    }
}
