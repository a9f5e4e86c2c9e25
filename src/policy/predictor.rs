//! Bounded policy rollout from a start cell toward a goal cell

use crate::core::types::{Action, GridPos};
use crate::policy::model::PolicyModel;
use serde::{Deserialize, Serialize};

/// One emitted move of a rollout
///
/// `step` is 1-based; the start position itself is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub position: GridPos,
    pub action: Action,
    pub step: usize,
}

/// Result of a rollout
///
/// `reached_goal` records whether the loop stopped on the goal or on the
/// step budget; callers must check it rather than assume arrival. With
/// only the two monotone actions, a goal below or left of the start can
/// never be reached and the budget is always exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    pub steps: Vec<PathStep>,
    pub final_position: GridPos,
    pub reached_goal: bool,
    /// True when any step came from the policy's random fallback
    pub degraded: bool,
}

/// Drives the policy over successive positions to produce a trajectory
#[derive(Debug, Clone)]
pub struct PathPredictor {
    model: PolicyModel,
}

impl PathPredictor {
    pub fn new(model: PolicyModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &PolicyModel {
        &self.model
    }

    /// Roll the policy out from `start`, stopping the first time the
    /// emitted position equals `goal` or after `max_steps` steps
    ///
    /// Each step applies exactly one action, clamped at the grid boundary;
    /// a clamped no-move still consumes a step. Deterministic whenever the
    /// model evaluates cleanly.
    pub fn predict_path(&self, start: GridPos, goal: GridPos, max_steps: usize) -> Trajectory {
        let grid_size = self.model.grid_size();
        let mut current = start.clamped(grid_size);
        let mut steps = Vec::new();
        let mut degraded = false;
        let mut reached_goal = false;

        for step in 1..=max_steps {
            let choice = self.model.select_action(current);
            degraded |= choice.is_degraded();

            let action = choice.action();
            current = current.apply(action, grid_size);
            steps.push(PathStep {
                position: current,
                action,
                step,
            });

            if current == goal {
                reached_goal = true;
                break;
            }
        }

        Trajectory {
            steps,
            final_position: current,
            reached_goal,
            degraded,
        }
    }
}
