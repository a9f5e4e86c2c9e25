//! Adaptive path planner - the orchestrator
//!
//! Combines the prerequisite graph (what is unlockable) with the learned
//! path predictor (how to traverse the grid toward a goal) and records
//! outcomes through the progress store. Pure reads everywhere except the
//! store; safe to share behind an `Arc` across request handlers.

use crate::catalog::{
    default_graph, default_paths, Catalog, PathLibrary, PrerequisiteGraph, DEFAULT_GOAL,
};
use crate::core::config::PlannerConfig;
use crate::core::error::{PlanError, Result};
use crate::core::types::GridPos;
use crate::policy::{PathPredictor, PolicyModel, Trajectory};
use crate::progress::{ProgressStats, ProgressStore, Session, UserProgressRecord};
use crate::spatial::GridLayout;
use std::path::Path;

/// A planned route toward a named goal
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    /// Resolved goal name (the fallback goal when the requested one is
    /// unknown)
    pub goal: String,
    /// Curriculum resources the user has not completed yet, in order
    pub curriculum: Vec<String>,
    /// Grid trajectory from the user's current position to the goal cell
    pub trajectory: Trajectory,
    /// Policy confidence at the user's current position
    pub confidence: f32,
}

/// Orchestrates catalog, policy, and progress into recommendations
pub struct AdaptivePathPlanner {
    graph: PrerequisiteGraph,
    paths: PathLibrary,
    layout: GridLayout,
    predictor: PathPredictor,
    store: ProgressStore,
    config: PlannerConfig,
}

impl AdaptivePathPlanner {
    /// Assemble a planner, failing fast on invalid config or cyclic data
    pub fn new(
        graph: PrerequisiteGraph,
        paths: PathLibrary,
        layout: GridLayout,
        model: PolicyModel,
        config: PlannerConfig,
    ) -> Result<Self> {
        config.validate().map_err(PlanError::Config)?;
        graph.validate()?;

        if !model.is_trained() {
            tracing::warn!("planner running on untrained policy weights");
        }

        let store = ProgressStore::new(config.completion_reward);
        Ok(Self {
            graph,
            paths,
            layout,
            predictor: PathPredictor::new(model),
            store,
            config,
        })
    }

    /// Planner over a loaded catalog, building the grid layout from its
    /// resource coordinates
    pub fn from_catalog(catalog: Catalog, model: PolicyModel, config: PlannerConfig) -> Result<Self> {
        let layout = GridLayout::from_coordinates(catalog.coordinates, config.coordinate_scale);
        Self::new(catalog.graph, catalog.paths, layout, model, config)
    }

    /// Planner over the built-in course
    ///
    /// Loads the policy artifact when a path is given, falling back loudly
    /// to untrained weights when it is absent or unreadable.
    pub fn with_default_course(model_path: Option<&Path>, seed: u64) -> Result<Self> {
        let config = PlannerConfig::default();
        let model = match model_path {
            Some(path) => PolicyModel::load_or_untrained(path, &config, seed),
            None => PolicyModel::untrained(&config, seed),
        };
        Self::new(
            default_graph(),
            default_paths(),
            GridLayout::empty(),
            model,
            config,
        )
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn total_resources(&self) -> usize {
        self.graph.len()
    }

    // === QUERIES ===

    pub fn prerequisites_of(&self, resource: &str) -> &[String] {
        self.graph.prerequisites_of(resource)
    }

    /// Whether a user has unlocked a resource
    ///
    /// Unknown users have completed nothing, so only zero-prerequisite
    /// resources are unlocked for them.
    pub fn is_unlocked(&self, user_id: &str, resource: &str) -> bool {
        let completed = self
            .store
            .get(user_id)
            .map(|record| record.completed_set())
            .unwrap_or_default();
        self.graph.is_unlocked(resource, &completed)
    }

    /// Everything the user could take next, lexicographically sorted
    pub fn available_resources(&self, user_id: &str) -> Vec<String> {
        let completed = self
            .store
            .get(user_id)
            .map(|record| record.completed_set())
            .unwrap_or_default();
        self.graph.available_resources(&completed)
    }

    /// Up to `max_count` suggested next resources for a user
    pub fn suggest_next(&self, user_id: &str, max_count: usize) -> Vec<String> {
        let completed = self
            .store
            .get(user_id)
            .map(|record| record.completed_set())
            .unwrap_or_default();
        self.graph.suggest_next(&completed, max_count)
    }

    /// The canned curriculum for a goal (complete-course fallback)
    pub fn curriculum(&self, goal: &str) -> &[String] {
        self.paths.get(goal)
    }

    /// Raw policy rollout between two cells
    pub fn predict(&self, start: GridPos, goal: GridPos, max_steps: usize) -> Trajectory {
        self.predictor.predict_path(start, goal, max_steps)
    }

    /// Policy confidence for a grid position
    pub fn confidence_at(&self, position: GridPos) -> f32 {
        self.predictor.model().confidence(position)
    }

    /// Progress statistics projection; `None` for unknown users
    pub fn progress(&self, user_id: &str) -> Option<ProgressStats> {
        self.store.progress_stats(user_id, self.graph.len())
    }

    // === COMMANDS ===

    /// Record a completed resource, optionally moving the user's grid
    /// position and logging into an open session
    pub fn record_completion(
        &self,
        user_id: &str,
        resource: &str,
        position: Option<GridPos>,
        session: Option<&str>,
    ) -> UserProgressRecord {
        let record = self.store.complete_resource(user_id, resource, position);
        if let Some(session_id) = session {
            self.store.log_resource_completion(session_id, resource);
        }
        record
    }

    /// Plan a route toward a named goal
    ///
    /// Resolves the goal to its canned curriculum (falling back to the
    /// complete course), rolls the policy out from the user's current
    /// position toward the goal's grid cell, and replaces the user's
    /// active path with the uncompleted remainder of the curriculum.
    pub fn plan_to_goal(
        &self,
        user_id: &str,
        goal: &str,
        max_steps: Option<usize>,
        session: Option<&str>,
    ) -> PlannedRoute {
        let record = self.store.get_or_create(user_id);
        let resolved_goal = if self.paths.contains(goal) {
            goal
        } else {
            DEFAULT_GOAL
        };

        let full_curriculum = self.paths.get(resolved_goal);
        let curriculum: Vec<String> = full_curriculum
            .iter()
            .filter(|resource| !record.has_completed(resource.as_str()))
            .cloned()
            .collect();

        let goal_cell = self.goal_cell(full_curriculum);
        let max_steps = max_steps.unwrap_or(self.config.default_max_steps);
        let trajectory = self
            .predictor
            .predict_path(record.current_position, goal_cell, max_steps);
        let confidence = self.predictor.model().confidence(record.current_position);

        self.store
            .set_path(user_id, curriculum.clone(), Some(resolved_goal));
        if let Some(session_id) = session {
            self.store.log_path_generation(
                session_id,
                resolved_goal,
                trajectory.steps.len(),
                trajectory.reached_goal,
            );
        }

        tracing::debug!(
            user_id,
            goal = resolved_goal,
            steps = trajectory.steps.len(),
            reached = trajectory.reached_goal,
            "planned route"
        );

        PlannedRoute {
            goal: resolved_goal.to_string(),
            curriculum,
            trajectory,
            confidence,
        }
    }

    /// Grid cell of a curriculum's final resource
    ///
    /// Falls back to the top-right corner of the policy grid when the
    /// coordinate source never saw that resource.
    fn goal_cell(&self, curriculum: &[String]) -> GridPos {
        let corner = GridPos::new(
            self.config.grid_size as i32 - 1,
            self.config.grid_size as i32 - 1,
        );
        curriculum
            .last()
            .and_then(|resource| self.layout.cell_of(resource))
            .map(|cell| cell.clamped(self.config.grid_size))
            .unwrap_or(corner)
    }

    /// Replace a user's active path directly
    pub fn set_path(
        &self,
        user_id: &str,
        path: Vec<String>,
        goal: Option<&str>,
    ) -> UserProgressRecord {
        self.store.set_path(user_id, path, goal)
    }

    /// Clear a user's progress (identity survives)
    pub fn reset(&self, user_id: &str) -> Option<UserProgressRecord> {
        self.store.reset(user_id)
    }

    // === SESSIONS ===

    pub fn start_session(&self, user_id: &str) -> String {
        self.store.start_session(user_id)
    }

    pub fn end_session(&self, session_id: &str) -> Option<Session> {
        self.store.end_session(session_id)
    }

    pub fn log_action(&self, session_id: &str, action: &str, details: serde_json::Value) {
        self.store.log_action(session_id, action, details);
    }

    pub fn log_path_generation(
        &self,
        session_id: &str,
        goal: &str,
        steps: usize,
        reached_goal: bool,
    ) {
        self.store
            .log_path_generation(session_id, goal, steps, reached_goal);
    }

    // === SNAPSHOTS ===

    pub fn export_json(&self) -> Result<String> {
        self.store.export_json()
    }

    pub fn import_json(&self, json: &str) -> Result<()> {
        self.store.import_json(json)
    }
}
