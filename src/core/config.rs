//! Planner configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the planning subsystems
///
/// These values mirror the trained policy artifact's dimensions; changing
/// `grid_size` or `hidden_size` requires a matching artifact.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    // === GRID / POLICY ===
    /// Side length of the square learning grid
    ///
    /// The policy's state encoding is a one-hot vector of length
    /// grid_size², so this must match the weights artifact.
    pub grid_size: usize,

    /// Width of the policy's hidden layer
    ///
    /// Fixed by the trained artifact (grid_size² -> hidden -> 2).
    pub hidden_size: usize,

    /// Upper bound on rollout length when the caller does not supply one
    ///
    /// A rollout that has not reached its goal after this many steps stops
    /// anyway; callers compare the final position against the goal.
    pub default_max_steps: usize,

    // === PROGRESS ===
    /// Score awarded for the first completion of a resource
    ///
    /// Repeat completions award nothing, keeping score idempotent.
    pub completion_reward: u32,

    /// How many next-resource suggestions to return by default
    pub default_suggestions: usize,

    // === SPATIAL ===
    /// Multiplier applied to continuous resource coordinates before
    /// flooring them into grid cells
    ///
    /// At 100.0, source coordinates in roughly [0, 0.1) land in distinct
    /// cells; the layout is translated so the minimum cell is (0, 0).
    pub coordinate_scale: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            hidden_size: 128,
            default_max_steps: 50,
            completion_reward: 10,
            default_suggestions: 3,
            coordinate_scale: 100.0,
        }
    }
}

impl PlannerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// State vector length for the policy (grid_size²)
    pub fn state_size(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("grid_size must be at least 1".into());
        }

        if self.hidden_size == 0 {
            return Err("hidden_size must be at least 1".into());
        }

        if self.default_max_steps == 0 {
            return Err("default_max_steps must be at least 1".into());
        }

        if self.coordinate_scale <= 0.0 {
            return Err(format!(
                "coordinate_scale ({}) must be positive",
                self.coordinate_scale
            ));
        }

        Ok(())
    }
}
