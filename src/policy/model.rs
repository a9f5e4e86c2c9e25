//! Learned two-action movement policy
//!
//! A fixed linear-ReLU-linear scorer (grid_size² -> hidden -> 2) over
//! one-hot grid states. Weights come from a trained artifact; when the
//! artifact is missing or corrupt the model still functions on random
//! weights, a degraded mode that is logged loudly and exposed through
//! `is_trained`.

use crate::core::config::PlannerConfig;
use crate::core::error::{PlanError, Result};
use crate::core::types::{Action, GridPos};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Spread of the untrained-fallback weight initialization
const UNTRAINED_WEIGHT_SPREAD: f32 = 0.1;

/// Outcome of a single action selection
///
/// The degraded arm substitutes a uniformly random action when score
/// evaluation fails, so callers and tests can always distinguish a
/// confident prediction from the fallback.
#[derive(Debug, Clone)]
pub enum ActionChoice {
    /// Arg-max over the two action scores
    Confident { action: Action, scores: [f32; 2] },
    /// Evaluation failed; a random action was substituted
    Degraded { action: Action, reason: String },
}

impl ActionChoice {
    pub fn action(&self) -> Action {
        match self {
            ActionChoice::Confident { action, .. } => *action,
            ActionChoice::Degraded { action, .. } => *action,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ActionChoice::Degraded { .. })
    }
}

/// On-disk weights artifact (JSON, matrices row-major)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyWeights {
    pub grid_size: usize,
    pub hidden: usize,
    /// First layer, hidden x grid_size² row-major
    pub w1: Vec<f32>,
    pub b1: Vec<f32>,
    /// Output layer, 2 x hidden row-major
    pub w2: Vec<f32>,
    pub b2: Vec<f32>,
}

impl PolicyWeights {
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Stateless two-action scorer over grid positions
///
/// Read-only after construction; safe for unsynchronized concurrent
/// evaluation.
#[derive(Debug, Clone)]
pub struct PolicyModel {
    grid_size: usize,
    hidden: usize,
    state_size: usize,
    w1: Vec<f32>,
    b1: Vec<f32>,
    w2: Vec<f32>,
    b2: Vec<f32>,
    trained: bool,
}

impl PolicyModel {
    /// Build a model from explicit weights, validating every dimension
    pub fn from_weights(weights: PolicyWeights) -> Result<Self> {
        Self::build(weights, true)
    }

    /// Load a trained artifact
    pub fn load(path: &Path, config: &PlannerConfig) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let weights: PolicyWeights = serde_json::from_str(&json)?;

        if weights.grid_size != config.grid_size {
            return Err(PlanError::ModelLoad(format!(
                "artifact grid_size {} does not match configured {}",
                weights.grid_size, config.grid_size
            )));
        }

        let model = Self::build(weights, true)?;
        tracing::info!(path = %path.display(), "loaded trained policy");
        Ok(model)
    }

    /// A model with small seeded random weights
    ///
    /// This is the explicit degraded mode for a missing artifact: every
    /// query still answers, but `is_trained` reports false.
    pub fn untrained(config: &PlannerConfig, seed: u64) -> Self {
        let state_size = config.state_size();
        let hidden = config.hidden_size;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut sample =
            |n: usize| -> Vec<f32> {
                (0..n)
                    .map(|_| rng.gen_range(-UNTRAINED_WEIGHT_SPREAD..UNTRAINED_WEIGHT_SPREAD))
                    .collect()
            };

        let weights = PolicyWeights {
            grid_size: config.grid_size,
            hidden,
            w1: sample(hidden * state_size),
            b1: sample(hidden),
            w2: sample(2 * hidden),
            b2: sample(2),
        };

        // Dimensions are correct by construction
        Self::build(weights, false).expect("untrained weights are well-formed")
    }

    /// Load the artifact, falling back to untrained weights on any failure
    pub fn load_or_untrained(path: &Path, config: &PlannerConfig, seed: u64) -> Self {
        match Self::load(path, config) {
            Ok(model) => model,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "policy artifact unavailable, using untrained weights"
                );
                Self::untrained(config, seed)
            }
        }
    }

    fn build(weights: PolicyWeights, trained: bool) -> Result<Self> {
        let PolicyWeights {
            grid_size,
            hidden,
            w1,
            b1,
            w2,
            b2,
        } = weights;
        let state_size = grid_size * grid_size;

        if grid_size == 0 || hidden == 0 {
            return Err(PlanError::ModelLoad("zero-sized layer".into()));
        }
        if w1.len() != hidden * state_size {
            return Err(PlanError::ModelLoad(format!(
                "w1 has {} weights, expected {}",
                w1.len(),
                hidden * state_size
            )));
        }
        if b1.len() != hidden {
            return Err(PlanError::ModelLoad(format!(
                "b1 has {} weights, expected {}",
                b1.len(),
                hidden
            )));
        }
        if w2.len() != 2 * hidden {
            return Err(PlanError::ModelLoad(format!(
                "w2 has {} weights, expected {}",
                w2.len(),
                2 * hidden
            )));
        }
        if b2.len() != 2 {
            return Err(PlanError::ModelLoad(format!(
                "b2 has {} weights, expected 2",
                b2.len()
            )));
        }

        Ok(Self {
            grid_size,
            hidden,
            state_size,
            w1,
            b1,
            w2,
            b2,
            trained,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// False when running on untrained fallback weights
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// One-hot state encoding of a position
    ///
    /// Out-of-range coordinates are clamped into the grid first; index is
    /// y * grid_size + x (row-major, origin bottom-left).
    pub fn encode(&self, position: GridPos) -> Vec<f32> {
        let p = position.clamped(self.grid_size);
        let mut state = vec![0.0; self.state_size];
        state[p.y as usize * self.grid_size + p.x as usize] = 1.0;
        state
    }

    /// Raw action scores, or the failure reason when evaluation produced
    /// a non-finite value
    fn scores(&self, position: GridPos) -> std::result::Result<[f32; 2], String> {
        let state = self.encode(position);

        let mut h = vec![0.0f32; self.hidden];
        for (j, h_j) in h.iter_mut().enumerate() {
            let row = &self.w1[j * self.state_size..(j + 1) * self.state_size];
            let sum: f32 = row.iter().zip(&state).map(|(w, x)| w * x).sum();
            *h_j = (sum + self.b1[j]).max(0.0);
        }

        let mut q = [0.0f32; 2];
        for (a, q_a) in q.iter_mut().enumerate() {
            let row = &self.w2[a * self.hidden..(a + 1) * self.hidden];
            let sum: f32 = row.iter().zip(&h).map(|(w, x)| w * x).sum();
            *q_a = sum + self.b2[a];
        }

        if q.iter().all(|v| v.is_finite()) {
            Ok(q)
        } else {
            Err(format!("non-finite action scores at {position:?}"))
        }
    }

    /// Select the arg-max action for a position
    ///
    /// Ties break toward `Up` (the lower action index). Failures fall back
    /// to a uniformly random action, logged as a warning and tagged
    /// `Degraded` so the substitution is never silent.
    pub fn select_action(&self, position: GridPos) -> ActionChoice {
        match self.scores(position) {
            Ok(scores) => {
                let action = if scores[Action::Right.index()] > scores[Action::Up.index()] {
                    Action::Right
                } else {
                    Action::Up
                };
                ActionChoice::Confident { action, scores }
            }
            Err(reason) => {
                let action = if rand::thread_rng().gen_bool(0.5) {
                    Action::Up
                } else {
                    Action::Right
                };
                tracing::warn!(%reason, fallback = %action, "policy evaluation failed");
                ActionChoice::Degraded { action, reason }
            }
        }
    }

    /// Confidence in [0, 1] for a position
    ///
    /// Logistic squash of the maximum action score; neutral 0.5 when
    /// evaluation fails.
    pub fn confidence(&self, position: GridPos) -> f32 {
        match self.scores(position) {
            Ok(scores) => {
                let max = scores[0].max(scores[1]);
                1.0 / (1.0 + (-max).exp())
            }
            Err(reason) => {
                tracing::warn!(%reason, "policy evaluation failed, neutral confidence");
                0.5
            }
        }
    }
}
