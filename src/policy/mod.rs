//! Learned grid-walking policy and rollout
//!
//! The model scores the two movement actions for a grid position; the
//! predictor drives it from a start toward a goal under a step budget.

pub mod model;
pub mod predictor;

pub use model::{ActionChoice, PolicyModel, PolicyWeights};
pub use predictor::{PathPredictor, PathStep, Trajectory};
