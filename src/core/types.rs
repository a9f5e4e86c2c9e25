//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Unix timestamp in whole seconds
pub type UnixSeconds = u64;

/// Current wall-clock time in whole seconds since the epoch
pub fn now_secs() -> UnixSeconds {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Discrete cell position on the learning grid
///
/// Origin is the bottom-left cell; y grows upward, x grows rightward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into [0, grid_size - 1]
    pub fn clamped(self, grid_size: usize) -> Self {
        let max = grid_size as i32 - 1;
        Self {
            x: self.x.clamp(0, max),
            y: self.y.clamp(0, max),
        }
    }

    /// Apply a movement action, clamped to the grid boundary
    ///
    /// An action already at its boundary leaves the position unchanged;
    /// the caller still counts it as a consumed step.
    pub fn apply(self, action: Action, grid_size: usize) -> Self {
        let max = grid_size as i32 - 1;
        match action {
            Action::Up => Self {
                x: self.x,
                y: (self.y + 1).min(max),
            },
            Action::Right => Self {
                x: (self.x + 1).min(max),
                y: self.y,
            },
        }
    }
}

/// The two movement actions the learned policy can emit
///
/// The policy is progression-only: both actions are monotone, so a
/// trajectory can never reach a cell below or left of its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    Up = 0,
    Right = 1,
}

impl Action {
    /// Output index of this action in the policy's score vector
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Action::Up),
            1 => Some(Action::Right),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Up => "UP",
            Action::Right => "RIGHT",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
