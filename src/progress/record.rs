//! Per-user progress record and derived statistics view

use crate::catalog::paths::DEFAULT_GOAL;
use crate::core::types::{GridPos, UnixSeconds};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mutable progress state for one learner
///
/// Owned exclusively by the progress store; mutated only through store
/// operations. Score, achievements, and time spent are monotone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgressRecord {
    pub user_id: String,
    /// Completed resources in completion order
    pub completed_resources: Vec<String>,
    /// Active curriculum, replaced atomically with its goal
    pub current_path: Vec<String>,
    pub current_goal: String,
    pub current_position: GridPos,
    pub score: u32,
    pub achievements: Vec<String>,
    pub session_count: u32,
    /// Cumulative seconds folded in from ended sessions
    pub total_time_spent: u64,
    pub created_at: UnixSeconds,
    pub last_updated: UnixSeconds,
}

impl UserProgressRecord {
    pub fn new(user_id: impl Into<String>, now: UnixSeconds) -> Self {
        Self {
            user_id: user_id.into(),
            completed_resources: Vec::new(),
            current_path: Vec::new(),
            current_goal: DEFAULT_GOAL.to_string(),
            current_position: GridPos::default(),
            score: 0,
            achievements: Vec::new(),
            session_count: 0,
            total_time_spent: 0,
            created_at: now,
            last_updated: now,
        }
    }

    pub fn has_completed(&self, resource: &str) -> bool {
        self.completed_resources.iter().any(|r| r == resource)
    }

    /// Completed resources as a set for unlock checks
    pub fn completed_set(&self) -> HashSet<String> {
        self.completed_resources.iter().cloned().collect()
    }
}

/// Read-only statistics projection of a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressStats {
    pub user_id: String,
    pub completed_resources: Vec<String>,
    pub total_resources: usize,
    pub completed_count: usize,
    /// completed / total x 100, rounded to 2 decimals
    pub progress_percentage: f64,
    pub current_position: GridPos,
    pub score: u32,
    pub current_path: Vec<String>,
    pub current_goal: String,
    pub achievements: Vec<String>,
    pub session_count: u32,
    pub total_time_spent: u64,
    pub last_updated: UnixSeconds,
}

impl ProgressStats {
    pub fn from_record(record: &UserProgressRecord, total_resources: usize) -> Self {
        let completed_count = record.completed_resources.len();
        let progress_percentage = if total_resources > 0 {
            let pct = completed_count as f64 / total_resources as f64 * 100.0;
            (pct * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            user_id: record.user_id.clone(),
            completed_resources: record.completed_resources.clone(),
            total_resources,
            completed_count,
            progress_percentage,
            current_position: record.current_position,
            score: record.score,
            current_path: record.current_path.clone(),
            current_goal: record.current_goal.clone(),
            achievements: record.achievements.clone(),
            session_count: record.session_count,
            total_time_spent: record.total_time_spent,
            last_updated: record.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_defaults() {
        let record = UserProgressRecord::new("u1", 1000);
        assert_eq!(record.score, 0);
        assert_eq!(record.current_goal, DEFAULT_GOAL);
        assert_eq!(record.current_position, GridPos::new(0, 0));
        assert_eq!(record.created_at, 1000);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        let mut record = UserProgressRecord::new("u1", 0);
        record.completed_resources = vec!["a".into()];
        let stats = ProgressStats::from_record(&record, 3);
        // 1/3 x 100 = 33.333... -> 33.33
        assert_eq!(stats.progress_percentage, 33.33);
    }

    #[test]
    fn test_percentage_with_zero_total() {
        let record = UserProgressRecord::new("u1", 0);
        let stats = ProgressStats::from_record(&record, 0);
        assert_eq!(stats.progress_percentage, 0.0);
    }
}
