//! In-memory progress store - the single owner of mutable user state
//!
//! Explicitly constructed and passed to its callers; there is no global
//! instance. One mutex guards the user and session maps, serializing
//! per-user read-modify-write so concurrent completions cannot
//! double-award score or drop an achievement. All state is process-local
//! and lost on restart.

use crate::core::error::{PlanError, Result};
use crate::core::types::{now_secs, GridPos, UnixSeconds};
use crate::progress::achievements::newly_earned;
use crate::progress::record::{ProgressStats, UserProgressRecord};
use crate::progress::session::Session;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// Full dump of users and sessions, for backup and transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: AHashMap<String, UserProgressRecord>,
    pub sessions: AHashMap<String, Session>,
    pub exported_at: UnixSeconds,
}

#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub(crate) users: AHashMap<String, UserProgressRecord>,
    pub(crate) sessions: AHashMap<String, Session>,
}

/// Mutable per-user progress and session state
#[derive(Debug)]
pub struct ProgressStore {
    completion_reward: u32,
    inner: Mutex<StoreInner>,
}

impl ProgressStore {
    pub fn new(completion_reward: u32) -> Self {
        Self {
            completion_reward,
            inner: Mutex::new(StoreInner::default()),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // A poisoned lock still holds consistent data: every mutation
        // below completes before unlocking.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn ensure<'a>(
        inner: &'a mut StoreInner,
        user_id: &str,
    ) -> &'a mut UserProgressRecord {
        inner
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| UserProgressRecord::new(user_id, now_secs()))
    }

    /// Fetch a user's record, creating a fresh one on first reference
    pub fn get_or_create(&self, user_id: &str) -> UserProgressRecord {
        let mut inner = self.lock();
        Self::ensure(&mut inner, user_id).clone()
    }

    pub fn get(&self, user_id: &str) -> Option<UserProgressRecord> {
        self.lock().users.get(user_id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    /// All user records, for admin and debugging
    pub fn all_users(&self) -> Vec<UserProgressRecord> {
        self.lock().users.values().cloned().collect()
    }

    /// Mark a resource completed for a user
    ///
    /// First completion appends to the completed list, awards the fixed
    /// reward, re-evaluates achievements, and optionally moves the user's
    /// grid position. A repeat completion is a no-op, not an error; the
    /// (unchanged) record is returned either way.
    pub fn complete_resource(
        &self,
        user_id: &str,
        resource: &str,
        position: Option<GridPos>,
    ) -> UserProgressRecord {
        let mut inner = self.lock();
        let reward = self.completion_reward;
        let record = Self::ensure(&mut inner, user_id);

        if !record.has_completed(resource) {
            record.completed_resources.push(resource.to_string());
            record.score += reward;

            if let Some(position) = position {
                record.current_position = position;
            }

            let earned = newly_earned(record.completed_resources.len(), &record.achievements);
            record
                .achievements
                .extend(earned.iter().map(|name| name.to_string()));

            record.last_updated = now_secs();
        }

        record.clone()
    }

    /// Replace a user's active path, and its goal when given
    ///
    /// Both fields change under one lock acquisition, so readers never see
    /// a path paired with a stale goal.
    pub fn set_path(
        &self,
        user_id: &str,
        path: Vec<String>,
        goal: Option<&str>,
    ) -> UserProgressRecord {
        let mut inner = self.lock();
        let record = Self::ensure(&mut inner, user_id);

        record.current_path = path;
        if let Some(goal) = goal {
            record.current_goal = goal.to_string();
        }
        record.last_updated = now_secs();

        record.clone()
    }

    /// Derived statistics view; `None` for unknown users
    pub fn progress_stats(&self, user_id: &str, total_resources: usize) -> Option<ProgressStats> {
        self.lock()
            .users
            .get(user_id)
            .map(|record| ProgressStats::from_record(record, total_resources))
    }

    /// Clear a user's progress, keeping identity and creation timestamp
    ///
    /// Session count and accumulated time survive a reset; idempotent and
    /// safe on an already-fresh user. Unknown users are left uncreated.
    pub fn reset(&self, user_id: &str) -> Option<UserProgressRecord> {
        let mut inner = self.lock();
        let record = inner.users.get_mut(user_id)?;

        record.completed_resources.clear();
        record.current_path.clear();
        record.current_position = GridPos::default();
        record.score = 0;
        record.achievements.clear();
        record.last_updated = now_secs();

        Some(record.clone())
    }

    /// Full snapshot of all users and sessions
    pub fn export_data(&self) -> Snapshot {
        let inner = self.lock();
        Snapshot {
            users: inner.users.clone(),
            sessions: inner.sessions.clone(),
            exported_at: now_secs(),
        }
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.export_data())?)
    }

    /// Deep-merge a snapshot: existing ids are overwritten, new ids added
    pub fn merge_snapshot(&self, snapshot: Snapshot) {
        let mut inner = self.lock();
        inner.users.extend(snapshot.users);
        inner.sessions.extend(snapshot.sessions);
    }

    /// Import a JSON snapshot
    ///
    /// The input is parsed in full before any merge, so malformed data is
    /// reported without partial mutation.
    pub fn import_json(&self, json: &str) -> Result<()> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| PlanError::Import(format!("malformed snapshot: {e}")))?;
        self.merge_snapshot(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ProgressStore {
        ProgressStore::new(10)
    }

    #[test]
    fn test_first_completion_awards_score_and_achievement() {
        let store = store();
        let record = store.complete_resource("u1", "Sets", None);
        assert_eq!(record.score, 10);
        assert_eq!(record.achievements, vec!["First Steps".to_string()]);
        assert_eq!(record.completed_resources, vec!["Sets".to_string()]);
    }

    #[test]
    fn test_repeat_completion_is_noop() {
        let store = store();
        store.complete_resource("u1", "Sets", None);
        let record = store.complete_resource("u1", "Sets", None);
        assert_eq!(record.score, 10);
        assert_eq!(record.completed_resources.len(), 1);
        assert_eq!(record.achievements.len(), 1);
    }

    #[test]
    fn test_five_completions_award_getting_started() {
        let store = store();
        for name in ["a", "b", "c", "d", "e"] {
            store.complete_resource("u1", name, None);
        }
        let record = store.get("u1").unwrap();
        assert_eq!(record.score, 50);
        assert_eq!(
            record.achievements,
            vec!["First Steps".to_string(), "Getting Started".to_string()]
        );
    }

    #[test]
    fn test_completion_moves_position_when_given() {
        let store = store();
        let record = store.complete_resource("u1", "Sets", Some(GridPos::new(3, 4)));
        assert_eq!(record.current_position, GridPos::new(3, 4));

        let record = store.complete_resource("u1", "Relations", None);
        assert_eq!(record.current_position, GridPos::new(3, 4));
    }

    #[test]
    fn test_set_path_replaces_both_fields() {
        let store = store();
        store.set_path("u1", vec!["a".into(), "b".into()], Some("basic_logic"));
        let record = store.get("u1").unwrap();
        assert_eq!(record.current_path, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(record.current_goal, "basic_logic");

        // Omitted goal keeps the previous one
        store.set_path("u1", vec!["c".into()], None);
        let record = store.get("u1").unwrap();
        assert_eq!(record.current_goal, "basic_logic");
    }

    #[test]
    fn test_stats_unknown_user_is_none() {
        assert!(store().progress_stats("ghost", 70).is_none());
    }

    #[test]
    fn test_stats_percentage() {
        let store = store();
        store.complete_resource("u1", "a", None);
        store.complete_resource("u1", "b", None);
        store.complete_resource("u1", "c", None);
        let stats = store.progress_stats("u1", 70).unwrap();
        assert_eq!(stats.completed_count, 3);
        // 3/70 x 100 = 4.2857... -> 4.29
        assert_eq!(stats.progress_percentage, 4.29);
    }

    #[test]
    fn test_reset_clears_progress_keeps_identity() {
        let store = store();
        store.complete_resource("u1", "Sets", Some(GridPos::new(2, 2)));
        let created_at = store.get("u1").unwrap().created_at;

        let record = store.reset("u1").unwrap();
        assert!(record.completed_resources.is_empty());
        assert_eq!(record.score, 0);
        assert!(record.achievements.is_empty());
        assert_eq!(record.current_position, GridPos::new(0, 0));
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.created_at, created_at);

        // Idempotent on an already-fresh user
        assert!(store.reset("u1").is_some());
        // Unknown users are not created
        assert!(store.reset("ghost").is_none());
    }

    #[test]
    fn test_export_import_round_trip() {
        let source = store();
        source.complete_resource("u1", "Sets", None);
        let json = source.export_json().unwrap();

        let target = store();
        target.complete_resource("u2", "Logic", None);
        target.import_json(&json).unwrap();

        assert_eq!(target.user_count(), 2);
        assert_eq!(target.get("u1").unwrap().score, 10);
    }

    #[test]
    fn test_import_overwrites_existing_ids() {
        let source = store();
        for name in ["a", "b", "c"] {
            source.complete_resource("u1", name, None);
        }
        let json = source.export_json().unwrap();

        let target = store();
        target.complete_resource("u1", "z", None);
        target.import_json(&json).unwrap();
        assert_eq!(target.get("u1").unwrap().score, 30);
    }

    #[test]
    fn test_import_malformed_reports_error_without_mutation() {
        let store = store();
        store.complete_resource("u1", "Sets", None);

        let result = store.import_json("{ not a snapshot");
        assert!(matches!(result, Err(PlanError::Import(_))));
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.get("u1").unwrap().score, 10);
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let store = store();
        let a = store.get_or_create("u1");
        let b = store.get_or_create("u1");
        assert_eq!(a.created_at, b.created_at);
        assert_eq!(store.user_count(), 1);
    }
}
