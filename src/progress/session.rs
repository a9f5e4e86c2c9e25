//! Time-boxed learning sessions and their event logs
//!
//! A session is an ephemeral record bound to one user and one time window.
//! Ending it folds the elapsed duration into the owning user's cumulative
//! time. Logging against a closed or unknown session is best-effort: a
//! silent no-op, never an error.

use crate::core::types::{now_secs, UnixSeconds};
use crate::progress::store::ProgressStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated-path event inside a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathLogEntry {
    pub at: UnixSeconds,
    pub goal: String,
    pub steps: usize,
    pub reached_goal: bool,
}

/// One generic action event inside a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub at: UnixSeconds,
    pub action: String,
    pub details: serde_json::Value,
}

/// A bounded interval of user activity with logged events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    /// Back-reference to the owning user, not ownership
    pub user_id: String,
    pub started_at: UnixSeconds,
    pub ended_at: Option<UnixSeconds>,
    pub resources_completed: Vec<String>,
    pub paths_generated: Vec<PathLogEntry>,
    pub actions_taken: Vec<ActionLogEntry>,
}

impl Session {
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

impl ProgressStore {
    /// Open a session for a user, returning its id
    ///
    /// The id embeds the user, start time, and a random component, so
    /// rapid repeated starts by the same user never collide. Bumps the
    /// user's session count (creating the record if needed).
    pub fn start_session(&self, user_id: &str) -> String {
        self.start_session_at(user_id, now_secs())
    }

    /// `start_session` with an explicit clock value
    pub fn start_session_at(&self, user_id: &str, now: UnixSeconds) -> String {
        let mut inner = self.lock();
        Self::ensure(&mut inner, user_id).session_count += 1;

        let session_id = format!("{user_id}_{now}_{}", Uuid::new_v4().simple());
        inner.sessions.insert(
            session_id.clone(),
            Session {
                session_id: session_id.clone(),
                user_id: user_id.to_string(),
                started_at: now,
                ended_at: None,
                resources_completed: Vec::new(),
                paths_generated: Vec::new(),
                actions_taken: Vec::new(),
            },
        );

        tracing::debug!(user_id, session_id, "session started");
        session_id
    }

    /// Close a session, folding its duration into the owning user
    ///
    /// Terminal: closing an already-ended or unknown session is a no-op
    /// returning `None`.
    pub fn end_session(&self, session_id: &str) -> Option<Session> {
        self.end_session_at(session_id, now_secs())
    }

    /// `end_session` with an explicit clock value
    pub fn end_session_at(&self, session_id: &str, now: UnixSeconds) -> Option<Session> {
        let mut inner = self.lock();
        let session = inner.sessions.get_mut(session_id)?;
        if session.ended_at.is_some() {
            return None;
        }

        session.ended_at = Some(now);
        let duration = now.saturating_sub(session.started_at);
        let user_id = session.user_id.clone();
        let snapshot = session.clone();

        if let Some(user) = inner.users.get_mut(&user_id) {
            user.total_time_spent += duration;
            user.last_updated = now;
        }

        tracing::debug!(user_id, session_id, duration, "session ended");
        Some(snapshot)
    }

    pub fn get_session(&self, session_id: &str) -> Option<Session> {
        self.lock().sessions.get(session_id).cloned()
    }

    /// Record a generated path against an open session
    pub fn log_path_generation(
        &self,
        session_id: &str,
        goal: &str,
        steps: usize,
        reached_goal: bool,
    ) {
        let mut inner = self.lock();
        if let Some(session) = inner.sessions.get_mut(session_id).filter(|s| s.is_open()) {
            session.paths_generated.push(PathLogEntry {
                at: now_secs(),
                goal: goal.to_string(),
                steps,
                reached_goal,
            });
        }
    }

    /// Record a generic action against an open session
    pub fn log_action(&self, session_id: &str, action: &str, details: serde_json::Value) {
        let mut inner = self.lock();
        if let Some(session) = inner.sessions.get_mut(session_id).filter(|s| s.is_open()) {
            session.actions_taken.push(ActionLogEntry {
                at: now_secs(),
                action: action.to_string(),
                details,
            });
        }
    }

    /// Record a resource completion against an open session
    pub fn log_resource_completion(&self, session_id: &str, resource: &str) {
        let mut inner = self.lock();
        if let Some(session) = inner.sessions.get_mut(session_id).filter(|s| s.is_open()) {
            session.resources_completed.push(resource.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ProgressStore {
        ProgressStore::new(10)
    }

    #[test]
    fn test_session_folds_duration_into_user() {
        let store = store();
        let id = store.start_session_at("u1", 1_000);
        let session = store.end_session_at(&id, 1_010).unwrap();

        assert_eq!(session.ended_at, Some(1_010));
        assert_eq!(store.get("u1").unwrap().total_time_spent, 10);
    }

    #[test]
    fn test_end_is_terminal() {
        let store = store();
        let id = store.start_session_at("u1", 1_000);
        assert!(store.end_session_at(&id, 1_010).is_some());
        assert!(store.end_session_at(&id, 1_020).is_none());
        // Duration counted exactly once
        assert_eq!(store.get("u1").unwrap().total_time_spent, 10);
    }

    #[test]
    fn test_end_unknown_session_is_noop() {
        assert!(store().end_session("missing").is_none());
    }

    #[test]
    fn test_start_increments_session_count() {
        let store = store();
        store.start_session("u1");
        store.start_session("u1");
        assert_eq!(store.get("u1").unwrap().session_count, 2);
    }

    #[test]
    fn test_same_second_session_ids_are_unique() {
        let store = store();
        let a = store.start_session_at("u1", 1_000);
        let b = store.start_session_at("u1", 1_000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_logs_append_to_open_session() {
        let store = store();
        let id = store.start_session("u1");
        store.log_path_generation(&id, "graph_theory", 12, false);
        store.log_action(&id, "hint_requested", serde_json::json!({"resource": "Matching"}));
        store.log_resource_completion(&id, "Sets");

        let session = store.get_session(&id).unwrap();
        assert_eq!(session.paths_generated.len(), 1);
        assert_eq!(session.actions_taken.len(), 1);
        assert_eq!(session.resources_completed, vec!["Sets".to_string()]);
    }

    #[test]
    fn test_logs_against_unknown_or_ended_session_are_noops() {
        let store = store();
        store.log_action("missing", "noop", serde_json::Value::Null);

        let id = store.start_session_at("u1", 1_000);
        store.end_session_at(&id, 1_005);
        store.log_path_generation(&id, "set_theory", 3, true);
        assert!(store.get_session(&id).unwrap().paths_generated.is_empty());
    }
}
