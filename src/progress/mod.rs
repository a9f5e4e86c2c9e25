//! Mutable learner state: progress records, achievements, sessions
//!
//! The store is the only writer; everything else in the crate is a pure
//! function of catalog, policy, and a progress snapshot.

pub mod achievements;
pub mod record;
pub mod session;
pub mod store;

pub use achievements::{newly_earned, AchievementDef, ACHIEVEMENTS};
pub use record::{ProgressStats, UserProgressRecord};
pub use session::{ActionLogEntry, PathLogEntry, Session};
pub use store::{ProgressStore, Snapshot};
