//! Static achievement catalog and threshold evaluation
//!
//! Achievements are a deterministic function of completed-resource count.
//! Awards are idempotent and monotone: re-evaluation after no new
//! completions changes nothing, and an award is never removed.

/// A milestone unlocked at a completed-resource count
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub name: &'static str,
    pub threshold: usize,
    pub description: &'static str,
}

/// Global achievement catalog, ordered by threshold
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        name: "First Steps",
        threshold: 1,
        description: "Complete your first resource",
    },
    AchievementDef {
        name: "Getting Started",
        threshold: 5,
        description: "Complete 5 resources",
    },
    AchievementDef {
        name: "Making Progress",
        threshold: 10,
        description: "Complete 10 resources",
    },
    AchievementDef {
        name: "Dedicated Learner",
        threshold: 20,
        description: "Complete 20 resources",
    },
    AchievementDef {
        name: "Expert",
        threshold: 50,
        description: "Complete 50 resources",
    },
    AchievementDef {
        name: "Master",
        threshold: 70,
        description: "Complete all resources",
    },
];

/// Achievements newly crossed at `completed_count` that are not yet held
///
/// A single evaluation awards every crossed threshold, so a bulk import
/// that jumps the count still awards the intermediate milestones.
pub fn newly_earned(completed_count: usize, already_held: &[String]) -> Vec<&'static str> {
    ACHIEVEMENTS
        .iter()
        .filter(|def| completed_count >= def.threshold)
        .filter(|def| !already_held.iter().any(|held| held == def.name))
        .map(|def| def.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_completion_awards_first_steps() {
        assert_eq!(newly_earned(1, &[]), vec!["First Steps"]);
    }

    #[test]
    fn test_below_threshold_awards_nothing() {
        assert!(newly_earned(0, &[]).is_empty());
    }

    #[test]
    fn test_bulk_jump_awards_every_crossed_threshold() {
        assert_eq!(
            newly_earned(12, &[]),
            vec!["First Steps", "Getting Started", "Making Progress"]
        );
    }

    #[test]
    fn test_already_held_not_reawarded() {
        let held = vec!["First Steps".to_string()];
        assert_eq!(newly_earned(5, &held), vec!["Getting Started"]);
    }

    #[test]
    fn test_reevaluation_is_idempotent() {
        let mut held: Vec<String> = Vec::new();
        held.extend(newly_earned(5, &held).iter().map(|s| s.to_string()));
        assert!(newly_earned(5, &held).is_empty());
    }

    #[test]
    fn test_catalog_is_ordered_by_threshold() {
        for pair in ACHIEVEMENTS.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }
}
