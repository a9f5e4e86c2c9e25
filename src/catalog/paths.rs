//! Named canned curricula
//!
//! A learning path is an ordered resource sequence for a goal, distinct
//! from a grid trajectory. Unknown goals fall back to the complete-course
//! path rather than erroring.

use ahash::AHashMap;

/// Goal name used when a requested path is unknown
pub const DEFAULT_GOAL: &str = "complete_course";

/// Library of named learning paths, loaded at startup and immutable after
#[derive(Debug, Clone, Default)]
pub struct PathLibrary {
    paths: AHashMap<String, Vec<String>>,
}

impl PathLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let paths = entries
            .into_iter()
            .map(|(goal, path)| (goal.into(), path.into_iter().map(Into::into).collect()))
            .collect();
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Goal names, lexicographically sorted
    pub fn goal_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.paths.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The path for a goal, falling back to the complete-course path
    ///
    /// Returns the empty slice only when the library has no fallback
    /// either (an empty library).
    pub fn get(&self, goal: &str) -> &[String] {
        self.paths
            .get(goal)
            .or_else(|| self.paths.get(DEFAULT_GOAL))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True iff `goal` is a known path name (no fallback involved)
    pub fn contains(&self, goal: &str) -> bool {
        self.paths.contains_key(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> PathLibrary {
        PathLibrary::from_entries([
            ("basic_logic", vec!["Logic", "Equivalence"]),
            (DEFAULT_GOAL, vec!["Logic", "Sets", "Relations"]),
        ])
    }

    #[test]
    fn test_known_goal_returns_its_path() {
        let lib = sample_library();
        assert_eq!(lib.get("basic_logic"), ["Logic", "Equivalence"]);
    }

    #[test]
    fn test_unknown_goal_falls_back_to_default() {
        let lib = sample_library();
        assert_eq!(lib.get("underwater_basketry"), lib.get(DEFAULT_GOAL));
        assert!(!lib.contains("underwater_basketry"));
    }

    #[test]
    fn test_empty_library_returns_empty_path() {
        let lib = PathLibrary::new();
        assert!(lib.get("anything").is_empty());
    }
}
