//! Prerequisite dependency graph over learning resources
//!
//! The graph answers "what can be taken next": a resource unlocks once
//! every declared prerequisite is in the learner's completed set. The data
//! is expected to be acyclic; queries iterate over the finite resource set
//! and never recurse, so cyclic data cannot hang them, and `validate`
//! rejects cycles at load time.

use crate::core::error::{PlanError, Result};
use ahash::AHashMap;
use std::collections::HashSet;

const NO_PREREQUISITES: &[String] = &[];

/// Static mapping of resource name -> prerequisite resource names
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    requires: AHashMap<String, Vec<String>>,
}

impl PrerequisiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from (resource, prerequisites) entries
    ///
    /// A resource listed twice keeps its last prerequisite list.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let requires = entries
            .into_iter()
            .map(|(name, prereqs)| {
                (
                    name.into(),
                    prereqs.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { requires }
    }

    /// Number of known resources
    pub fn len(&self) -> usize {
        self.requires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requires.is_empty()
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.requires.contains_key(resource)
    }

    /// All declared resource names, lexicographically sorted
    pub fn resource_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.requires.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Prerequisites of a resource
    ///
    /// Unknown resources and resources with no declared dependencies both
    /// return the empty slice.
    pub fn prerequisites_of(&self, resource: &str) -> &[String] {
        self.requires
            .get(resource)
            .map(Vec::as_slice)
            .unwrap_or(NO_PREREQUISITES)
    }

    /// True iff every prerequisite of `resource` is in `completed`
    ///
    /// A resource with no prerequisites is always unlocked.
    pub fn is_unlocked(&self, resource: &str, completed: &HashSet<String>) -> bool {
        self.prerequisites_of(resource)
            .iter()
            .all(|prereq| completed.contains(prereq))
    }

    /// Resources that can be taken next, lexicographically sorted
    ///
    /// Every resource that is not yet completed and unlocked, unioned with
    /// every zero-prerequisite resource regardless of completion state, so
    /// the entry points of the course stay visible.
    pub fn available_resources(&self, completed: &HashSet<String>) -> Vec<String> {
        let mut available: Vec<String> = self
            .requires
            .iter()
            .filter(|(name, prereqs)| {
                prereqs.is_empty()
                    || (!completed.contains(name.as_str()) && self.is_unlocked(name, completed))
            })
            .map(|(name, _)| name.clone())
            .collect();

        available.sort_unstable();
        available.dedup();
        available
    }

    /// Up to `max_count` suggested next resources
    ///
    /// Drawn from `available_resources` minus the completed set, in the
    /// same lexicographic order, truncated.
    pub fn suggest_next(&self, completed: &HashSet<String>, max_count: usize) -> Vec<String> {
        let mut suggestions: Vec<String> = self
            .available_resources(completed)
            .into_iter()
            .filter(|name| !completed.contains(name))
            .collect();
        suggestions.truncate(max_count);
        suggestions
    }

    /// Fail fast on cyclic prerequisite data
    ///
    /// Runs a Kahn topological pass over the declared resources plus every
    /// referenced prerequisite; any node left with unresolved dependencies
    /// is part of a cycle.
    pub fn validate(&self) -> Result<()> {
        let mut remaining: AHashMap<&str, HashSet<&str>> = AHashMap::new();
        for (name, prereqs) in &self.requires {
            remaining
                .entry(name.as_str())
                .or_default()
                .extend(prereqs.iter().map(String::as_str));
            for prereq in prereqs {
                remaining.entry(prereq.as_str()).or_default();
            }
        }

        let mut resolved: Vec<&str> = remaining
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(name, _)| *name)
            .collect();

        while let Some(name) = resolved.pop() {
            remaining.remove(name);
            for (other, deps) in remaining.iter_mut() {
                if deps.remove(name) && deps.is_empty() {
                    resolved.push(*other);
                }
            }
        }

        match remaining.keys().min() {
            Some(member) => Err(PlanError::CyclicDependency((*member).to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_graph() -> PrerequisiteGraph {
        PrerequisiteGraph::from_entries([
            ("Logic", vec![]),
            ("Sets", vec!["Logic"]),
            ("Relations", vec!["Sets"]),
            ("Functions", vec!["Relations", "Sets"]),
        ])
    }

    #[test]
    fn test_no_prerequisites_always_unlocked() {
        let graph = sample_graph();
        assert!(graph.is_unlocked("Logic", &completed(&[])));
    }

    #[test]
    fn test_unlocked_iff_prerequisites_subset() {
        let graph = sample_graph();
        assert!(!graph.is_unlocked("Functions", &completed(&["Relations"])));
        assert!(graph.is_unlocked("Functions", &completed(&["Relations", "Sets"])));
    }

    #[test]
    fn test_unknown_resource_has_no_prerequisites() {
        let graph = sample_graph();
        assert!(graph.prerequisites_of("Quantum Computing").is_empty());
        assert!(graph.is_unlocked("Quantum Computing", &completed(&[])));
    }

    #[test]
    fn test_available_excludes_completed_gated_resources() {
        let graph = sample_graph();
        let done = completed(&["Logic", "Sets"]);
        let available = graph.available_resources(&done);
        assert!(available.contains(&"Relations".to_string()));
        assert!(!available.contains(&"Sets".to_string()));
        // Zero-prerequisite entry points stay visible even once completed
        assert!(available.contains(&"Logic".to_string()));
    }

    #[test]
    fn test_available_is_sorted_and_deduplicated() {
        let graph = sample_graph();
        let available = graph.available_resources(&completed(&[]));
        let mut sorted = available.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(available, sorted);
    }

    #[test]
    fn test_suggest_next_truncates_and_skips_completed() {
        let graph = sample_graph();
        let done = completed(&["Logic"]);
        let suggestions = graph.suggest_next(&done, 1);
        assert_eq!(suggestions, vec!["Sets".to_string()]);

        // Fewer available than requested returns all of them
        let all = graph.suggest_next(&done, 10);
        assert_eq!(all, vec!["Sets".to_string()]);
    }

    #[test]
    fn test_validate_accepts_acyclic_graph() {
        assert!(sample_graph().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_cycle() {
        let graph = PrerequisiteGraph::from_entries([
            ("A", vec!["B"]),
            ("B", vec!["C"]),
            ("C", vec!["A"]),
        ]);
        match graph.validate() {
            Err(PlanError::CyclicDependency(member)) => {
                assert!(["A", "B", "C"].contains(&member.as_str()));
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_queries_stay_bounded_on_cyclic_data() {
        // Undetected cycles must not hang the resolver
        let graph = PrerequisiteGraph::from_entries([("A", vec!["B"]), ("B", vec!["A"])]);
        let available = graph.available_resources(&completed(&[]));
        assert!(available.is_empty());
    }
}
