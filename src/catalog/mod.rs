//! Course catalog: prerequisite graph, canned learning paths, loading
//!
//! Catalog data is immutable after load. The graph gates what a learner
//! can take next; the path library holds curriculum templates per goal.

pub mod defaults;
pub mod graph;
pub mod loader;
pub mod paths;

pub use defaults::{default_graph, default_paths};
pub use graph::PrerequisiteGraph;
pub use loader::{load_catalog, Catalog};
pub use paths::{PathLibrary, DEFAULT_GOAL};
