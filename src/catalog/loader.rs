//! Load a course catalog from a TOML file
//!
//! A catalog file declares resources with their prerequisites and optional
//! continuous coordinates, plus named learning paths:
//!
//! ```toml
//! [resources."Sets"]
//! prerequisites = ["Introduction to Mathematical Logic"]
//! coordinate = [0.12, 0.55]
//!
//! [paths]
//! set_theory = ["Introduction to Mathematical Logic", "Sets"]
//! ```

use crate::catalog::graph::PrerequisiteGraph;
use crate::catalog::paths::PathLibrary;
use crate::core::error::{PlanError, Result};
use ahash::AHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A loaded course: dependency graph, canned paths, resource coordinates
#[derive(Debug, Clone)]
pub struct Catalog {
    pub graph: PrerequisiteGraph,
    pub paths: PathLibrary,
    /// Continuous (x, y) per resource, for grid layout construction
    pub coordinates: AHashMap<String, (f64, f64)>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    resources: BTreeMap<String, ResourceEntry>,
    #[serde(default)]
    paths: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    #[serde(default)]
    prerequisites: Vec<String>,
    coordinate: Option<[f64; 2]>,
}

/// Load and validate a catalog file
///
/// Fails fast on unreadable files, invalid TOML, and cyclic prerequisite
/// data. Paths referencing undeclared resources are tolerated (the
/// resolver treats unknown names as having no prerequisites) but logged.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&content)
        .map_err(|e| PlanError::Catalog(format!("{}: {}", path.display(), e)))?;

    let graph = PrerequisiteGraph::from_entries(
        file.resources
            .iter()
            .map(|(name, entry)| (name.clone(), entry.prerequisites.clone())),
    );
    graph.validate()?;

    for (goal, resources) in &file.paths {
        for resource in resources {
            if !graph.contains(resource) {
                tracing::warn!(goal = %goal, resource = %resource, "path references undeclared resource");
            }
        }
    }

    let coordinates = file
        .resources
        .iter()
        .filter_map(|(name, entry)| {
            entry
                .coordinate
                .map(|[x, y]| (name.clone(), (x, y)))
        })
        .collect();

    let paths = PathLibrary::from_entries(file.paths);

    tracing::info!(
        resources = graph.len(),
        paths = paths.len(),
        "loaded catalog from {}",
        path.display()
    );

    Ok(Catalog {
        graph,
        paths,
        coordinates,
    })
}
