//! Grid layout derived from continuous resource coordinates
//!
//! The coordinate source supplies a continuous (x, y) per resource. Cells
//! are built by scaling, flooring to integers, and translating so the
//! minimum coordinate maps to (0, 0); the extent is max + 1 on each axis.

use crate::core::types::GridPos;
use ahash::AHashMap;

/// Discrete cell assignment for every resource with a known coordinate
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    cells: AHashMap<String, GridPos>,
    width: i32,
    height: i32,
}

impl GridLayout {
    /// An empty layout: no resource has a cell, extent 0x0
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a layout from continuous coordinates
    ///
    /// Each coordinate is multiplied by `scale` and floored; the whole set
    /// is then translated so the minimum cell is the origin.
    pub fn from_coordinates<I, S>(coordinates: I, scale: f64) -> Self
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: Into<String>,
    {
        let scaled: Vec<(String, i32, i32)> = coordinates
            .into_iter()
            .map(|(name, (x, y))| {
                (
                    name.into(),
                    (x * scale).floor() as i32,
                    (y * scale).floor() as i32,
                )
            })
            .collect();

        if scaled.is_empty() {
            return Self::empty();
        }

        let min_x = scaled.iter().map(|(_, x, _)| *x).min().unwrap_or(0);
        let min_y = scaled.iter().map(|(_, _, y)| *y).min().unwrap_or(0);

        let cells: AHashMap<String, GridPos> = scaled
            .into_iter()
            .map(|(name, x, y)| (name, GridPos::new(x - min_x, y - min_y)))
            .collect();

        let width = cells.values().map(|p| p.x).max().unwrap_or(-1) + 1;
        let height = cells.values().map(|p| p.y).max().unwrap_or(-1) + 1;

        Self {
            cells,
            width,
            height,
        }
    }

    /// Cell of a resource, if the coordinate source knew it
    pub fn cell_of(&self, resource: &str) -> Option<GridPos> {
        self.cells.get(resource).copied()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
