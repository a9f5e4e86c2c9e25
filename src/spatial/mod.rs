//! Spatial mapping from resources to learning-grid cells

pub mod layout;

pub use layout::GridLayout;
