//! Spatial data structures for placed objects
//!
//! This module contains spatial-related functionality including:
//! - Grid-unit coordinates and the native bounding box
//! - The sparse tilemap indexing objects by grid coordinate

/// Grid coordinates, bounding box and grid extent
pub mod grid;
/// Sparse mapping from grid coordinates to the objects placed there
pub mod tilemap;

pub use grid::{BoundingBox, GridCoord, GridExtent};
pub use tilemap::{Cell, SparseTilemap};
