//! Placed objects and blueprint decoding
//!
//! This module contains the input side of the renderer:
//! - Entities, tiles and their positions and directions
//! - Decoding of blueprint strings into a `Layout`

/// Blueprint string and JSON decoding
pub mod blueprint;
/// Placed objects and the layout that owns them
pub mod object;

pub use object::{Direction, Entity, Layout, ObjectRef, Position, Tile};
