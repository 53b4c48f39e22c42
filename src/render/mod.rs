//! Glyph assignment, screen position rendering and diagram composition
//!
//! This module turns an indexed layout into text:
//! - Type names are hashed to glyphs and recorded for the legend
//! - Each screen position is rendered according to the cell height and width
//! - The composer walks every screen row and appends the legend

/// Diagram composition, legend and the pull-based reader
pub mod compose;
/// Type name to glyph hashing and the legend table
pub mod glyph;
/// Per-screen-position rendering for cell heights 1, 2 and 3
pub mod screen;

pub use compose::{AsciiArt, AsciiArtReader, Rendering};
pub use glyph::{GlyphTable, glyph_for};
pub use screen::{CellHeight, CellSize, ScreenRenderer};
