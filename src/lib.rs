//! ASCII art rendering of Factorio blueprints
//!
//! Placed objects (entities with an optional facing direction, and ground tiles) are
//! indexed on a sparse half-unit grid, each type name is hashed to a display glyph, and
//! the occupied area is drawn cell by cell at a configurable cell width and height.
//! The diagram is followed by a legend mapping glyphs back to type names.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Placed objects and blueprint decoding
pub mod layout;
/// Glyph assignment, screen position rendering and diagram composition
pub mod render;
/// Grid coordinates, bounding boxes and the sparse tilemap
pub mod spatial;

pub use io::error::{ArtError, Result};
pub use layout::{Direction, Entity, Layout, ObjectRef, Position, Tile};
pub use render::compose::{AsciiArt, AsciiArtReader, Rendering};
