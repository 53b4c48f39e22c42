//! Placed objects and the layout that owns them
//!
//! Positions are kept in native blueprint units (half-unit precision). Conversion to
//! the integer grid happens once, in `Position::to_grid`.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::io::configuration::{EMPTY_GLYPH, GRID_SCALE};
use crate::io::error::{ArtError, Result};
use crate::spatial::grid::GridCoord;

/// Position in native blueprint units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Position {
    /// Create a position from native coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to grid units
    ///
    /// Each axis is doubled and truncated toward zero (not rounded), so `-0.75`
    /// lands on grid `-1` and `0.75` on grid `1`.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if either doubled coordinate is not finite or
    /// does not fit in an `i32`
    pub fn to_grid(self) -> Result<GridCoord> {
        let out_of_range = || ArtError::CoordinateOutOfRange {
            x: self.x,
            y: self.y,
        };
        let x = (self.x * GRID_SCALE).to_i32().ok_or_else(out_of_range)?;
        let y = (self.y * GRID_SCALE).to_i32().ok_or_else(out_of_range)?;
        Ok(GridCoord::new(x, y))
    }
}

/// Raw facing code of an entity
///
/// Only the four cardinal codes have an indicator; every other code is kept as-is
/// and drawn as blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Direction(pub u8);

impl Direction {
    /// Facing up
    pub const UP: Self = Self(0);
    /// Facing right
    pub const RIGHT: Self = Self(2);
    /// Facing down
    pub const DOWN: Self = Self(4);
    /// Facing left
    pub const LEFT: Self = Self(6);

    /// Indicator character for this code, or a space for non-cardinal codes
    pub const fn indicator(self) -> char {
        match self.0 {
            0 => '^',
            2 => '>',
            4 => 'V',
            6 => '<',
            _ => EMPTY_GLYPH,
        }
    }

    /// Indicator for an optional direction; absent directions are blank
    pub const fn indicator_for(direction: Option<Self>) -> char {
        match direction {
            Some(direction) => direction.indicator(),
            None => EMPTY_GLYPH,
        }
    }
}

/// Directable placed object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier within the blueprint
    #[serde(default)]
    pub entity_number: u32,
    /// Prototype name, e.g. `transport-belt`
    pub name: String,
    /// Anchor position
    pub position: Position,
    /// Facing code, absent for undirected entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Entity {
    /// Create an entity
    pub fn new(
        entity_number: u32,
        name: impl Into<String>,
        position: Position,
        direction: Option<Direction>,
    ) -> Self {
        Self {
            entity_number,
            name: name.into(),
            position,
            direction,
        }
    }
}

/// Ground covering; never has a direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Prototype name, e.g. `stone-path`
    pub name: String,
    /// Anchor position
    pub position: Position,
}

impl Tile {
    /// Create a tile
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Borrowed reference to either kind of placed object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectRef<'a> {
    /// A directable entity
    Entity(&'a Entity),
    /// A ground tile
    Tile(&'a Tile),
}

impl<'a> ObjectRef<'a> {
    /// Prototype name of the object
    pub fn name(self) -> &'a str {
        match self {
            Self::Entity(entity) => &entity.name,
            Self::Tile(tile) => &tile.name,
        }
    }

    /// Anchor position of the object
    pub const fn position(self) -> Position {
        match self {
            Self::Entity(entity) => entity.position,
            Self::Tile(tile) => tile.position,
        }
    }

    /// Facing code; always `None` for tiles
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Entity(entity) => entity.direction,
            Self::Tile(_) => None,
        }
    }
}

/// Ordered entities and tiles of one blueprint
///
/// Order is significant: the first object inserted at a grid coordinate is the one
/// drawn there.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Directable objects, in blueprint order
    pub entities: Vec<Entity>,
    /// Ground tiles, in blueprint order
    pub tiles: Vec<Tile>,
}

impl Layout {
    /// Create a layout from entities and tiles
    pub const fn new(entities: Vec<Entity>, tiles: Vec<Tile>) -> Self {
        Self { entities, tiles }
    }

    /// True if the layout holds neither entities nor tiles
    pub const fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.tiles.is_empty()
    }

    /// All objects: entities in order, then tiles in order
    pub fn objects(&self) -> impl Iterator<Item = ObjectRef<'_>> {
        self.entities
            .iter()
            .map(ObjectRef::Entity)
            .chain(self.tiles.iter().map(ObjectRef::Tile))
    }
}
