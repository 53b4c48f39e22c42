//! Sparse mapping from grid coordinates to the objects placed there

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::io::error::Result;
use crate::layout::object::{Entity, Layout, ObjectRef, Position, Tile};
use crate::spatial::grid::GridCoord;

/// Objects sharing one grid coordinate, in layout order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell<'a> {
    /// Entities anchored here
    pub entities: Vec<&'a Entity>,
    /// Tiles anchored here
    pub tiles: Vec<&'a Tile>,
}

impl<'a> Cell<'a> {
    /// Object drawn for this cell: the first entity, else the first tile
    pub fn top(&self) -> Option<ObjectRef<'a>> {
        self.entities
            .first()
            .map(|&entity| ObjectRef::Entity(entity))
            .or_else(|| self.tiles.first().map(|&tile| ObjectRef::Tile(tile)))
    }

    /// True if nothing is anchored here
    pub const fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.tiles.is_empty()
    }
}

/// Grid-unit index over a layout
///
/// Only occupied coordinates are stored. Objects with footprints larger than one
/// grid cell are indexed at their anchor only.
#[derive(Debug, Clone, Default)]
pub struct SparseTilemap<'a> {
    cells: HashMap<GridCoord, Cell<'a>>,
}

impl<'a> SparseTilemap<'a> {
    /// Index every entity, then every tile, of the layout
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if an object position has no grid
    /// representation
    pub fn build(layout: &'a Layout) -> Result<Self> {
        let mut cells: HashMap<GridCoord, Cell<'a>> = HashMap::new();

        for entity in &layout.entities {
            let coord = entity.position.to_grid()?;
            trace!(name = %entity.name, x = coord.x, y = coord.y, "indexing entity");
            cells.entry(coord).or_default().entities.push(entity);
        }

        for tile in &layout.tiles {
            let coord = tile.position.to_grid()?;
            trace!(name = %tile.name, x = coord.x, y = coord.y, "indexing tile");
            cells.entry(coord).or_default().tiles.push(tile);
        }

        debug!(
            cells = cells.len(),
            entities = layout.entities.len(),
            tiles = layout.tiles.len(),
            "built sparse tilemap"
        );
        Ok(Self { cells })
    }

    /// Cell at a grid coordinate, if anything is anchored there
    pub fn at(&self, coord: GridCoord) -> Option<&Cell<'a>> {
        self.cells.get(&coord)
    }

    /// Cell at a native position
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if the position has no grid representation
    pub fn at_position(&self, position: Position) -> Result<Option<&Cell<'a>>> {
        Ok(self.at(position.to_grid()?))
    }

    /// Object drawn at a grid coordinate
    pub fn object_at(&self, coord: GridCoord) -> Option<ObjectRef<'a>> {
        self.at(coord).and_then(Cell::top)
    }

    /// Object drawn at a native position
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if the position has no grid representation
    pub fn object_at_position(&self, position: Position) -> Result<Option<ObjectRef<'a>>> {
        Ok(self.object_at(position.to_grid()?))
    }

    /// Number of occupied grid coordinates
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no coordinate is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
