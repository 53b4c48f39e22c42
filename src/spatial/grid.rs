//! Grid-unit coordinates, the native bounding box and the drawable grid extent
//!
//! Blueprint positions have half-unit precision, so the grid doubles every native
//! coordinate to get integers. The bounding box stays in native units; the extent
//! derived from it is what the composer iterates over.

use num_traits::ToPrimitive;
use tracing::debug;

use crate::io::configuration::{BOUNDING_BOX_MARGIN, GRID_SCALE};
use crate::io::error::Result;
use crate::layout::object::{Layout, Position};

/// Integer coordinate in grid units (native position doubled)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    /// Column in grid units
    pub x: i32,
    /// Row in grid units
    pub y: i32,
}

impl GridCoord {
    /// Create a grid coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by a column and row offset
    ///
    /// Returns `None` if the result leaves the `i32` range.
    pub fn offset(self, columns: usize, rows: usize) -> Option<Self> {
        let x = self.x.checked_add(i32::try_from(columns).ok()?)?;
        let y = self.y.checked_add(i32::try_from(rows).ok()?)?;
        Some(Self { x, y })
    }
}

/// Occupied area of a layout in native units
///
/// The maxima carry a margin of one native unit, so a layout with a single object
/// still has a non-zero size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest observed x
    pub min_x: f64,
    /// Smallest observed y
    pub min_y: f64,
    /// Largest observed x plus the margin
    pub max_x: f64,
    /// Largest observed y plus the margin
    pub max_y: f64,
}

impl BoundingBox {
    /// Scan every entity and tile position once
    ///
    /// An empty layout leaves the sentinels in place (minima at `+inf`, maxima at
    /// `-inf + margin`); callers must not draw such a box.
    pub fn compute(layout: &Layout) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for object in layout.objects() {
            let Position { x, y } = object.position();
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let bounds = Self {
            min_x,
            min_y,
            max_x: max_x + BOUNDING_BOX_MARGIN,
            max_y: max_y + BOUNDING_BOX_MARGIN,
        };
        debug!(
            min_x = bounds.min_x,
            min_y = bounds.min_y,
            max_x = bounds.max_x,
            max_y = bounds.max_y,
            "computed bounding box"
        );
        bounds
    }

    /// Width and height in native units
    pub const fn size(&self) -> (f64, f64) {
        (self.max_x - self.min_x, self.max_y - self.min_y)
    }

    /// True if both minima and maxima are finite
    pub const fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Grid cells to draw for this box
    ///
    /// The size is truncated to whole native units before doubling. A degenerate
    /// box yields an empty extent.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if the minimum has no grid representation
    pub fn grid_extent(&self) -> Result<GridExtent> {
        if !self.is_finite() {
            return Ok(GridExtent::default());
        }
        let origin = Position::new(self.min_x, self.min_y).to_grid()?;
        let (width, height) = self.size();
        Ok(GridExtent {
            origin,
            columns: to_grid_count(width),
            rows: to_grid_count(height),
        })
    }
}

fn to_grid_count(native: f64) -> usize {
    (native.trunc() * GRID_SCALE).to_usize().unwrap_or(0)
}

/// Rectangle of grid cells the composer walks, starting at `origin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridExtent {
    /// Top-left grid coordinate
    pub origin: GridCoord,
    /// Number of grid columns
    pub columns: usize,
    /// Number of grid rows
    pub rows: usize,
}

impl GridExtent {
    /// True if there is nothing to draw
    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}
