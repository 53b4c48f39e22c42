//! Diagram composition, legend and the pull-based reader
//!
//! `AsciiArt` owns the lazily built caches for one layout and one cell size. The
//! caches are filled on first use and never rebuilt, so the layout must not change
//! while the renderer is alive (the borrow enforces this).

use std::cell::OnceCell;
use std::fmt;
use std::io::Read;

use tracing::debug;

use crate::io::configuration::LEGEND_SEPARATOR;
use crate::io::error::{ArtError, Result, unsupported_cell_width};
use crate::layout::object::{Layout, ObjectRef};
use crate::render::glyph::{GlyphTable, glyph_for};
use crate::render::screen::{CellSize, ScreenRenderer};
use crate::spatial::grid::{BoundingBox, GridExtent};
use crate::spatial::tilemap::SparseTilemap;

/// Finished diagram and legend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// One newline-terminated line per screen row
    pub diagram: String,
    /// Sorted legend lines, without a trailing newline
    pub legend: String,
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{LEGEND_SEPARATOR}\n{}", self.diagram, self.legend)
    }
}

/// ASCII art renderer for one layout at a fixed cell size
///
/// Not meant to be shared between threads while the caches are still empty.
#[derive(Debug)]
pub struct AsciiArt<'a> {
    layout: &'a Layout,
    cell_width: usize,
    cell_height: usize,
    glyphs: OnceCell<GlyphTable<'a>>,
    tilemap: OnceCell<SparseTilemap<'a>>,
    bounds: OnceCell<BoundingBox>,
}

impl<'a> AsciiArt<'a> {
    /// Create a renderer; the cell size is validated on the first render call
    pub const fn new(layout: &'a Layout, cell_width: usize, cell_height: usize) -> Self {
        Self {
            layout,
            cell_width,
            cell_height,
            glyphs: OnceCell::new(),
            tilemap: OnceCell::new(),
            bounds: OnceCell::new(),
        }
    }

    /// Layout being drawn
    pub const fn layout(&self) -> &'a Layout {
        self.layout
    }

    /// Configured cell width in characters
    pub const fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Configured cell height in characters
    pub const fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Name/glyph associations of every object in the layout
    pub fn glyph_table(&self) -> &GlyphTable<'a> {
        self.glyphs.get_or_init(|| GlyphTable::build(self.layout))
    }

    /// Grid-unit index of the layout
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if an object position has no grid
    /// representation
    pub fn tilemap(&self) -> Result<&SparseTilemap<'a>> {
        if let Some(tilemap) = self.tilemap.get() {
            return Ok(tilemap);
        }
        let built = SparseTilemap::build(self.layout)?;
        Ok(self.tilemap.get_or_init(|| built))
    }

    /// Occupied area in native units, maxima including the margin
    pub fn bounding_box(&self) -> BoundingBox {
        *self.bounds.get_or_init(|| BoundingBox::compute(self.layout))
    }

    /// Width and height in native units
    pub fn size(&self) -> (f64, f64) {
        self.bounding_box().size()
    }

    /// Glyph drawn for an object
    pub fn glyph_for_object(&self, object: ObjectRef<'_>) -> char {
        let name = object.name();
        self.glyph_table()
            .glyph(name)
            .unwrap_or_else(|| glyph_for(name))
    }

    /// Text to emit at a screen position (see `ScreenRenderer::string_at`)
    ///
    /// # Errors
    ///
    /// Returns configuration errors for an unsupported cell size and any error of
    /// the screen renderer
    pub fn string_at_screen_position(&self, screen_x: usize, screen_y: usize) -> Result<String> {
        let size = CellSize::new(self.cell_width, self.cell_height)?;
        let extent = self.bounding_box().grid_extent()?;
        self.screen_renderer(size, extent)?
            .string_at(screen_x, screen_y)
    }

    fn screen_renderer(&self, size: CellSize, extent: GridExtent) -> Result<ScreenRenderer<'_, 'a>> {
        Ok(ScreenRenderer::new(
            self.tilemap()?,
            self.glyph_table(),
            size,
            extent.origin,
        ))
    }

    /// Draw every screen row, top to bottom and left to right
    ///
    /// # Errors
    ///
    /// Returns configuration errors for an unsupported cell size, and stops on the
    /// first rendering error without returning partial output
    pub fn diagram(&self) -> Result<String> {
        let size = CellSize::new(self.cell_width, self.cell_height)?;
        let extent = self.bounding_box().grid_extent()?;
        if extent.is_empty() {
            return Ok(String::new());
        }

        let renderer = self.screen_renderer(size, extent)?;
        let too_large = || {
            unsupported_cell_width(
                self.cell_width,
                self.cell_height,
                &format!(
                    "a {}x{} cell grid does not fit on screen",
                    extent.columns, extent.rows
                ),
            )
        };
        let screen_width = extent
            .columns
            .checked_mul(size.width())
            .ok_or_else(too_large)?;
        let screen_height = extent
            .rows
            .checked_mul(size.height().lines())
            .ok_or_else(too_large)?;
        let capacity = screen_width
            .checked_add(1)
            .and_then(|line| line.checked_mul(screen_height))
            .ok_or_else(too_large)?;

        let mut art = String::with_capacity(capacity);
        for screen_y in 0..screen_height {
            let mut screen_x = 0;
            while screen_x < screen_width {
                let emitted = renderer.string_at(screen_x, screen_y)?;
                if emitted.is_empty() {
                    return Err(ArtError::EmptyEmission { screen_x, screen_y });
                }
                screen_x += emitted.len();
                art.push_str(&emitted);
            }
            art.push('\n');
        }

        debug!(
            columns = screen_width,
            rows = screen_height,
            "rendered diagram"
        );
        Ok(art)
    }

    /// Sorted `[glyph]: names` lines for every name in the layout
    pub fn legend(&self) -> String {
        self.glyph_table().legend()
    }

    /// Diagram and legend
    ///
    /// # Errors
    ///
    /// Returns the errors of `diagram`
    pub fn render(&self) -> Result<Rendering> {
        let diagram = self.diagram()?;
        Ok(Rendering {
            diagram,
            legend: self.legend(),
        })
    }

    /// Turn the renderer into a byte stream of the full output
    pub const fn into_reader(self) -> AsciiArtReader<'a> {
        AsciiArtReader {
            art: self,
            buffer: None,
            position: 0,
        }
    }
}

/// Single-pass byte stream of diagram, separator and legend
///
/// The output is generated on the first read; rendering errors surface there as
/// `std::io::Error`s.
#[derive(Debug)]
pub struct AsciiArtReader<'a> {
    art: AsciiArt<'a>,
    buffer: Option<Vec<u8>>,
    position: usize,
}

impl<'a> AsciiArtReader<'a> {
    /// Create a stream over a layout at the given cell size
    pub fn new(layout: &'a Layout, cell_width: usize, cell_height: usize) -> Self {
        AsciiArt::new(layout, cell_width, cell_height).into_reader()
    }
}

impl Read for AsciiArtReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.buffer.is_none() {
            let rendering = self.art.render()?;
            self.buffer = Some(rendering.to_string().into_bytes());
        }
        let Some(remaining) = self
            .buffer
            .as_deref()
            .and_then(|buffer| buffer.get(self.position..))
        else {
            return Ok(0);
        };

        let count = remaining.len().min(buf.len());
        if let (Some(dst), Some(src)) = (buf.get_mut(..count), remaining.get(..count)) {
            dst.copy_from_slice(src);
        }
        self.position += count;
        Ok(count)
    }
}
