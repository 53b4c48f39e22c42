//! Per-screen-position rendering for cell heights 1, 2 and 3
//!
//! Every grid cell is drawn as `width` characters on `height` screen lines. Which
//! line of the cell a screen row falls on decides what is drawn there:
//!
//! - height 1: glyph with its direction indicator beside it when the cell is wide
//!   enough (`^`/`<` to the left, `V`/`>` to the right)
//! - height 2: glyph alone, then a line with the centered indicator
//! - height 3: centered `^` line, glyph with `<`/`>` beside it, centered `V` line
//!
//! Screen coordinates are offsets from the top-left of the drawn grid.

use crate::io::configuration::{EMPTY_GLYPH, MAX_CELL_WIDTH, MIN_TRIPLE_HEIGHT_WIDTH};
use crate::io::error::{ArtError, Result, unsupported_cell_width};
use crate::layout::object::{Direction, ObjectRef};
use crate::render::glyph::{GlyphTable, glyph_for};
use crate::spatial::grid::GridCoord;
use crate::spatial::tilemap::SparseTilemap;

const ALL_INDICATORS: &[char] = &['^', 'V', '<', '>'];
const UP_INDICATOR: &[char] = &['^'];
const DOWN_INDICATOR: &[char] = &['V'];

/// Number of screen lines per grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellHeight {
    /// Glyph and indicator share one line
    Single,
    /// Glyph line, then indicator line
    Double,
    /// Up line, glyph line, down line
    Triple,
}

impl CellHeight {
    /// Screen lines per cell
    pub const fn lines(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    const fn line_role(self, line: usize) -> LineRole {
        match (self, line) {
            (Self::Single, _) => LineRole::Glyph(GlyphLine {
                include_up_down: true,
                adaptive_left_right: true,
                include_direction: true,
            }),
            (Self::Double, 0) => LineRole::Glyph(GlyphLine {
                include_up_down: false,
                adaptive_left_right: false,
                include_direction: false,
            }),
            (Self::Double, _) => LineRole::Indicator(ALL_INDICATORS),
            (Self::Triple, 0) => LineRole::Indicator(UP_INDICATOR),
            (Self::Triple, 1) => LineRole::Glyph(GlyphLine {
                include_up_down: false,
                adaptive_left_right: true,
                include_direction: true,
            }),
            (Self::Triple, _) => LineRole::Indicator(DOWN_INDICATOR),
        }
    }
}

impl TryFrom<usize> for CellHeight {
    type Error = ArtError;

    fn try_from(height: usize) -> Result<Self> {
        match height {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            _ => Err(ArtError::UnsupportedCellHeight { height }),
        }
    }
}

/// Validated cell dimensions in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    width: usize,
    height: CellHeight,
}

impl CellSize {
    /// Validate a width/height combination
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCellHeight` for heights other than 1, 2 and 3, and
    /// `UnsupportedCellWidth` for a zero width, a width above `MAX_CELL_WIDTH` or a
    /// width below 3 at height 3
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let height_kind = CellHeight::try_from(height)?;
        if width == 0 {
            return Err(unsupported_cell_width(width, height, &"width must be at least 1"));
        }
        if width > MAX_CELL_WIDTH {
            return Err(unsupported_cell_width(
                width,
                height,
                &format!("width must be at most {MAX_CELL_WIDTH}"),
            ));
        }
        if height_kind == CellHeight::Triple && width < MIN_TRIPLE_HEIGHT_WIDTH {
            return Err(unsupported_cell_width(
                width,
                height,
                &format!("height 3 needs a width of at least {MIN_TRIPLE_HEIGHT_WIDTH}"),
            ));
        }
        Ok(Self {
            width,
            height: height_kind,
        })
    }

    /// Characters per cell horizontally
    pub const fn width(self) -> usize {
        self.width
    }

    /// Lines per cell vertically
    pub const fn height(self) -> CellHeight {
        self.height
    }
}

/// What a screen line within a cell shows
#[derive(Debug, Clone, Copy)]
enum LineRole {
    Glyph(GlyphLine),
    /// Centered indicator, blank unless it is one of the permitted characters
    Indicator(&'static [char]),
}

#[derive(Debug, Clone, Copy)]
struct GlyphLine {
    /// Keep `^`/`V` beside the glyph
    include_up_down: bool,
    /// Put `V`/`>` to the right of the glyph instead of the left
    adaptive_left_right: bool,
    /// Draw an indicator at all
    include_direction: bool,
}

/// Center one or two characters in `width`, extra space going to the right
///
/// # Errors
///
/// Returns `PaddingLength` if the content is neither one nor two characters long
/// and does not already fill the width
pub fn pad_centered(content: &str, width: usize) -> Result<String> {
    let len = content.chars().count();
    if len == width {
        return Ok(content.to_owned());
    }
    if !matches!(len, 1 | 2) {
        return Err(ArtError::PaddingLength {
            content: content.to_owned(),
            width,
        });
    }
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    Ok(format!("{}{content}{}", " ".repeat(left), " ".repeat(right)))
}

/// Glyph and indicator as a two-character unit
fn glyph_with_indicator(line: GlyphLine, glyph: char, indicator: char) -> Result<String> {
    let unit = match (line.include_up_down, indicator) {
        (_, '<') | (true, '^') => [indicator, glyph],
        (true, 'V' | '>') if line.adaptive_left_right => [glyph, indicator],
        (true, 'V' | '>') => [indicator, glyph],
        (false, '>') if line.adaptive_left_right => [glyph, indicator],
        (false, '>') => return Err(ArtError::UnsupportedIndicator { indicator }),
        _ => [EMPTY_GLYPH, glyph],
    };
    Ok(unit.iter().collect())
}

/// Renders single screen positions of an indexed layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenRenderer<'r, 'a> {
    tilemap: &'r SparseTilemap<'a>,
    glyphs: &'r GlyphTable<'a>,
    size: CellSize,
    origin: GridCoord,
}

impl<'r, 'a> ScreenRenderer<'r, 'a> {
    /// Create a renderer whose screen origin is the grid coordinate `origin`
    pub const fn new(
        tilemap: &'r SparseTilemap<'a>,
        glyphs: &'r GlyphTable<'a>,
        size: CellSize,
        origin: GridCoord,
    ) -> Self {
        Self {
            tilemap,
            glyphs,
            size,
            origin,
        }
    }

    /// Text to emit starting at a screen position
    ///
    /// Empty cells yield a single space. Occupied cells yield the rest of the cell's
    /// padded content from `screen_x` on, so callers advance by the returned length.
    /// The result is never empty.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if the position maps outside the grid, and the
    /// internal consistency errors of the padding routines
    pub fn string_at(&self, screen_x: usize, screen_y: usize) -> Result<String> {
        let width = self.size.width();
        let lines = self.size.height().lines();
        let coord = self
            .origin
            .offset(screen_x / width, screen_y / lines)
            .ok_or_else(|| ArtError::CoordinateOutOfRange {
                x: screen_x as f64,
                y: screen_y as f64,
            })?;

        let content = match self.size.height().line_role(screen_y % lines) {
            LineRole::Glyph(line) => self.glyph_line(coord, line)?,
            LineRole::Indicator(permitted) => self.indicator_line(coord, permitted)?,
        };

        let within = screen_x % width;
        if within > 0 && content.len() == width {
            return Ok(content.get(within..).unwrap_or(" ").to_owned());
        }
        Ok(content)
    }

    fn glyph(&self, object: ObjectRef<'_>) -> char {
        let name = object.name();
        self.glyphs.glyph(name).unwrap_or_else(|| glyph_for(name))
    }

    fn glyph_line(&self, coord: GridCoord, line: GlyphLine) -> Result<String> {
        let Some(object) = self.tilemap.object_at(coord) else {
            return Ok(EMPTY_GLYPH.to_string());
        };
        let glyph = self.glyph(object);

        let width = self.size.width();
        if width == 1 {
            return Ok(glyph.to_string());
        }

        let mut indicator = EMPTY_GLYPH;
        if line.include_direction {
            indicator = Direction::indicator_for(object.direction());
            if !line.include_up_down && matches!(indicator, '^' | 'V') {
                indicator = EMPTY_GLYPH;
            }
        }

        let unit = glyph_with_indicator(line, glyph, indicator)?;
        if width == 2 {
            return Ok(unit);
        }

        let padded = pad_centered(&unit, width)?;
        if padded.len() != width {
            return Err(ArtError::PaddingLength {
                content: unit,
                width,
            });
        }
        Ok(padded)
    }

    fn indicator_line(&self, coord: GridCoord, permitted: &[char]) -> Result<String> {
        let Some(object) = self.tilemap.object_at(coord) else {
            return Ok(EMPTY_GLYPH.to_string());
        };

        let mut indicator = Direction::indicator_for(object.direction());
        if !permitted.contains(&indicator) {
            indicator = EMPTY_GLYPH;
        }

        if self.size.width() == 1 {
            return Ok(indicator.to_string());
        }
        pad_centered(&indicator.to_string(), self.size.width())
    }
}
