//! Rendering constants and runtime configuration defaults

/// Characters a type name can be hashed to, indexed by `hash % len`
pub const GLYPH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Glyph for an empty type name and for unoccupied cells
pub const EMPTY_GLYPH: char = ' ';

// Blueprint positions have half-unit precision
/// Factor converting native positions to integer grid units
pub const GRID_SCALE: f64 = 2.0;

// Keeps a single-object layout from collapsing to a zero-sized box
/// Margin added to the observed maxima of the bounding box
pub const BOUNDING_BOX_MARGIN: f64 = 1.0;

/// Line placed between the diagram and the legend
pub const LEGEND_SEPARATOR: &str = "---";

/// Joins type names sharing one legend line
pub const LEGEND_NAME_DELIMITER: &str = ", ";

/// Cell heights the screen renderer can draw
pub const SUPPORTED_CELL_HEIGHTS: [usize; 3] = [1, 2, 3];

/// Narrowest cell that fits the three-line layout
pub const MIN_TRIPLE_HEIGHT_WIDTH: usize = 3;

/// Widest cell the screen renderer accepts
pub const MAX_CELL_WIDTH: usize = 256;

// Default values for configurable parameters
/// Default cell width in characters
pub const DEFAULT_CELL_WIDTH: usize = 1;

/// Default cell height in characters
pub const DEFAULT_CELL_HEIGHT: usize = 1;

// Blueprint transport settings
/// Leading byte of a compressed blueprint string
pub const BLUEPRINT_VERSION_PREFIX: u8 = b'0';

/// Leading byte of an already-decompressed JSON blueprint
pub const JSON_DOCUMENT_PREFIX: u8 = b'{';

// Logging settings
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "error";
