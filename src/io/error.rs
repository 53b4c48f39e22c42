//! Error types for rendering and blueprint decoding

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::SUPPORTED_CELL_HEIGHTS;

/// Main error type for all rendering and decoding operations
#[derive(Debug)]
pub enum ArtError {
    /// Cell height outside the supported set of 1, 2 and 3 lines
    UnsupportedCellHeight {
        /// Configured cell height in characters
        height: usize,
    },

    /// Cell width that cannot be drawn at the configured height
    UnsupportedCellWidth {
        /// Configured cell width in characters
        width: usize,
        /// Configured cell height in characters
        height: usize,
        /// Explanation of why the width is rejected
        reason: String,
    },

    /// Centering routine received content that is neither one nor two characters long
    ///
    /// Never expected with correct dispatch; reported instead of producing a
    /// misaligned row.
    PaddingLength {
        /// Content that was to be centered
        content: String,
        /// Target width in characters
        width: usize,
    },

    /// Direction indicator that cannot be placed on the requested line
    UnsupportedIndicator {
        /// The indicator character
        indicator: char,
    },

    /// Renderer produced nothing for a screen position
    ///
    /// Stopping here prevents the column cursor from never advancing.
    EmptyEmission {
        /// Screen column
        screen_x: usize,
        /// Screen row
        screen_y: usize,
    },

    /// Native position that has no grid-unit representation
    CoordinateOutOfRange {
        /// Native x coordinate
        x: f64,
        /// Native y coordinate
        y: f64,
    },

    /// Decoded document is not a usable blueprint
    InvalidBlueprint {
        /// Description of what's wrong with the document
        reason: String,
    },

    /// Blueprint string starts with an unknown version byte
    UnsupportedVersion {
        /// The version character found
        found: char,
    },

    /// Blueprint payload is not valid base64
    Base64 {
        /// Underlying decoding error
        source: base64::DecodeError,
    },

    /// Blueprint payload is not valid JSON for the expected schema
    Json {
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCellHeight { height } => {
                let supported: Vec<String> = SUPPORTED_CELL_HEIGHTS
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                write!(
                    f,
                    "Unsupported cell height {height} (supported: {})",
                    supported.join(", ")
                )
            }
            Self::UnsupportedCellWidth {
                width,
                height,
                reason,
            } => {
                write!(
                    f,
                    "Unsupported cell width {width} for cell height {height}: {reason}"
                )
            }
            Self::PaddingLength { content, width } => {
                write!(
                    f,
                    "Cannot center {content:?} ({} chars) in width {width}",
                    content.len()
                )
            }
            Self::UnsupportedIndicator { indicator } => {
                write!(f, "Unsupported direction indicator '{indicator}'")
            }
            Self::EmptyEmission { screen_x, screen_y } => {
                write!(
                    f,
                    "Renderer returned nothing at screen position {screen_x},{screen_y}"
                )
            }
            Self::CoordinateOutOfRange { x, y } => {
                write!(f, "Position {x},{y} is outside the representable grid")
            }
            Self::InvalidBlueprint { reason } => {
                write!(f, "Invalid blueprint: {reason}")
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "Unsupported blueprint version byte '{found}' (want '0' or '{{')")
            }
            Self::Base64 { source } => {
                write!(f, "Failed to decode blueprint base64: {source}")
            }
            Self::Json { source } => {
                write!(f, "Failed to parse blueprint JSON: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64 { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, ArtError>;

impl From<std::io::Error> for ArtError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stream>"),
            operation: "stream",
            source: err,
        }
    }
}

impl From<base64::DecodeError> for ArtError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64 { source: err }
    }
}

impl From<serde_json::Error> for ArtError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { source: err }
    }
}

impl From<ArtError> for std::io::Error {
    fn from(err: ArtError) -> Self {
        match err {
            ArtError::FileSystem { source, .. } => source,
            other => Self::other(other),
        }
    }
}

/// Create an unsupported cell width error
pub fn unsupported_cell_width(width: usize, height: usize, reason: &impl ToString) -> ArtError {
    ArtError::UnsupportedCellWidth {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create an invalid blueprint error
pub fn invalid_blueprint(reason: &impl ToString) -> ArtError {
    ArtError::InvalidBlueprint {
        reason: reason.to_string(),
    }
}
