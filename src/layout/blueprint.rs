//! Blueprint string and JSON decoding
//!
//! A blueprint string is a version byte (`0`) followed by standard base64 of a
//! zlib-compressed JSON document. Input that already starts with `{` is taken to be
//! that JSON document.

use std::io::Read;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::read::ZlibDecoder;
use serde::Deserialize;
use tracing::debug;

use crate::io::configuration::{BLUEPRINT_VERSION_PREFIX, JSON_DOCUMENT_PREFIX};
use crate::io::error::{ArtError, Result, invalid_blueprint};
use crate::layout::object::{Entity, Layout, Tile};

/// Top level of a decoded blueprint document
#[derive(Debug, Clone, Deserialize)]
pub struct BlueprintDocument {
    /// The blueprint; absent for blueprint books and other documents
    pub blueprint: Option<Blueprint>,
}

/// The parts of a blueprint the renderer reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Blueprint {
    /// Player-given name
    pub label: Option<String>,
    /// Item kind, normally `blueprint`
    pub item: Option<String>,
    /// Game version the blueprint was exported from
    pub version: Option<u64>,
    /// Placed entities, in blueprint order
    pub entities: Vec<Entity>,
    /// Placed tiles, in blueprint order
    pub tiles: Vec<Tile>,
}

impl From<Blueprint> for Layout {
    fn from(blueprint: Blueprint) -> Self {
        Self::new(blueprint.entities, blueprint.tiles)
    }
}

/// Read a blueprint string or JSON document and return the JSON bytes
///
/// Surrounding whitespace (such as a trailing newline from a pasted string) is
/// ignored, as are line breaks inside the base64 payload.
///
/// # Errors
///
/// Returns an error if reading fails, the input is empty, the version byte is
/// unknown, or the base64 or zlib payload is corrupt
pub fn decode_json(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    match raw.trim_ascii().split_first() {
        None => Err(invalid_blueprint(&"input is empty")),
        Some((&JSON_DOCUMENT_PREFIX, _)) => Ok(raw.trim_ascii().to_vec()),
        Some((&BLUEPRINT_VERSION_PREFIX, payload)) => {
            // Pasted strings may be wrapped over several lines
            let packed: Vec<u8> = payload
                .iter()
                .copied()
                .filter(|byte| !byte.is_ascii_whitespace())
                .collect();
            let compressed = STANDARD.decode(&packed)?;
            let mut json = Vec::new();
            ZlibDecoder::new(compressed.as_slice())
                .read_to_end(&mut json)
                .map_err(|err| invalid_blueprint(&format!("zlib stream is corrupt: {err}")))?;
            debug!(
                compressed = compressed.len(),
                decompressed = json.len(),
                "decoded blueprint string"
            );
            Ok(json)
        }
        Some((&other, _)) => Err(ArtError::UnsupportedVersion {
            found: char::from(other),
        }),
    }
}

/// Parse blueprint JSON into a layout
///
/// # Errors
///
/// Returns an error if the JSON does not match the blueprint schema or holds no
/// `blueprint` object
pub fn parse_layout(json: &[u8]) -> Result<Layout> {
    let document: BlueprintDocument = serde_json::from_slice(json)?;
    let blueprint = document
        .blueprint
        .ok_or_else(|| invalid_blueprint(&"document has no 'blueprint' object"))?;
    debug!(
        label = blueprint.label.as_deref().unwrap_or(""),
        entities = blueprint.entities.len(),
        tiles = blueprint.tiles.len(),
        "parsed blueprint"
    );
    Ok(blueprint.into())
}

/// Read a blueprint string or JSON document into a layout
///
/// # Errors
///
/// Returns an error if decoding or parsing fails
pub fn read_layout(reader: impl Read) -> Result<Layout> {
    let json = decode_json(reader)?;
    parse_layout(&json)
}

/// Re-indent decoded blueprint JSON for reading
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON
pub fn pretty_json(json: &[u8]) -> Result<String> {
    let value: serde_json::Value = serde_json::from_slice(json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
