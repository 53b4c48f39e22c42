//! Type name to glyph hashing and the legend table
//!
//! The hash is the plain sum of the name's code points, reduced modulo the glyph
//! alphabet. It is order-insensitive and collides often; colliding names share a
//! glyph and a legend line.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::io::configuration::{EMPTY_GLYPH, GLYPH_ALPHABET, LEGEND_NAME_DELIMITER};
use crate::layout::object::Layout;

/// Glyph for a type name
///
/// Pure function of the name: the same name maps to the same alphabet character on
/// every call. The empty name maps to a space.
pub fn glyph_for(name: &str) -> char {
    if name.is_empty() {
        return EMPTY_GLYPH;
    }
    let hash: u64 = name.chars().map(|c| u64::from(u32::from(c))).sum();
    let alphabet = GLYPH_ALPHABET.as_bytes();
    let index = (hash % alphabet.len() as u64) as usize;
    alphabet.get(index).map_or(EMPTY_GLYPH, |&byte| char::from(byte))
}

/// Recorded name/glyph associations of one layout
///
/// Names are kept in first-seen order under their glyph.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable<'a> {
    by_name: HashMap<&'a str, char>,
    by_glyph: BTreeMap<char, Vec<&'a str>>,
}

impl<'a> GlyphTable<'a> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every entity name, then every tile name, of the layout
    pub fn build(layout: &'a Layout) -> Self {
        let mut table = Self::new();
        for object in layout.objects() {
            table.record(object.name());
        }
        debug!(
            names = table.by_name.len(),
            glyphs = table.by_glyph.len(),
            "built glyph table"
        );
        table
    }

    /// Glyph for `name`, recording it on first encounter
    pub fn record(&mut self, name: &'a str) -> char {
        if let Some(&glyph) = self.by_name.get(name) {
            return glyph;
        }
        let glyph = glyph_for(name);
        self.by_name.insert(name, glyph);
        self.by_glyph.entry(glyph).or_default().push(name);
        glyph
    }

    /// Recorded glyph for `name`
    pub fn glyph(&self, name: &str) -> Option<char> {
        self.by_name.get(name).copied()
    }

    /// Names recorded under `glyph`, in first-seen order
    pub fn names(&self, glyph: char) -> Option<&[&'a str]> {
        self.by_glyph.get(&glyph).map(Vec::as_slice)
    }

    /// Number of distinct recorded names
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// One `[glyph]: name, name` line per glyph, sorted by the full line text
    pub fn legend_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .by_glyph
            .iter()
            .map(|(glyph, names)| format!("[{glyph}]: {}", names.join(LEGEND_NAME_DELIMITER)))
            .collect();
        lines.sort();
        lines
    }

    /// Legend lines joined by newlines, without a trailing newline
    pub fn legend(&self) -> String {
        self.legend_lines().join("\n")
    }
}
