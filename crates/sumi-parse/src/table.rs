//! Glyph tables loaded from JSON
//!
//! The stroke table maps single characters to their primitives:
//!
//! ```json
//! { "一": [{ "t": "L", "x1": 10, "y1": 50, "x2": 90, "y2": 50 }] }
//! ```
//!
//! The outline table carries already-extracted outlines for the fallback:
//!
//! ```json
//! { "unitsPerEm": 1000, "ascender": 880,
//!   "glyphs": { "A": { "advanceWidth": 600, "d": "M0 0 L300 -700 L600 0" } } }
//! ```

use crate::path_data::parse_path_data;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path as FsPath;
use sumi_core::{
    GlyphPrimitive, GlyphSource, GlyphSourceError, OutlineGlyph, OutlineSource, Result,
};

/// Character → stroke primitives, read-only once loaded
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: HashMap<char, Vec<GlyphPrimitive>>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<GlyphPrimitive>> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, Vec<GlyphPrimitive>> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(BufReader::new(File::open(path)?))?;
        log::debug!("Loaded {} stroke glyphs from {}", table.len(), path.display());
        Ok(table)
    }

    fn from_raw(raw: HashMap<String, Vec<GlyphPrimitive>>) -> Self {
        let mut glyphs = HashMap::with_capacity(raw.len());
        for (key, primitives) in raw {
            match single_char(&key) {
                Some(ch) => {
                    glyphs.insert(ch, primitives);
                },
                None => log::warn!("Skipping glyph key {key:?}: not a single character"),
            }
        }
        Self { glyphs }
    }

    pub fn insert(&mut self, ch: char, primitives: Vec<GlyphPrimitive>) {
        self.glyphs.insert(ch, primitives);
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}

impl GlyphSource for GlyphTable {
    fn primitives(&self, ch: char) -> Option<&[GlyphPrimitive]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOutlineTable {
    units_per_em: f64,
    #[serde(default)]
    ascender: f64,
    glyphs: HashMap<String, RawOutline>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOutline {
    advance_width: Option<f64>,
    d: String,
}

/// Pre-extracted font outlines for characters without stroke data
#[derive(Debug, Clone, Default)]
pub struct OutlineTable {
    glyphs: HashMap<char, OutlineGlyph>,
}

impl OutlineTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(BufReader::new(File::open(path)?))?;
        log::debug!("Loaded {} outline glyphs from {}", table.len(), path.display());
        Ok(table)
    }

    fn from_raw(raw: RawOutlineTable) -> Result<Self> {
        if raw.units_per_em.is_nan() || raw.units_per_em <= 0.0 {
            return Err(GlyphSourceError::InvalidUnitsPerEm(raw.units_per_em).into());
        }

        let mut glyphs = HashMap::with_capacity(raw.glyphs.len());
        for (key, outline) in raw.glyphs {
            let Some(ch) = single_char(&key) else {
                log::warn!("Skipping outline key {key:?}: not a single character");
                continue;
            };
            glyphs.insert(
                ch,
                OutlineGlyph {
                    path: parse_path_data(&outline.d),
                    // Missing advances fall back to a full em
                    advance_width: outline.advance_width.unwrap_or(raw.units_per_em),
                    units_per_em: raw.units_per_em,
                    ascender: raw.ascender,
                },
            );
        }
        Ok(Self { glyphs })
    }

    pub fn insert(&mut self, ch: char, glyph: OutlineGlyph) {
        self.glyphs.insert(ch, glyph);
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl OutlineSource for OutlineTable {
    fn outline(&self, ch: char) -> Option<OutlineGlyph> {
        self.glyphs.get(&ch).cloned()
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
