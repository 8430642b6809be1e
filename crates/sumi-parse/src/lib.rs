//! Sumi Parse: from glyph data to absolute paths
//!
//! Glyph tables store strokes as loose primitives and SVG-style path data.
//! This crate turns them into [`sumi_core::Path`]s in absolute coordinates.
//! Parsing is forgiving: unknown operators and malformed numbers are skipped,
//! so a bad glyph draws less instead of failing the whole render.

mod path_data;
mod primitive;
mod table;
pub mod tokenizer;

pub use path_data::parse_path_data;
pub use primitive::{line_path, parse_glyph, parse_primitive, polyline_path};
pub use table::{GlyphTable, OutlineTable};

#[cfg(test)]
mod proptests;
