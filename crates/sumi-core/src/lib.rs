//! Sumi Core: the shared vocabulary of the stroke pipeline
//!
//! Text becomes brush strokes in three moves. Each character's glyph is
//! looked up as a handful of path primitives, those primitives are parsed
//! into [`Path`]s and reshaped by a chain of geometric stages, and the
//! result is mapped into device space and handed to a stroking primitive.
//!
//! This crate holds what every step agrees on:
//!
//! - [`Path`] / [`PathCommand`] - The normalized command model
//! - [`StyleParameters`] - The knobs that drive the stages
//! - [`Seed`] - Reproducible per-instance randomness
//! - [`GlyphPrimitive`] / [`OutlineGlyph`] - Glyph source data
//! - [`StrokePath`] - Device-space output
//! - [`traits`] - The seams between crates
//!
//! Parsing lives in `sumi-parse`, the stages in `sumi-transform`, and device
//! mapping in `sumi-render`.

pub mod error;
pub mod glyph;
pub mod params;
pub mod path;
pub mod seed;
pub mod stroke;
pub mod traits;

pub use error::{GlyphSourceError, RenderError, Result, SumiError};
pub use glyph::{GlyphPrimitive, OutlineGlyph};
pub use params::{LineCap, StyleParameters};
pub use path::{Path, PathCommand, Segment};
pub use seed::Seed;
pub use stroke::{LineJoin, StrokePath, StrokeStyle};
pub use traits::{GlyphSource, OutlineSource, PathStage, StrokeSink};

/// Re-exported so downstream crates agree on the point type
pub use kurbo::Point;

/// Side of the em square pre-built stroke glyphs are drawn in
pub const STROKE_EM_UNITS: f64 = 100.0;
