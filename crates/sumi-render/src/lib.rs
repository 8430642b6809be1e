//! Sumi Render: placing glyphs and mapping them into device space
//!
//! - [`TextLayout`] - Puts characters on a fixed grid
//! - [`GlyphRenderer`] - Runs each glyph through the stage chain in parallel
//! - [`DeviceMapping`] - Glyph box, scale and calligraphic pen stretch
//!
//! The output is a list of [`sumi_core::StrokePath`]s for any
//! [`sumi_core::StrokeSink`] to draw.

pub mod layout;
pub mod mapper;
pub mod renderer;

pub use layout::{is_latin, Direction, PlacedText, TextLayout};
pub use mapper::{DeviceMapping, OUTLINE_STROKE_SHARE};
pub use renderer::{GlyphInstance, GlyphKind, GlyphRenderer, RenderedGlyph};
