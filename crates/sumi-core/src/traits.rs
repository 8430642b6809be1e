//! The contracts that bind the pipeline together
//!
//! - [`PathStage`] - One geometric transform in the chain
//! - [`GlyphSource`] - Where stroke glyphs come from
//! - [`OutlineSource`] - The font outline fallback
//! - [`StrokeSink`] - Where finished strokes go

use crate::{
    error::Result,
    glyph::{GlyphPrimitive, OutlineGlyph},
    path::Path,
    seed::Seed,
    stroke::StrokePath,
};

/// Every transform in the chain learns these same steps
///
/// A stage reads a path and returns a new one. It must never touch shared
/// state, so stages can run on any thread for any glyph.
///
/// ```
/// use sumi_core::{Path, PathStage, Seed};
///
/// struct Identity;
///
/// impl PathStage for Identity {
///     fn name(&self) -> &'static str {
///         "identity"
///     }
///
///     fn apply(&self, path: &Path, _seed: Seed) -> Path {
///         path.clone()
///     }
/// }
///
/// let path = Identity.apply(&Path::new(), Seed::default());
/// assert!(path.is_empty());
/// ```
pub trait PathStage: Send + Sync {
    /// Used for debugging and logging
    fn name(&self) -> &'static str;

    /// Transform the path; deterministic stages ignore the seed
    fn apply(&self, path: &Path, seed: Seed) -> Path;
}

/// Stroke glyph lookup
pub trait GlyphSource: Send + Sync {
    /// The primitives for `ch`, or None when the table lacks it
    fn primitives(&self, ch: char) -> Option<&[GlyphPrimitive]>;

    fn contains(&self, ch: char) -> bool {
        self.primitives(ch).is_some()
    }
}

/// Outline glyphs for characters the stroke table lacks
pub trait OutlineSource: Send + Sync {
    fn outline(&self, ch: char) -> Option<OutlineGlyph>;
}

/// The stroking primitive at the end of the line
///
/// Implementations turn device-space strokes into pixels, markup or
/// anything else; the pipeline only hands them geometry.
pub trait StrokeSink {
    fn stroke(&mut self, stroke: &StrokePath) -> Result<()>;
}
