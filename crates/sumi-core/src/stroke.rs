//! Device-space strokes, ready for a stroking primitive

use crate::params::LineCap;
use kurbo::{Affine, BezPath};

/// How segments meet; a brush pen only ever joins round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    #[default]
    Round,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Round => "round",
        }
    }
}

/// Pen settings for one stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

/// One stroke in device space
///
/// `path` holds the device coordinates. `pen` is the extra surface transform
/// the stroke must be drawn under: with calligraphic contrast it stretches
/// one axis, which widens the pen along that axis, while the path itself was
/// already compressed by the same factor so the glyph keeps its nominal box.
#[derive(Debug, Clone)]
pub struct StrokePath {
    pub path: BezPath,
    pub style: StrokeStyle,
    pub pen: Affine,
}

impl StrokePath {
    pub fn new(path: BezPath, style: StrokeStyle) -> Self {
        Self {
            path,
            style,
            pen: Affine::IDENTITY,
        }
    }

    pub fn with_pen(mut self, pen: Affine) -> Self {
        self.pen = pen;
        self
    }

    /// The geometry as it lands on the surface once the pen transform applies
    pub fn surface_path(&self) -> BezPath {
        self.pen * self.path.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }
}
