// this_file: crates/sumi-render/src/mapper.rs

//! Glyph-local coordinates → device space
//!
//! A glyph is drawn at `(ox + x·sx, oy + y·sy)`. Calligraphic contrast adds
//! a surface stretch on one axis: the stroke is drawn under that stretch so
//! the pen looks flat, while the origin and scale on the same axis shrink by
//! the same factor so the glyph box does not move.

use kurbo::{Affine, BezPath, Point, Vec2};
use sumi_core::{OutlineGlyph, Path, StyleParameters, STROKE_EM_UNITS};

/// Share of the configured stroke width used for outline glyphs
pub const OUTLINE_STROKE_SHARE: f64 = 0.4;

/// Where and how large one glyph lands on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceMapping {
    pub origin: Point,
    pub scale: Vec2,
    /// Surface stretch the strokes are drawn under
    pub pen: Affine,
}

impl DeviceMapping {
    pub fn new(origin: Point, scale_x: f64, scale_y: f64) -> Self {
        Self {
            origin,
            scale: Vec2::new(scale_x, scale_y),
            pen: Affine::IDENTITY,
        }
    }

    /// Mapping for a stroke glyph drawn in the 100-unit em box
    pub fn for_stroke_glyph(center: Point, size: f64, params: &StyleParameters) -> Self {
        let scale = size / STROKE_EM_UNITS;
        let origin = Point::new(
            center.x - size * params.scale_x / 2.0,
            center.y - size * params.scale_y / 2.0,
        );
        Self::new(origin, scale * params.scale_x, scale * params.scale_y)
            .with_contrast(params.contrast)
    }

    /// Mapping for an outline glyph already scaled to `size`
    ///
    /// The outline's baseline sits at y = 0, so the origin drops by the
    /// ascender to put the glyph's top at the top of its box.
    pub fn for_outline_glyph(
        center: Point,
        size: f64,
        glyph: &OutlineGlyph,
        params: &StyleParameters,
    ) -> Self {
        let units = size / glyph.units_per_em;
        let advance = glyph.advance_width * units;
        let ascent = glyph.ascender * units;
        let origin = Point::new(
            center.x - advance * params.scale_x / 2.0,
            center.y - size * params.scale_y / 2.0 + ascent * params.scale_y,
        );
        Self::new(origin, params.scale_x, params.scale_y).with_contrast(params.contrast)
    }

    /// Apply calligraphic contrast
    ///
    /// Positive values stretch the surface horizontally (heavy verticals),
    /// negative ones vertically (heavy horizontals). Zero leaves the mapping
    /// untouched.
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        if contrast == 0.0 || contrast.is_nan() {
            return self;
        }
        let m = 1.0 + contrast.abs();
        if contrast > 0.0 {
            self.pen = Affine::scale_non_uniform(m, 1.0);
            self.origin.x /= m;
            self.scale.x /= m;
        } else {
            self.pen = Affine::scale_non_uniform(1.0, m);
            self.origin.y /= m;
            self.scale.y /= m;
        }
        self
    }

    /// Glyph-local → pre-stretch device coordinates
    pub fn to_affine(&self) -> Affine {
        Affine::new([self.scale.x, 0.0, 0.0, self.scale.y, self.origin.x, self.origin.y])
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point::new(self.origin.x + p.x * self.scale.x, self.origin.y + p.y * self.scale.y)
    }

    pub fn map_path(&self, path: &Path) -> BezPath {
        path.apply_affine(self.to_affine()).to_bez_path()
    }

    /// Where a glyph-local point ends up once the pen stretch applies
    pub fn surface_point(&self, p: Point) -> Point {
        self.pen * self.map_point(p)
    }
}
