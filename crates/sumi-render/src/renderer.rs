// this_file: crates/sumi-render/src/renderer.rs

//! Glyph instances → device-space strokes
//!
//! Each instance is independent: parse its primitives, run the stage chain
//! with the instance seed, map into device space. Instances render in
//! parallel and come back in input order.

use crate::mapper::{DeviceMapping, OUTLINE_STROKE_SHARE};
use kurbo::{Affine, Point};
use rayon::prelude::*;
use sumi_core::{
    GlyphPrimitive, GlyphSource, LineJoin, OutlineGlyph, OutlineSource, RenderError, Result, Seed,
    StrokePath, StrokeSink, StrokeStyle, StyleParameters,
};
use sumi_parse::parse_primitive;
use sumi_transform::TransformPipeline;

/// One character placed on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphInstance {
    pub ch: char,
    /// Index within its text line
    pub column: usize,
    /// Index of the text line
    pub line: usize,
    /// Center of the glyph box in device units
    pub center: Point,
    /// Glyph box size in device units
    pub size: f64,
}

impl GlyphInstance {
    pub fn seed(&self) -> Seed {
        Seed::for_position(self.ch, self.column, self.line)
    }
}

/// Which source a glyph was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Stroke,
    Outline,
    /// Neither source had the character; nothing was drawn
    Missing,
}

/// The strokes of one rendered glyph, in draw order
#[derive(Debug, Clone)]
pub struct RenderedGlyph {
    pub ch: char,
    pub kind: GlyphKind,
    pub strokes: Vec<StrokePath>,
}

/// Renders glyph instances against a stroke table and an optional outline fallback
pub struct GlyphRenderer<'a> {
    glyphs: &'a dyn GlyphSource,
    outlines: Option<&'a dyn OutlineSource>,
    params: StyleParameters,
    pipeline: TransformPipeline,
}

impl<'a> GlyphRenderer<'a> {
    /// Renderer for `params`, which are clamped to their supported ranges
    pub fn new(glyphs: &'a dyn GlyphSource, params: StyleParameters) -> Self {
        let params = params.clamped();
        Self {
            glyphs,
            outlines: None,
            pipeline: TransformPipeline::from_params(&params),
            params,
        }
    }

    /// Fall back to font outlines for characters the stroke table lacks
    pub fn with_outlines(mut self, outlines: &'a dyn OutlineSource) -> Self {
        self.outlines = Some(outlines);
        self
    }

    /// Replace the standard stage chain
    pub fn with_pipeline(mut self, pipeline: TransformPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn params(&self) -> &StyleParameters {
        &self.params
    }

    fn stroke_style(&self, width_share: f64) -> StrokeStyle {
        StrokeStyle {
            width: self.params.stroke_width * width_share,
            cap: self.params.line_cap,
            join: LineJoin::Round,
        }
    }

    /// Render one instance
    pub fn render(&self, instance: &GlyphInstance) -> Result<RenderedGlyph> {
        if !instance.size.is_finite() || instance.size <= 0.0 {
            return Err(RenderError::InvalidSize(instance.size).into());
        }

        if let Some(primitives) = self.glyphs.primitives(instance.ch) {
            return Ok(self.render_strokes(instance, primitives));
        }
        if let Some(glyph) = self.outlines.and_then(|o| o.outline(instance.ch)) {
            return Ok(self.render_outline(instance, &glyph));
        }

        if instance.ch.is_whitespace() {
            log::trace!("Skipping whitespace at {}:{}", instance.line, instance.column);
        } else {
            log::warn!(
                "No glyph for {:?} (U+{:04X}); leaving its cell empty",
                instance.ch,
                u32::from(instance.ch)
            );
        }
        Ok(RenderedGlyph {
            ch: instance.ch,
            kind: GlyphKind::Missing,
            strokes: Vec::new(),
        })
    }

    fn render_strokes(&self, instance: &GlyphInstance, primitives: &[GlyphPrimitive]) -> RenderedGlyph {
        let mapping = DeviceMapping::for_stroke_glyph(instance.center, instance.size, &self.params);
        let style = self.stroke_style(1.0);
        let seed = instance.seed();

        let strokes = primitives
            .iter()
            .enumerate()
            .filter_map(|(i, primitive)| {
                let path = parse_primitive(primitive);
                if path.is_empty() {
                    log::debug!("Primitive {i} of {:?} draws nothing", instance.ch);
                    return None;
                }
                let path = self.pipeline.apply(&path, seed.for_primitive(i));
                Some(StrokePath::new(mapping.map_path(&path), style).with_pen(mapping.pen))
            })
            .collect();

        RenderedGlyph {
            ch: instance.ch,
            kind: GlyphKind::Stroke,
            strokes,
        }
    }

    fn render_outline(&self, instance: &GlyphInstance, glyph: &OutlineGlyph) -> RenderedGlyph {
        let mapping =
            DeviceMapping::for_outline_glyph(instance.center, instance.size, glyph, &self.params);
        let local = glyph
            .path
            .apply_affine(Affine::scale(instance.size / glyph.units_per_em));
        let path = self.pipeline.apply(&local, instance.seed());

        let strokes = if path.is_empty() {
            Vec::new()
        } else {
            vec![StrokePath::new(mapping.map_path(&path), self.stroke_style(OUTLINE_STROKE_SHARE))
                .with_pen(mapping.pen)]
        };
        RenderedGlyph {
            ch: instance.ch,
            kind: GlyphKind::Outline,
            strokes,
        }
    }

    /// Render every instance in parallel, keeping input order
    pub fn render_all(&self, instances: &[GlyphInstance]) -> Result<Vec<RenderedGlyph>> {
        log::debug!(
            "Rendering {} glyphs through {} stages",
            instances.len(),
            self.pipeline.len()
        );
        instances.par_iter().map(|i| self.render(i)).collect()
    }

    /// Render every instance and hand the strokes to `sink` in order
    ///
    /// Returns the number of strokes drawn.
    pub fn draw(&self, instances: &[GlyphInstance], sink: &mut dyn StrokeSink) -> Result<usize> {
        let mut drawn = 0;
        for glyph in self.render_all(instances)? {
            for stroke in &glyph.strokes {
                sink.stroke(stroke)?;
                drawn += 1;
            }
        }
        Ok(drawn)
    }
}
