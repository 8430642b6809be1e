//! Sumi - Parametric stroke-glyph rendering
//!
//! Sumi turns text into hand-drawn brush strokes:
//! 1. Layout places each character on a fixed grid
//! 2. Stroke primitives are parsed into paths
//! 3. A fixed chain of stages reshapes every path
//! 4. Paths are mapped into device space with a calligraphic pen
//! 5. A stroke sink draws them
//!
//! # Example
//!
//! ```
//! use sumi::prelude::*;
//!
//! let glyphs = GlyphTable::from_json_str(
//!     r#"{"一": [{"t": "L", "x1": 10, "y1": 50, "x2": 90, "y2": 50}]}"#,
//! )?;
//! let params = StyleParameters {
//!     corner_radius: 2.0,
//!     twist_amount: 4.0,
//!     ..StyleParameters::default()
//! };
//!
//! let svg = sumi::render_svg("一一", &glyphs, None, &params, &TextLayout::default())?;
//! assert_eq!(svg.matches("<path ").count(), 2);
//! # Ok::<(), SumiError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `export-svg` (default): SVG documents via `sumi-render-svg`

pub use sumi_core::{error, params, traits, Path, PathCommand, Seed, StyleParameters};

pub use sumi_parse as parse;
pub use sumi_render as render;
pub use sumi_transform as transform;

#[cfg(feature = "export-svg")]
pub use sumi_render_svg as svg;

/// Common imports for typical usage
pub mod prelude {
    pub use sumi_core::{
        error::{Result, SumiError},
        traits::{GlyphSource, OutlineSource, PathStage, StrokeSink},
        LineCap, Path, PathCommand, Seed, StrokePath, StyleParameters,
    };
    pub use sumi_parse::{parse_path_data, GlyphTable, OutlineTable};
    pub use sumi_render::{Direction, GlyphInstance, GlyphRenderer, TextLayout};
    pub use sumi_transform::{apply_transforms, TransformPipeline};

    #[cfg(feature = "export-svg")]
    pub use sumi_render_svg::{RenderConfig, SvgStrokeWriter};
}

#[cfg(feature = "export-svg")]
pub use export::{render_svg, render_svg_with};

#[cfg(feature = "export-svg")]
mod export {
    use sumi_core::{GlyphSource, OutlineSource, Result, StyleParameters};
    use sumi_render::{GlyphRenderer, TextLayout};
    use sumi_render_svg::{RenderConfig, SvgStrokeWriter};

    /// Lay out `text` and render it to an SVG document with default paint
    pub fn render_svg(
        text: &str,
        glyphs: &dyn GlyphSource,
        outlines: Option<&dyn OutlineSource>,
        params: &StyleParameters,
        layout: &TextLayout,
    ) -> Result<String> {
        render_svg_with(text, glyphs, outlines, params, layout, RenderConfig::default())
    }

    /// Like [`render_svg`], painting with `paint`
    ///
    /// The canvas size of `paint` is replaced by the one the layout needs.
    pub fn render_svg_with(
        text: &str,
        glyphs: &dyn GlyphSource,
        outlines: Option<&dyn OutlineSource>,
        params: &StyleParameters,
        layout: &TextLayout,
        paint: RenderConfig,
    ) -> Result<String> {
        let params = params.clamped();
        let placed = layout.place(text, &params);
        log::debug!(
            "Placed {} glyphs on a {:.0}x{:.0} canvas",
            placed.instances.len(),
            placed.canvas.width,
            placed.canvas.height
        );

        let mut renderer = GlyphRenderer::new(glyphs, params);
        if let Some(outlines) = outlines {
            renderer = renderer.with_outlines(outlines);
        }

        let config = RenderConfig {
            width: placed.canvas.width,
            height: placed.canvas.height,
            ..paint
        };
        let mut writer = SvgStrokeWriter::new(config)?;
        let drawn = renderer.draw(&placed.instances, &mut writer)?;
        log::debug!("Drew {drawn} strokes");
        writer.finish()
    }
}
