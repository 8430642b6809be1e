//! SVG Stroke Sink: where finished strokes become markup
//!
//! The renderer hands over device-space strokes; this backend writes each
//! one as an unfilled `<path>` with its own width, cap and join. A stroke
//! drawn with a calligraphic pen carries its surface stretch as a
//! `transform`, so the stroke outline widens along that axis exactly as it
//! would on a canvas.
//!
//! ```
//! use kurbo::BezPath;
//! use sumi_core::{StrokePath, StrokeSink, StrokeStyle};
//! use sumi_render_svg::{RenderConfig, SvgStrokeWriter};
//!
//! let mut writer = SvgStrokeWriter::new(RenderConfig::new(100.0, 50.0)).unwrap();
//! let mut path = BezPath::new();
//! path.move_to((10.0, 25.0));
//! path.line_to((90.0, 25.0));
//! writer.stroke(&StrokePath::new(path, StrokeStyle::default())).unwrap();
//!
//! let svg = writer.finish().unwrap();
//! assert!(svg.contains(r#"d="M10.00,25.00 L90.00,25.00""#));
//! ```

use kurbo::{Affine, BezPath, PathEl, Point};
use std::fmt::Write as FmtWrite;
use sumi_core::{RenderError, Result, StrokePath, StrokeSink};

/// Canvas and paint settings for one SVG document
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub stroke_color: String,
    /// Page fill; None leaves the page transparent
    pub background: Option<String>,
    /// Decimal places for coordinates
    pub precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            stroke_color: "#1a1a1a".to_string(),
            background: Some("#ffffff".to_string()),
            precision: 2,
        }
    }
}

impl RenderConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    pub fn with_background(mut self, background: Option<String>) -> Self {
        self.background = background;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Reject canvases that cannot be drawn on
    pub fn validate(&self) -> Result<()> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        Ok(())
    }
}

/// Collects strokes and writes them out as one SVG document
#[derive(Debug)]
pub struct SvgStrokeWriter {
    config: RenderConfig,
    body: String,
    strokes: usize,
}

impl SvgStrokeWriter {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            body: String::with_capacity(4096),
            strokes: 0,
        })
    }

    /// Number of strokes written so far
    pub fn stroke_count(&self) -> usize {
        self.strokes
    }

    /// Close the document and return it
    pub fn finish(self) -> Result<String> {
        let RenderConfig {
            width,
            height,
            stroke_color,
            background,
            ..
        } = &self.config;

        let mut svg = String::with_capacity(self.body.len() + 512);
        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width:.2} {height:.2}" width="{width:.0}" height="{height:.0}">"#
        )?;
        if let Some(fill) = background {
            writeln!(&mut svg, r#"  <rect width="100%" height="100%" fill="{fill}"/>"#)?;
        }
        writeln!(&mut svg, r#"  <g fill="none" stroke="{stroke_color}">"#)?;
        svg.push_str(&self.body);
        svg.push_str("  </g>\n");
        svg.push_str("</svg>\n");

        log::debug!("SvgStrokeWriter: wrote {} strokes", self.strokes);
        Ok(svg)
    }
}

impl StrokeSink for SvgStrokeWriter {
    fn stroke(&mut self, stroke: &StrokePath) -> Result<()> {
        if stroke.is_empty() {
            return Ok(());
        }
        let precision = self.config.precision;
        let d = path_to_string(&stroke.path, precision);
        write!(
            &mut self.body,
            r#"    <path d="{d}" stroke-width="{:.p$}" stroke-linecap="{}" stroke-linejoin="{}" fill="none""#,
            stroke.style.width,
            stroke.style.cap,
            stroke.style.join.as_str(),
            p = precision
        )?;
        if stroke.pen != Affine::IDENTITY {
            write!(&mut self.body, r#" transform="{}""#, transform_attr(stroke.pen))?;
        }
        self.body.push_str("/>\n");
        self.strokes += 1;
        Ok(())
    }
}

/// `scale(sx,sy)` for pure stretches, `matrix(...)` otherwise
fn transform_attr(affine: Affine) -> String {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    if b == 0.0 && c == 0.0 && e == 0.0 && f == 0.0 {
        format!("scale({a},{d})")
    } else {
        format!("matrix({a} {b} {c} {d} {e} {f})")
    }
}

/// SVG path data with fixed precision
pub fn path_to_string(path: &BezPath, precision: usize) -> String {
    let mut data = String::with_capacity(path.elements().len() * 16);
    for (i, &el) in path.elements().iter().enumerate() {
        if i > 0 {
            data.push(' ');
        }
        match el {
            PathEl::MoveTo(p) => append_command(&mut data, 'M', &[p], precision),
            PathEl::LineTo(p) => append_command(&mut data, 'L', &[p], precision),
            PathEl::QuadTo(p1, p2) => append_command(&mut data, 'Q', &[p1, p2], precision),
            PathEl::CurveTo(p1, p2, p3) => append_command(&mut data, 'C', &[p1, p2, p3], precision),
            PathEl::ClosePath => data.push('Z'),
        }
    }
    data
}

fn append_command(buf: &mut String, cmd: char, points: &[Point], precision: usize) {
    buf.push(cmd);
    let mut iter = points.iter();
    if let Some(first_point) = iter.next() {
        append_point(buf, *first_point, precision);
        for point in iter {
            buf.push(' ');
            append_point(buf, *point, precision);
        }
    }
}

fn append_point(buf: &mut String, point: Point, precision: usize) {
    let _ = write!(buf, "{:.p$},{:.p$}", point.x, point.y, p = precision);
}
