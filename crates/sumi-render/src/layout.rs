//! Fixed-grid text placement
//!
//! Text is laid out one glyph cell at a time, one row (or column) per input
//! line. There is no wrapping and no automatic sizing: the canvas grows to
//! fit the text at the requested font size.

use crate::renderer::GlyphInstance;
use kurbo::{Point, Size};
use sumi_core::StyleParameters;

/// Latin glyphs are drawn this much larger than CJK ones
pub const LATIN_SCALE: f64 = 1.25;
/// Latin glyphs sit this share of the font size lower
pub const LATIN_Y_OFFSET: f64 = 0.05;
/// Latin cells are this share of a full cell wide
pub const LATIN_SPACING: f64 = 0.8;

/// Writing direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Rows top to bottom, each row centered
    #[default]
    Horizontal,
    /// Columns right to left, glyphs top to bottom
    Vertical,
}

/// Grid metrics for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    pub font_size: f64,
    /// Cell advance as a multiple of the font size
    pub letter_spacing: f64,
    /// Row pitch as a multiple of the font size
    pub line_height: f64,
    pub padding: f64,
    pub direction: Direction,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            font_size: 50.0,
            letter_spacing: 1.05,
            line_height: 1.3,
            padding: 40.0,
            direction: Direction::Horizontal,
        }
    }
}

/// Glyph placements plus the canvas they need
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub instances: Vec<GlyphInstance>,
    pub canvas: Size,
}

/// Half-width and full-width Latin letters and digits
pub fn is_latin(ch: char) -> bool {
    let c = u32::from(ch);
    if c <= 0x024F {
        return true;
    }
    (0xFF01..=0xFF5E).contains(&c)
        && char::from_u32(c - 0xFEE0).is_some_and(|half| half.is_ascii_alphanumeric())
}

impl TextLayout {
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    fn cell(&self) -> f64 {
        self.font_size * self.letter_spacing
    }

    fn pitch(&self) -> f64 {
        self.font_size * self.line_height
    }

    fn glyph_size(&self, ch: char) -> f64 {
        if is_latin(ch) {
            self.font_size * LATIN_SCALE
        } else {
            self.font_size
        }
    }

    /// Place every character of `text`
    ///
    /// Columns and lines count characters, so the seed of a glyph depends
    /// only on what it is and where it sits.
    pub fn place(&self, text: &str, params: &StyleParameters) -> PlacedText {
        let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        match self.direction {
            Direction::Horizontal => self.place_horizontal(&lines, params),
            Direction::Vertical => self.place_vertical(&lines, params),
        }
    }

    fn place_horizontal(&self, lines: &[Vec<char>], params: &StyleParameters) -> PlacedText {
        let advance = |ch: char| {
            let cell = if is_latin(ch) {
                self.cell() * LATIN_SPACING
            } else {
                self.cell()
            };
            cell * params.scale_x
        };
        let widths: Vec<f64> = lines
            .iter()
            .map(|line| line.iter().map(|&ch| advance(ch)).sum())
            .collect();
        let block_width = widths.iter().copied().fold(0.0, f64::max);
        let row = self.pitch() * params.scale_y;
        let canvas = Size::new(
            block_width + self.padding * 2.0,
            row * lines.len() as f64 + self.padding * 2.0,
        );

        let mut instances = Vec::new();
        for (li, (line, width)) in lines.iter().zip(&widths).enumerate() {
            let cy = self.padding + row / 2.0 + li as f64 * row;
            let mut x = (canvas.width - width) / 2.0;
            for (ci, &ch) in line.iter().enumerate() {
                let step = advance(ch);
                let y = if is_latin(ch) {
                    cy + self.font_size * LATIN_Y_OFFSET
                } else {
                    cy
                };
                instances.push(GlyphInstance {
                    ch,
                    column: ci,
                    line: li,
                    center: Point::new(x + step / 2.0, y),
                    size: self.glyph_size(ch),
                });
                x += step;
            }
        }
        PlacedText { instances, canvas }
    }

    fn place_vertical(&self, lines: &[Vec<char>], params: &StyleParameters) -> PlacedText {
        let column = self.pitch() * params.scale_x;
        let step = self.cell() * params.scale_y;
        let longest = lines.iter().map(Vec::len).max().unwrap_or(0);
        let canvas = Size::new(
            column * lines.len() as f64 + self.padding * 2.0,
            step * longest as f64 + self.padding * 2.0,
        );

        let start_x = canvas.width - self.padding - column / 2.0;
        let start_y = self.padding + step / 2.0;
        let mut instances = Vec::new();
        for (li, line) in lines.iter().enumerate() {
            let cx = start_x - li as f64 * column;
            for (ci, &ch) in line.iter().enumerate() {
                instances.push(GlyphInstance {
                    ch,
                    column: ci,
                    line: li,
                    center: Point::new(cx, start_y + ci as f64 * step),
                    size: self.glyph_size(ch),
                });
            }
        }
        PlacedText { instances, canvas }
    }
}
