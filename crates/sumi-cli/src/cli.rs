//! CLI argument definitions using Clap v4

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use sumi_core::{LineCap, StyleParameters};

/// Sumi - Hand-drawn stroke lettering from the command line
#[derive(Parser, Debug)]
#[command(name = "sumi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text to an SVG document
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Run one path-data string through the transform chain
    #[command(alias = "p")]
    Path(PathArgs),
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Text to render (reads from stdin if omitted)
    pub text: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,

    /// Stroke glyph table (JSON)
    #[arg(short = 'g', long = "glyphs")]
    pub glyphs: PathBuf,

    /// Outline glyphs for characters the stroke table lacks (JSON)
    #[arg(long = "outlines")]
    pub outlines: Option<PathBuf>,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Font size in pixels
    #[arg(short = 's', long = "font-size", default_value = "50")]
    pub font_size: f64,

    /// Writing direction
    #[arg(short = 'd', long = "direction", default_value = "horizontal")]
    pub direction: DirectionArg,

    /// Margin around the text in pixels
    #[arg(short = 'm', long = "padding", default_value = "40")]
    pub padding: f64,

    /// Stroke color (any SVG paint)
    #[arg(short = 'c', long = "stroke-color", default_value = "#1a1a1a")]
    pub stroke_color: String,

    /// Page color, or "none" for a transparent page
    #[arg(short = 'b', long = "background", default_value = "#ffffff")]
    pub background: String,

    /// Decimal places for coordinates
    #[arg(long = "precision", default_value = "2")]
    pub precision: usize,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the path command
#[derive(Args, Debug)]
pub struct PathArgs {
    /// SVG path data, e.g. "M0 0 L10 0 L10 10"
    #[arg(allow_hyphen_values = true)]
    pub data: String,

    /// Seed for the twist and roughen stages
    #[arg(long = "seed", default_value = "0", allow_hyphen_values = true)]
    pub seed: i64,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Style parameters: a JSON preset plus per-flag overrides
#[derive(Args, Debug, Default, Clone)]
pub struct StyleArgs {
    /// Parameter preset (JSON with camelCase keys)
    #[arg(short = 'p', long = "params")]
    pub params: Option<PathBuf>,

    /// Subdivision passes
    #[arg(long = "add-points")]
    pub add_points: Option<u32>,

    /// Samples per curve when linearizing
    #[arg(long = "linearize")]
    pub linearize_segments: Option<u32>,

    /// Simplification tolerance
    #[arg(long = "simplify")]
    pub simplify_tolerance: Option<f64>,

    /// Corner fillet radius
    #[arg(long = "corner-radius")]
    pub corner_radius: Option<f64>,

    /// Per-point jitter amount
    #[arg(long = "twist")]
    pub twist_amount: Option<f64>,

    /// Jaggedness amount
    #[arg(long = "roughen")]
    pub roughen_amount: Option<f64>,

    /// Pen contrast; positive favors vertical strokes
    #[arg(long = "contrast", allow_hyphen_values = true)]
    pub contrast: Option<f64>,

    /// Stroke width
    #[arg(short = 'w', long = "stroke-width")]
    pub stroke_width: Option<f64>,

    /// Stroke end style: round, butt, square
    #[arg(long = "line-cap")]
    pub line_cap: Option<LineCap>,

    /// Horizontal glyph stretch
    #[arg(long = "scale-x")]
    pub scale_x: Option<f64>,

    /// Vertical glyph stretch
    #[arg(long = "scale-y")]
    pub scale_y: Option<f64>,
}

impl StyleArgs {
    /// Lay every flag that was given over `base`
    pub fn overlay(&self, base: StyleParameters) -> StyleParameters {
        StyleParameters {
            add_points: self.add_points.unwrap_or(base.add_points),
            linearize_segments: self.linearize_segments.unwrap_or(base.linearize_segments),
            simplify_tolerance: self.simplify_tolerance.unwrap_or(base.simplify_tolerance),
            corner_radius: self.corner_radius.unwrap_or(base.corner_radius),
            twist_amount: self.twist_amount.unwrap_or(base.twist_amount),
            roughen_amount: self.roughen_amount.unwrap_or(base.roughen_amount),
            contrast: self.contrast.unwrap_or(base.contrast),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            line_cap: self.line_cap.unwrap_or(base.line_cap),
            scale_x: self.scale_x.unwrap_or(base.scale_x),
            scale_y: self.scale_y.unwrap_or(base.scale_y),
        }
    }
}

/// Writing direction
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DirectionArg {
    /// Rows top to bottom
    Horizontal,
    /// Columns right to left
    Vertical,
}

impl From<DirectionArg> for sumi_render::Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Horizontal => sumi_render::Direction::Horizontal,
            DirectionArg::Vertical => sumi_render::Direction::Vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let args = StyleArgs {
            twist_amount: Some(12.0),
            line_cap: Some(LineCap::Butt),
            ..StyleArgs::default()
        };
        let base = StyleParameters {
            corner_radius: 3.0,
            twist_amount: 1.0,
            ..StyleParameters::default()
        };
        let params = args.overlay(base);
        assert_eq!(params.twist_amount, 12.0);
        assert_eq!(params.corner_radius, 3.0);
        assert_eq!(params.line_cap, LineCap::Butt);
        assert_eq!(params.stroke_width, 2.0);
    }

    #[test]
    fn test_render_arguments_parse() {
        let cli = Cli::parse_from([
            "sumi", "-v", "render", "永", "-g", "glyphs.json", "--contrast", "-1.5",
            "--line-cap", "square", "-d", "vertical",
        ]);
        assert_eq!(cli.verbose, 1);
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.text.as_deref(), Some("永"));
        assert_eq!(args.style.contrast, Some(-1.5));
        assert_eq!(args.style.line_cap, Some(LineCap::Square));
        assert!(matches!(args.direction, DirectionArg::Vertical));
    }
}
