//! Render command implementation
//!
//! Text and glyph tables in, one SVG document out.

use crate::cli::RenderArgs;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use sumi_core::{OutlineSource, StyleParameters};
use sumi_parse::{GlyphTable, OutlineTable};
use sumi_render::TextLayout;
use sumi_render_svg::RenderConfig;

pub fn run(args: &RenderArgs) -> Result<()> {
    let text = get_input_text(args)?;

    if !args.quiet {
        eprintln!("Sumi v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Rendering {} characters...", text.chars().count());
    }

    let params = super::resolve_params(&args.style)?;
    let glyphs = GlyphTable::load(&args.glyphs)
        .with_context(|| format!("Failed to load glyph table {}", args.glyphs.display()))?;
    let outlines = args
        .outlines
        .as_ref()
        .map(|path| {
            OutlineTable::load(path)
                .with_context(|| format!("Failed to load outline table {}", path.display()))
        })
        .transpose()?;

    let svg = render_document(&text, &glyphs, outlines.as_ref(), &params, args)?;
    write_output(args, svg.as_bytes())?;

    if !args.quiet {
        match &args.output_file {
            Some(path) => eprintln!("✓ Successfully rendered to {}", path.display()),
            None => eprintln!("✓ Successfully rendered to stdout"),
        }
        eprintln!("  Size: {} bytes", svg.len());
    }
    Ok(())
}

/// Build the SVG document the arguments ask for
pub fn render_document(
    text: &str,
    glyphs: &GlyphTable,
    outlines: Option<&OutlineTable>,
    params: &StyleParameters,
    args: &RenderArgs,
) -> Result<String> {
    let layout = TextLayout::default()
        .with_font_size(args.font_size)
        .with_padding(args.padding)
        .with_direction(args.direction.into());
    let background = match args.background.as_str() {
        "none" | "transparent" => None,
        color => Some(color.to_string()),
    };
    let paint = RenderConfig::default()
        .with_stroke_color(args.stroke_color.as_str())
        .with_background(background)
        .with_precision(args.precision);

    let outlines = outlines.map(|o| o as &dyn OutlineSource);
    let svg = sumi::render_svg_with(text, glyphs, outlines, params, &layout, paint)?;
    Ok(svg)
}

fn get_input_text(args: &RenderArgs) -> Result<String> {
    // Priority: text positional > --text-file > stdin
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = args.text_file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file {}", path.display()));
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn write_output(args: &RenderArgs, data: &[u8]) -> Result<()> {
    match &args.output_file {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(data)?;
        },
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        },
    }
    Ok(())
}
