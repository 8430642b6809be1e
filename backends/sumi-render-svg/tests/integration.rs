//! Integration tests for the SVG stroke sink
//!
//! Renders real glyph data end to end and checks the document structure.

use sumi_core::StyleParameters;
use sumi_parse::GlyphTable;
use sumi_render::{GlyphRenderer, TextLayout};
use sumi_render_svg::{RenderConfig, SvgStrokeWriter};

const STROKES: &str = r#"{
    "人": [
        {"t": "P", "d": "M50 10 Q45 60 10 90"},
        {"t": "P", "d": "M50 40 Q60 70 90 90"}
    ],
    "一": [{"t": "L", "x1": 10, "y1": 50, "x2": 90, "y2": 50}]
}"#;

fn render(text: &str, params: StyleParameters) -> String {
    let table = GlyphTable::from_json_str(STROKES).unwrap();
    let placed = TextLayout::default().place(text, &params);
    let renderer = GlyphRenderer::new(&table, params);
    let mut writer =
        SvgStrokeWriter::new(RenderConfig::new(placed.canvas.width, placed.canvas.height)).unwrap();
    let drawn = renderer.draw(&placed.instances, &mut writer).unwrap();
    assert_eq!(drawn, writer.stroke_count());
    writer.finish().unwrap()
}

#[test]
fn test_one_path_element_per_stroke() {
    let svg = render("人一人", StyleParameters::default());
    assert_eq!(svg.matches("<path ").count(), 5);
    assert_eq!(svg.matches(r#"stroke-linejoin="round""#).count(), 5);
    assert!(svg.contains(r#"stroke-width="2.00""#));
}

#[test]
fn test_contrast_adds_transform_to_every_stroke() {
    let params = StyleParameters {
        contrast: -0.5,
        ..StyleParameters::default()
    };
    let svg = render("人", params);
    assert_eq!(svg.matches(r#"transform="scale(1,1.5)""#).count(), 2);
}

#[test]
fn test_same_text_gives_identical_documents() {
    let params = StyleParameters {
        twist_amount: 8.0,
        roughen_amount: 3.0,
        add_points: 1,
        ..StyleParameters::default()
    };
    assert_eq!(render("人一", params), render("人一", params));
}
