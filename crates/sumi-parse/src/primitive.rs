//! Glyph primitives → paths

use crate::path_data::parse_path_data;
use sumi_core::{GlyphPrimitive, Path, Point};

/// Turn one raw primitive into a path
///
/// Never fails: data that cannot be drawn becomes an empty path.
pub fn parse_primitive(primitive: &GlyphPrimitive) -> Path {
    match primitive {
        GlyphPrimitive::Line { x1, y1, x2, y2 } => {
            line_path(Point::new(*x1, *y1), Point::new(*x2, *y2))
        },
        GlyphPrimitive::Path { d } => parse_path_data(d),
        GlyphPrimitive::Polyline { points } => polyline_path(points),
    }
}

/// Parse every primitive of a glyph, one path per stroke
pub fn parse_glyph(primitives: &[GlyphPrimitive]) -> Vec<Path> {
    primitives.iter().map(parse_primitive).collect()
}

pub fn line_path(from: Point, to: Point) -> Path {
    let mut path = Path::with_capacity(2);
    path.move_to(from);
    path.line_to(to);
    path
}

/// Open polyline through coordinate pairs
///
/// Fewer than two pairs draw nothing; an odd trailing coordinate is ignored.
pub fn polyline_path(coords: &[f64]) -> Path {
    if coords.len() < 4 {
        log::debug!("Polyline with {} coordinates has no segment", coords.len());
        return Path::new();
    }

    let mut path = Path::with_capacity(coords.len() / 2);
    for (i, pair) in coords.chunks_exact(2).enumerate() {
        let p = Point::new(pair[0], pair[1]);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}
