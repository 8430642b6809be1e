//! Curve flattening

use sumi_core::{Path, PathCommand, PathStage, Point, Seed};

/// Point on a quadratic Bezier at `t`, in Bernstein form
pub fn quad_point(p0: Point, c: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * p0.x + 2.0 * u * t * c.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * c.y + t * t * p1.y,
    )
}

/// Point on a cubic Bezier at `t`, in Bernstein form
pub fn cubic_point(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * u * p0.x + 3.0 * u * u * t * c1.x + 3.0 * u * t * t * c2.x + t * t * t * p1.x,
        u * u * u * p0.y + 3.0 * u * u * t * c1.y + 3.0 * u * t * t * c2.y + t * t * t * p1.y,
    )
}

/// Replace every curve with `segments` straight lines
///
/// Samples land at `t = 1/n, 2/n, … 1`, so the last one is the exact curve
/// end. Lines, moves and closes are copied. `segments == 0` is identity.
pub fn flatten(path: &Path, segments: u32) -> Path {
    if segments == 0 {
        return path.clone();
    }

    let n = f64::from(segments);
    let mut out = Path::with_capacity(path.len() * segments as usize);
    for segment in path.segments() {
        let from = segment.from;
        match segment.command {
            PathCommand::QuadTo(c, p) => {
                out.extend((1..=segments).map(|i| {
                    PathCommand::LineTo(quad_point(from, c, p, f64::from(i) / n))
                }));
            },
            PathCommand::CubicTo(c1, c2, p) => {
                out.extend((1..=segments).map(|i| {
                    PathCommand::LineTo(cubic_point(from, c1, c2, p, f64::from(i) / n))
                }));
            },
            other => out.push(other),
        }
    }
    out
}

/// Pipeline stage wrapping [`flatten`]
#[derive(Debug, Clone, Copy)]
pub struct Linearize {
    pub segments: u32,
}

impl PathStage for Linearize {
    fn name(&self) -> &'static str {
        "linearize"
    }

    fn apply(&self, path: &Path, _seed: Seed) -> Path {
        flatten(path, self.segments)
    }
}
