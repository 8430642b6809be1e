//! Anchor subdivision: more points, same shape

use sumi_core::{Path, PathCommand, PathStage, Point, Seed};

/// Split a quadratic at `t = 0.5`
///
/// Returns the two halves as `(control, end)` pairs; the first half starts
/// at `p0` and the second at the first half's end.
pub fn split_quad(p0: Point, c: Point, p1: Point) -> [(Point, Point); 2] {
    let q0 = p0.midpoint(c);
    let q1 = c.midpoint(p1);
    let mid = q0.midpoint(q1);
    [(q0, mid), (q1, p1)]
}

/// Split a cubic at `t = 0.5` by De Casteljau
pub fn split_cubic(p0: Point, c1: Point, c2: Point, p1: Point) -> [(Point, Point, Point); 2] {
    let q0 = p0.midpoint(c1);
    let qm = c1.midpoint(c2);
    let q2 = c2.midpoint(p1);
    let r0 = q0.midpoint(qm);
    let r1 = qm.midpoint(q2);
    let mid = r0.midpoint(r1);
    [(q0, r0, mid), (r1, q2, p1)]
}

/// Run `passes` rounds of halving every drawing segment
///
/// Each pass doubles the number of lines and curves. Moves and closes are
/// copied; the implicit closing segment is not split.
pub fn subdivide(path: &Path, passes: u32) -> Path {
    let mut current = path.clone();
    for _ in 0..passes {
        current = subdivide_once(&current);
    }
    current
}

fn subdivide_once(path: &Path) -> Path {
    let mut out = Path::with_capacity(path.len() * 2);
    for segment in path.segments() {
        let from = segment.from;
        match segment.command {
            PathCommand::LineTo(p) => {
                out.line_to(from.midpoint(p));
                out.line_to(p);
            },
            PathCommand::QuadTo(c, p) => {
                for (c, p) in split_quad(from, c, p) {
                    out.quad_to(c, p);
                }
            },
            PathCommand::CubicTo(c1, c2, p) => {
                for (c1, c2, p) in split_cubic(from, c1, c2, p) {
                    out.curve_to(c1, c2, p);
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// Pipeline stage wrapping [`subdivide`]
#[derive(Debug, Clone, Copy)]
pub struct Subdivide {
    pub passes: u32,
}

impl PathStage for Subdivide {
    fn name(&self) -> &'static str {
        "subdivide"
    }

    fn apply(&self, path: &Path, _seed: Seed) -> Path {
        subdivide(path, self.passes)
    }
}
