//! Corner rounding with quadratic fillets

use sumi_core::{params::is_enabled, Path, PathCommand, PathStage, Point, Seed};

/// Segments shorter than this never take part in a fillet
const MIN_CORNER_SEGMENT: f64 = 0.01;
/// A fillet may eat at most this share of either adjacent segment
const MAX_CUT_SHARE: f64 = 0.4;

/// Where a fillet leaves the incoming segment and rejoins the outgoing one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fillet {
    pub cut_in: Point,
    pub vertex: Point,
    pub cut_out: Point,
}

/// Fillet for the vertex between `prev → vertex` and `vertex → next`
///
/// The effective radius is `min(radius, 0.4·len_in, 0.4·len_out)`. Returns
/// None when either segment is too short to round.
pub fn corner_fillet(prev: Point, vertex: Point, next: Point, radius: f64) -> Option<Fillet> {
    let d1 = vertex - prev;
    let d2 = next - vertex;
    let (len1, len2) = (d1.hypot(), d2.hypot());
    if len1 < MIN_CORNER_SEGMENT || len2 < MIN_CORNER_SEGMENT {
        return None;
    }
    let r = radius.min(len1 * MAX_CUT_SHARE).min(len2 * MAX_CUT_SHARE);
    Some(Fillet {
        cut_in: vertex - d1 * (r / len1),
        vertex,
        cut_out: vertex + d2 * (r / len2),
    })
}

/// One drawn edge of a contour
#[derive(Debug, Clone, Copy)]
enum Edge {
    Line(Point, Point),
    Curve(PathCommand),
    /// The straight segment a `Close` draws back to the start
    Closing(Point, Point),
}

impl Edge {
    fn line(&self) -> Option<(Point, Point)> {
        match *self {
            Edge::Line(a, b) | Edge::Closing(a, b) => Some((a, b)),
            Edge::Curve(_) => None,
        }
    }
}

/// A run of edges from a start point, optionally closed
struct Contour {
    start: Point,
    opened_by_move: bool,
    edges: Vec<Edge>,
    closed: bool,
}

/// Round every vertex where two straight segments meet
///
/// In a closed contour the `Close` segment counts as straight, so the start
/// vertex is rounded too and the contour then begins at its outgoing cut.
/// A non-positive radius is identity.
pub fn round_corners(path: &Path, radius: f64) -> Path {
    if !is_enabled(radius) {
        return path.clone();
    }

    let mut out = Path::with_capacity(path.len() * 2);
    for contour in contours(path) {
        emit_contour(&contour, radius, &mut out);
    }
    out
}

/// Group commands into contours: each ends at a `Close` or before a `MoveTo`
fn contours(path: &Path) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut current: Option<Contour> = None;

    for segment in path.segments() {
        let from = segment.from;
        match segment.command {
            PathCommand::MoveTo(p) => {
                contours.extend(current.take());
                current = Some(Contour {
                    start: p,
                    opened_by_move: true,
                    edges: Vec::new(),
                    closed: false,
                });
            },
            PathCommand::Close => {
                let mut contour = current.take().unwrap_or_else(|| Contour {
                    start: from,
                    opened_by_move: false,
                    edges: Vec::new(),
                    closed: false,
                });
                if from.distance(contour.start) > 0.0 {
                    contour.edges.push(Edge::Closing(from, contour.start));
                }
                contour.closed = true;
                contours.push(contour);
            },
            command => {
                let contour = current.get_or_insert_with(|| Contour {
                    start: from,
                    opened_by_move: false,
                    edges: Vec::new(),
                    closed: false,
                });
                contour.edges.push(match command {
                    PathCommand::LineTo(p) => Edge::Line(from, p),
                    other => Edge::Curve(other),
                });
            },
        }
    }
    contours.extend(current);
    contours
}

fn emit_contour(contour: &Contour, radius: f64, out: &mut Path) {
    let edges = &contour.edges;
    let n = edges.len();

    // fillets[i] rounds the vertex at the end of edges[i]
    let fillets: Vec<Option<Fillet>> = (0..n)
        .map(|i| {
            let next = if i + 1 < n {
                edges.get(i + 1)
            } else if contour.closed {
                edges.first()
            } else {
                None
            };
            let (a, v) = edges[i].line()?;
            let (_, b) = next?.line()?;
            corner_fillet(a, v, b, radius)
        })
        .collect();

    let wrap = if contour.closed {
        fillets.last().copied().flatten()
    } else {
        None
    };

    // A contour drawn on after a Close needs its own move, since the
    // previous contour may have moved its start to a fillet cut
    if contour.opened_by_move || !out.is_empty() {
        out.move_to(wrap.map_or(contour.start, |f| f.cut_out));
    }

    for (edge, fillet) in edges.iter().zip(&fillets) {
        match (edge, fillet) {
            (_, Some(f)) => {
                out.line_to(f.cut_in);
                out.quad_to(f.vertex, f.cut_out);
            },
            (Edge::Line(_, p), None) => out.line_to(*p),
            (Edge::Curve(command), None) => out.push(*command),
            // Close draws this one
            (Edge::Closing(..), None) => {},
        }
    }

    if contour.closed {
        out.close();
    }
}

/// Pipeline stage wrapping [`round_corners`]
#[derive(Debug, Clone, Copy)]
pub struct RoundCorners {
    pub radius: f64,
}

impl PathStage for RoundCorners {
    fn name(&self) -> &'static str {
        "round-corners"
    }

    fn apply(&self, path: &Path, _seed: Seed) -> Path {
        round_corners(path, self.radius)
    }
}
