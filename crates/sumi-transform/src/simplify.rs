//! Douglas-Peucker reduction with cubic refitting
//!
//! A stroke is first reduced to the handful of points that matter, then each
//! run between two kept points is replaced by one least-squares cubic. The
//! result is a smooth path with far fewer anchors than the input.

use crate::flatten::flatten;
use sumi_core::{params::is_enabled, Path, PathCommand, PathStage, Point, Seed};

/// Samples per curve used before reduction
const SIMPLIFY_FLATTEN_SEGMENTS: u32 = 30;
/// Chords shorter than this measure distance from the chord start instead
const MIN_CHORD_LENGTH: f64 = 0.001;
const FIT_EPSILON: f64 = 1e-10;

/// Simplify every subpath to within `tolerance`
///
/// Subpaths with fewer than three points pass through as they are. A closed
/// subpath stays closed. A non-positive tolerance is identity.
pub fn simplify(path: &Path, tolerance: f64) -> Path {
    if !is_enabled(tolerance) {
        return path.clone();
    }

    let work = if path.has_curves() {
        flatten(path, SIMPLIFY_FLATTEN_SEGMENTS)
    } else {
        path.clone()
    };

    let mut out = Path::with_capacity(work.len());
    for subpath in work.subpaths() {
        let start = subpath.first().and_then(PathCommand::end_point);
        let pieces = subpath.split_inclusive(|cmd| matches!(cmd, PathCommand::Close));
        for (i, piece) in pieces.enumerate() {
            // Drawing on after a Close restarts from the subpath start
            let restart = start.filter(|_| {
                i > 0
                    && !matches!(piece.first(), Some(PathCommand::MoveTo(_)))
                    && piece.iter().any(|cmd| cmd.end_point().is_some())
            });
            simplify_run(piece, restart, tolerance, &mut out);
        }
    }

    log::trace!("Simplified {} commands to {}", work.len(), out.len());
    out
}

fn simplify_run(commands: &[PathCommand], restart: Option<Point>, tolerance: f64, out: &mut Path) {
    let points: Vec<Point> = restart
        .into_iter()
        .chain(commands.iter().filter_map(PathCommand::end_point))
        .collect();
    if points.len() < 3 {
        if let Some(p) = restart {
            out.move_to(p);
        }
        out.extend(commands.iter().copied());
        return;
    }

    let keys = keypoint_indices(&points, tolerance);
    out.move_to(points[keys[0]]);
    for pair in keys.windows(2) {
        let run = &points[pair[0]..=pair[1]];
        let end = run[run.len() - 1];
        if run.len() <= 2 {
            out.line_to(end);
        } else {
            let (c1, c2) = fit_cubic(run);
            out.curve_to(c1, c2, end);
        }
    }
    if matches!(commands.last(), Some(PathCommand::Close)) {
        out.close();
    }
}

/// Douglas-Peucker keypoints, sorted, always including both ends
pub fn keypoint_indices(points: &[Point], tolerance: f64) -> Vec<usize> {
    let last = points.len().saturating_sub(1);
    let mut keep = vec![false; points.len()];
    if let Some(first) = keep.first_mut() {
        *first = true;
    }
    if let Some(end) = keep.last_mut() {
        *end = true;
    }

    // Explicit stack instead of recursion so long strokes cannot overflow
    let mut ranges = vec![(0, last)];
    while let Some((lo, hi)) = ranges.pop() {
        if hi <= lo + 1 {
            continue;
        }
        let (a, b) = (points[lo], points[hi]);
        let mut dmax = 0.0;
        let mut index = lo;
        for (i, &p) in points.iter().enumerate().take(hi).skip(lo + 1) {
            let d = perpendicular_distance(p, a, b);
            if d > dmax {
                dmax = d;
                index = i;
            }
        }
        if dmax > tolerance {
            keep[index] = true;
            ranges.push((lo, index));
            ranges.push((index, hi));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| k.then_some(i))
        .collect()
}

/// Distance from `p` to the line through `a` and `b`
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let d = b - a;
    let len = d.hypot();
    if len < MIN_CHORD_LENGTH {
        return p.distance(a);
    }
    (d.y * p.x - d.x * p.y + b.x * a.y - b.y * a.x).abs() / len
}

/// Least-squares cubic through `points` with both ends pinned
///
/// Parameters follow cumulative chord length. Returns the two control points.
pub fn fit_cubic(points: &[Point]) -> (Point, Point) {
    let (Some(&p0), Some(&p3)) = (points.first(), points.last()) else {
        return (Point::ORIGIN, Point::ORIGIN);
    };

    let mut params = Vec::with_capacity(points.len());
    let mut total = 0.0;
    params.push(0.0);
    for pair in points.windows(2) {
        total += pair[0].distance(pair[1]);
        params.push(total);
    }
    if total < FIT_EPSILON {
        return (p0, p3);
    }

    let (mut c11, mut c12, mut c22) = (0.0, 0.0, 0.0);
    let (mut a1x, mut a1y, mut a2x, mut a2y) = (0.0, 0.0, 0.0, 0.0);
    let interior = points.len().saturating_sub(1);
    for (p, &len) in points.iter().zip(&params).take(interior).skip(1) {
        let t = len / total;
        let u = 1.0 - t;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let rx = p.x - u * u * u * p0.x - t * t * t * p3.x;
        let ry = p.y - u * u * u * p0.y - t * t * t * p3.y;
        c11 += b1 * b1;
        c12 += b1 * b2;
        c22 += b2 * b2;
        a1x += b1 * rx;
        a1y += b1 * ry;
        a2x += b2 * rx;
        a2y += b2 * ry;
    }

    let det = c11 * c22 - c12 * c12;
    if det.abs() < FIT_EPSILON {
        return (p0.lerp(p3, 1.0 / 3.0), p0.lerp(p3, 2.0 / 3.0));
    }

    (
        Point::new((c22 * a1x - c12 * a2x) / det, (c22 * a1y - c12 * a2y) / det),
        Point::new((c11 * a2x - c12 * a1x) / det, (c11 * a2y - c12 * a1y) / det),
    )
}

/// Pipeline stage wrapping [`simplify`]
#[derive(Debug, Clone, Copy)]
pub struct Simplify {
    pub tolerance: f64,
}

impl PathStage for Simplify {
    fn name(&self) -> &'static str {
        "simplify"
    }

    fn apply(&self, path: &Path, _seed: Seed) -> Path {
        simplify(path, self.tolerance)
    }
}
