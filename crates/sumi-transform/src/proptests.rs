use super::*;
use proptest::prelude::*;
use sumi_core::{Path, PathCommand, Point, Seed};

fn point() -> impl Strategy<Value = Point> {
    (-100.0..200.0f64, -100.0..200.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn drawing_command() -> impl Strategy<Value = PathCommand> {
    prop_oneof![
        point().prop_map(PathCommand::LineTo),
        (point(), point()).prop_map(|(c, p)| PathCommand::QuadTo(c, p)),
        (point(), point(), point()).prop_map(|(c1, c2, p)| PathCommand::CubicTo(c1, c2, p)),
    ]
}

fn stroke_path() -> impl Strategy<Value = Path> {
    (point(), prop::collection::vec(drawing_command(), 1..12), any::<bool>()).prop_map(
        |(start, rest, closed)| {
            let mut path = Path::new();
            path.move_to(start);
            path.extend(rest);
            if closed {
                path.close();
            }
            path
        },
    )
}

/// Evaluate every drawing command at `n` evenly spaced parameters
fn sample(path: &Path, n: u32) -> Vec<Point> {
    let mut points = Vec::new();
    for segment in path.segments() {
        let from = segment.from;
        for i in 1..=n {
            let t = f64::from(i) / f64::from(n);
            match segment.command {
                PathCommand::LineTo(p) => points.push(from.lerp(p, t)),
                PathCommand::QuadTo(c, p) => points.push(quad_point(from, c, p, t)),
                PathCommand::CubicTo(c1, c2, p) => points.push(cubic_point(from, c1, c2, p, t)),
                _ => {},
            }
        }
    }
    points
}

/// Largest gap between a quadratic and its flattening, measured at matching parameters
fn quad_flatten_error(p0: Point, c: Point, p1: Point, n: u32) -> f64 {
    let mut curve = Path::new();
    curve.move_to(p0);
    curve.quad_to(c, p1);
    let flat = flatten(&curve, n);
    let vertices: Vec<Point> = flat.iter().filter_map(PathCommand::end_point).collect();

    // Probe at the midpoint of every piece, where the deviation peaks
    (0..n as usize)
        .map(|i| {
            let mid_t = (i as f64 + 0.5) / f64::from(n);
            let on_curve = quad_point(p0, c, p1, mid_t);
            let on_line = vertices[i].midpoint(vertices[i + 1]);
            on_curve.distance(on_line)
        })
        .fold(0.0, f64::max)
}

// Property: k subdivision passes keep the shape, sampled at matching parameters
proptest! {
    #[test]
    fn prop_subdivision_preserves_shape(path in stroke_path(), k in 1u32..4, n in 1u32..6) {
        let original = sample(&path, n << k);
        let split = sample(&subdivide(&path, k), n);
        prop_assert_eq!(original.len(), split.len());
        for (a, b) in original.iter().zip(&split) {
            prop_assert!(a.distance(*b) < 1e-6, "k={} {:?} vs {:?}", k, a, b);
        }
    }
}

// Property: doubling the flattening resolution never increases the error
proptest! {
    #[test]
    fn prop_flatten_error_shrinks(p0 in point(), c in point(), p1 in point(), n in 1u32..32) {
        let coarse = quad_flatten_error(p0, c, p1, n);
        let fine = quad_flatten_error(p0, c, p1, 2 * n);
        prop_assert!(fine <= coarse + 1e-9, "n={} coarse={} fine={}", n, coarse, fine);
    }
}

// Property: flattening keeps every move, close and line, and every curve end
proptest! {
    #[test]
    fn prop_flatten_lands_on_curve_ends(path in stroke_path(), n in 1u32..16) {
        let flat = flatten(&path, n);
        prop_assert!(!flat.has_curves());
        prop_assert_eq!(flat.commands().last().copied().and_then(|c| c.end_point()),
            path.commands().last().copied().and_then(|c| c.end_point()));
    }
}

// Property: seeded stages reproduce themselves exactly
proptest! {
    #[test]
    fn prop_distortion_is_deterministic(
        path in stroke_path(),
        seed in any::<i32>(),
        amount in 0.1..50.0f64,
    ) {
        let seed = Seed::new(i64::from(seed));
        prop_assert_eq!(twist(&path, amount, seed), twist(&path, amount, seed));
        prop_assert_eq!(roughen(&path, amount, seed), roughen(&path, amount, seed));
    }
}

// Property: twist displacement is bounded by half the amount on each axis
proptest! {
    #[test]
    fn prop_twist_is_bounded(path in stroke_path(), seed in any::<i32>(), amount in 0.1..80.0f64) {
        let out = twist(&path, amount, Seed::new(i64::from(seed)));
        prop_assert_eq!(out.len(), path.len());
        for (a, b) in path.iter().zip(out.iter()) {
            if let (Some(pa), Some(pb)) = (a.end_point(), b.end_point()) {
                prop_assert!((pa.x - pb.x).abs() <= amount / 2.0 + 1e-9);
                prop_assert!((pa.y - pb.y).abs() <= amount / 2.0 + 1e-9);
            }
        }
    }
}

// Property: every stage is the identity when its amount is zero or negative
proptest! {
    #[test]
    fn prop_disabled_amount_is_identity(
        path in stroke_path(),
        amount in -10.0..=0.0f64,
        seed in any::<i32>(),
    ) {
        let seed = Seed::new(i64::from(seed));
        prop_assert_eq!(&twist(&path, amount, seed), &path);
        prop_assert_eq!(&roughen(&path, amount, seed), &path);
        prop_assert_eq!(&simplify(&path, amount), &path);
        prop_assert_eq!(&round_corners(&path, amount), &path);
        prop_assert_eq!(&subdivide(&path, 0), &path);
        prop_assert_eq!(&flatten(&path, 0), &path);
    }
}

// Property: a fillet never cuts more than 40% of either neighbouring segment
proptest! {
    #[test]
    fn prop_fillet_cut_is_capped(prev in point(), vertex in point(), next in point(), radius in 0.1..100.0f64) {
        if let Some(f) = corner_fillet(prev, vertex, next, radius) {
            prop_assert!(f.cut_in.distance(vertex) <= 0.4 * prev.distance(vertex) + 1e-9);
            prop_assert!(f.cut_out.distance(vertex) <= 0.4 * next.distance(vertex) + 1e-9);
            prop_assert!(f.cut_in.distance(vertex) <= radius + 1e-9);
        }
    }
}
