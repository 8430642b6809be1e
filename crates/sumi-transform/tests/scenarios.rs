//! End-to-end stage scenarios on parsed glyph strokes

use sumi_core::{Path, PathCommand, Point, Seed, StyleParameters};
use sumi_parse::parse_path_data;
use sumi_transform::{apply_transforms, cubic_point, flatten, round_corners, simplify};

fn quads(path: &Path) -> Vec<(Point, Point)> {
    path.iter()
        .filter_map(|c| match *c {
            PathCommand::QuadTo(c, p) => Some((c, p)),
            _ => None,
        })
        .collect()
}

/// Distance from `p` to the closest point of a polyline
fn distance_to_polyline(p: Point, polyline: &[Point]) -> f64 {
    polyline
        .windows(2)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            let ab = b - a;
            let len2 = ab.hypot2();
            let t = if len2 == 0.0 {
                0.0
            } else {
                ((p - a).dot(ab) / len2).clamp(0.0, 1.0)
            };
            p.distance(a + ab * t)
        })
        .fold(f64::INFINITY, f64::min)
}

fn vertices(path: &Path) -> Vec<Point> {
    path.iter().filter_map(PathCommand::end_point).collect()
}

#[test]
fn test_square_with_radius_two_gets_four_fillets() {
    let square = parse_path_data("M0 0 L10 0 L10 10 L0 10 Z");
    let params = StyleParameters {
        corner_radius: 2.0,
        ..StyleParameters::default()
    };
    let rounded = apply_transforms(&square, &params, Seed::default());

    let fillets = quads(&rounded);
    assert_eq!(fillets.len(), 4);
    let corners = [
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(0.0, 0.0),
    ];
    for ((control, end), corner) in fillets.iter().zip(corners) {
        assert_eq!(*control, corner);
        assert!((end.distance(corner) - 2.0).abs() < 1e-12);
    }
    assert_eq!(rounded.commands().last(), Some(&PathCommand::Close));
}

#[test]
fn test_corner_radius_is_capped_at_forty_percent() {
    let path = parse_path_data("M0 0 L4 0 L4 10");
    let rounded = round_corners(&path, 100.0);
    let PathCommand::LineTo(cut_in) = rounded.commands()[1] else {
        panic!("expected the cut-in line, got {rounded}");
    };
    let fillets = quads(&rounded);
    let [(vertex, cut_out)] = fillets.as_slice() else {
        panic!("expected one fillet, got {rounded}");
    };
    assert!((cut_in.distance(*vertex) - 1.6).abs() < 1e-12);
    assert!((cut_out.distance(*vertex) - 1.6).abs() < 1e-12);
}

#[test]
fn test_simplified_arc_stays_within_twice_tolerance() {
    let tolerance = 0.5;
    let mut arc = Path::new();
    for i in 0..=180 {
        let angle = f64::from(i).to_radians();
        let p = Point::new(50.0 + 40.0 * angle.cos(), 50.0 - 40.0 * angle.sin());
        if i == 0 {
            arc.move_to(p);
        } else {
            arc.line_to(p);
        }
    }

    let simplified = simplify(&arc, tolerance);
    assert!(simplified.len() < arc.len() / 4, "{} commands left", simplified.len());

    let refit = vertices(&flatten(&simplified, 200));
    for p in vertices(&arc) {
        let d = distance_to_polyline(p, &refit);
        assert!(d <= 2.0 * tolerance, "point {p:?} is {d} away");
    }
}

#[test]
fn test_flattening_error_tends_to_zero() {
    let (p0, c1, c2, p1) = (
        Point::new(10.0, 90.0),
        Point::new(10.0, 10.0),
        Point::new(90.0, 10.0),
        Point::new(90.0, 90.0),
    );
    let dense: Vec<Point> = (0..=2000)
        .map(|i| cubic_point(p0, c1, c2, p1, f64::from(i) / 2000.0))
        .collect();
    let mut curve = Path::new();
    curve.move_to(p0);
    curve.curve_to(c1, c2, p1);

    let error = |n| {
        let flat = vertices(&flatten(&curve, n));
        dense
            .iter()
            .map(|&p| distance_to_polyline(p, &flat))
            .fold(0.0, f64::max)
    };
    let errors: Vec<f64> = [1, 4, 16, 64].into_iter().map(error).collect();
    for pair in errors.windows(2) {
        assert!(pair[1] <= pair[0], "{errors:?}");
    }
    assert!(errors[3] < 0.05, "{errors:?}");
}

#[test]
fn test_full_chain_on_a_glyph_stroke_is_reproducible() {
    let stroke = parse_path_data("M20 20 Q50 10 80 20 L80 80 C60 90 40 90 20 80 Z");
    let params = StyleParameters {
        add_points: 1,
        simplify_tolerance: 0.8,
        corner_radius: 4.0,
        twist_amount: 3.0,
        roughen_amount: 2.0,
        ..StyleParameters::default()
    };
    let seed = Seed::for_position('口', 0, 0);
    let a = apply_transforms(&stroke, &params, seed);
    let b = apply_transforms(&stroke, &params, seed);
    assert_eq!(a, b);
    assert!(!a.is_empty());
    assert_ne!(a, apply_transforms(&stroke, &params, Seed::for_position('口', 1, 0)));
}
