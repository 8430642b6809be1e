//! Seeded distortions: twist and roughen
//!
//! Both stages draw offsets from the same sine hash, indexed by a counter
//! that advances once per displaced coordinate. The same seed, amount and
//! input therefore always give the same output, bit for bit.

use kurbo::Vec2;
use sumi_core::{params::is_enabled, Path, PathCommand, PathStage, Point, Seed};

/// Target length of one roughened piece of a straight segment
const ROUGHEN_STEP: f64 = 8.0;
/// Curve endpoints move this much less than their controls
const ROUGHEN_ENDPOINT_SHARE: f64 = 0.3;

/// Deterministic pseudo-random offset in `[-0.5, 0.5)`
pub fn jitter(seed: Seed, index: u64) -> f64 {
    let x = (seed.value() as f64 + index as f64 * 127.1 + 311.7).sin() * 43758.5453;
    x - x.floor() - 0.5
}

/// Successive jitter draws for one seed
#[derive(Debug, Clone)]
pub struct JitterStream {
    seed: Seed,
    index: u64,
}

impl JitterStream {
    pub fn new(seed: Seed) -> Self {
        Self { seed, index: 0 }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> u64 {
        self.index
    }

    pub fn next_offset(&mut self, amount: f64) -> f64 {
        let value = jitter(self.seed, self.index) * amount;
        self.index += 1;
        value
    }

    /// Displace a point, x first
    pub fn displace(&mut self, p: Point, amount: f64) -> Point {
        let dx = self.next_offset(amount);
        let dy = self.next_offset(amount);
        p + Vec2::new(dx, dy)
    }

    /// Displace a point by a share of the amount, x first
    pub fn displace_scaled(&mut self, p: Point, amount: f64, share: f64) -> Point {
        let dx = self.next_offset(amount) * share;
        let dy = self.next_offset(amount) * share;
        p + Vec2::new(dx, dy)
    }
}

/// Nudge every drawn point by up to `amount / 2` on each axis
///
/// Draw order per command is the endpoint, then the first control, then the
/// second. Moves and closes stay put. A non-positive amount is identity.
pub fn twist(path: &Path, amount: f64, seed: Seed) -> Path {
    if !is_enabled(amount) {
        return path.clone();
    }

    let mut jitter = JitterStream::new(seed);
    path.iter()
        .map(|command| match *command {
            PathCommand::LineTo(p) => PathCommand::LineTo(jitter.displace(p, amount)),
            PathCommand::QuadTo(c, p) => {
                let p = jitter.displace(p, amount);
                let c = jitter.displace(c, amount);
                PathCommand::QuadTo(c, p)
            },
            PathCommand::CubicTo(c1, c2, p) => {
                let p = jitter.displace(p, amount);
                let c1 = jitter.displace(c1, amount);
                let c2 = jitter.displace(c2, amount);
                PathCommand::CubicTo(c1, c2, p)
            },
            other => other,
        })
        .collect()
}

/// Break straight segments into jagged pieces and shake curve controls
///
/// A line becomes `max(2, round(len / 8))` pieces whose inner points are
/// displaced; its end stays exact. Curve controls move by the full amount
/// and their endpoint by 0.3 of it. A non-positive amount is identity.
pub fn roughen(path: &Path, amount: f64, seed: Seed) -> Path {
    if !is_enabled(amount) {
        return path.clone();
    }

    let mut jitter = JitterStream::new(seed);
    let mut out = Path::with_capacity(path.len() * 2);
    for segment in path.segments() {
        let from = segment.from;
        match segment.command {
            PathCommand::LineTo(p) => {
                let delta = p - from;
                let pieces = ((delta.hypot() / ROUGHEN_STEP).round() as u32).max(2);
                for i in 1..pieces {
                    let along = from + delta * (f64::from(i) / f64::from(pieces));
                    out.line_to(jitter.displace(along, amount));
                }
                out.line_to(p);
            },
            PathCommand::CubicTo(c1, c2, p) => {
                let c1 = jitter.displace(c1, amount);
                let c2 = jitter.displace(c2, amount);
                let p = jitter.displace_scaled(p, amount, ROUGHEN_ENDPOINT_SHARE);
                out.curve_to(c1, c2, p);
            },
            PathCommand::QuadTo(c, p) => {
                let c = jitter.displace(c, amount);
                let p = jitter.displace_scaled(p, amount, ROUGHEN_ENDPOINT_SHARE);
                out.quad_to(c, p);
            },
            other => out.push(other),
        }
    }
    out
}

/// Pipeline stage wrapping [`twist`]
#[derive(Debug, Clone, Copy)]
pub struct Twist {
    pub amount: f64,
}

impl PathStage for Twist {
    fn name(&self) -> &'static str {
        "twist"
    }

    fn apply(&self, path: &Path, seed: Seed) -> Path {
        twist(path, self.amount, seed)
    }
}

/// Pipeline stage wrapping [`roughen`]
#[derive(Debug, Clone, Copy)]
pub struct Roughen {
    pub amount: f64,
}

impl PathStage for Roughen {
    fn name(&self) -> &'static str {
        "roughen"
    }

    fn apply(&self, path: &Path, seed: Seed) -> Path {
        roughen(path, self.amount, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke() -> Path {
        let mut path = Path::new();
        path.move_to((10.0, 10.0));
        path.line_to((90.0, 10.0));
        path.quad_to((95.0, 50.0), (50.0, 90.0));
        path.curve_to((30.0, 95.0), (10.0, 80.0), (10.0, 60.0));
        path.close();
        path
    }

    #[test]
    fn test_jitter_matches_sine_hash() {
        let expected = {
            let x = (42.0_f64 + 3.0 * 127.1 + 311.7).sin() * 43758.5453;
            x - x.floor() - 0.5
        };
        assert_eq!(jitter(Seed::new(42), 3), expected);
    }

    #[test]
    fn test_jitter_range() {
        for k in 0..2000 {
            let j = jitter(Seed::new(7919 * 65 + 173), k);
            assert!((-0.5..0.5).contains(&j), "draw {k} gave {j}");
        }
    }

    #[test]
    fn test_twist_draw_order_is_end_then_controls() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.curve_to((1.0, 1.0), (2.0, 2.0), (3.0, 3.0));
        let seed = Seed::new(5);
        let out = twist(&path, 10.0, seed);

        let offset = |k| jitter(seed, k) * 10.0;
        let PathCommand::CubicTo(c1, c2, p) = out.commands()[1] else {
            panic!("expected a cubic");
        };
        assert_eq!(p, Point::new(3.0 + offset(0), 3.0 + offset(1)));
        assert_eq!(c1, Point::new(1.0 + offset(2), 1.0 + offset(3)));
        assert_eq!(c2, Point::new(2.0 + offset(4), 2.0 + offset(5)));
    }

    #[test]
    fn test_twist_keeps_moves_and_structure() {
        let path = stroke();
        let out = twist(&path, 12.0, Seed::new(99));
        assert_eq!(out.len(), path.len());
        assert_eq!(out.commands()[0], path.commands()[0]);
        assert_eq!(out.commands()[4], PathCommand::Close);
        for (a, b) in path.iter().zip(out.iter()) {
            if let (Some(pa), Some(pb)) = (a.end_point(), b.end_point()) {
                assert!((pa.x - pb.x).abs() <= 6.0 && (pa.y - pb.y).abs() <= 6.0);
            }
        }
    }

    #[test]
    fn test_roughen_splits_lines_and_keeps_end() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((80.0, 0.0));
        let out = roughen(&path, 4.0, Seed::new(1));
        // 80 / 8 = 10 pieces
        assert_eq!(out.len(), 1 + 10);
        assert_eq!(out.commands()[10], PathCommand::LineTo(Point::new(80.0, 0.0)));
        let first = out.commands()[1].end_point().unwrap();
        assert_eq!(
            first,
            Point::new(8.0 + jitter(Seed::new(1), 0) * 4.0, jitter(Seed::new(1), 1) * 4.0)
        );
    }

    #[test]
    fn test_roughen_short_line_still_gets_two_pieces() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((3.0, 0.0));
        assert_eq!(roughen(&path, 1.0, Seed::new(3)).len(), 3);
    }

    #[test]
    fn test_roughen_moves_curve_end_less() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.quad_to((5.0, 5.0), (10.0, 0.0));
        let seed = Seed::new(11);
        let out = roughen(&path, 10.0, seed);
        assert_eq!(
            out.commands()[1],
            PathCommand::QuadTo(
                Point::new(5.0 + jitter(seed, 0) * 10.0, 5.0 + jitter(seed, 1) * 10.0),
                Point::new(
                    10.0 + jitter(seed, 2) * 10.0 * 0.3,
                    jitter(seed, 3) * 10.0 * 0.3
                ),
            )
        );
    }

    #[test]
    fn test_counter_is_shared_across_the_path() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((16.0, 0.0));
        path.quad_to((20.0, 4.0), (24.0, 0.0));
        let seed = Seed::new(2);
        let out = roughen(&path, 2.0, seed);
        // The line used draws 0 and 1, so the quad control starts at 2
        let PathCommand::QuadTo(c, _) = out.commands()[3] else {
            panic!("expected a quad");
        };
        assert_eq!(c.x, 20.0 + jitter(seed, 2) * 2.0);
    }

    #[test]
    fn test_distortions_are_deterministic() {
        let path = stroke();
        let seed = Seed::for_position('永', 3, 1);
        assert_eq!(twist(&path, 20.0, seed), twist(&path, 20.0, seed));
        assert_eq!(roughen(&path, 5.0, seed), roughen(&path, 5.0, seed));
        assert_ne!(twist(&path, 20.0, seed), twist(&path, 20.0, Seed::new(1)));
    }

    #[test]
    fn test_zero_amount_is_identity() {
        let path = stroke();
        assert_eq!(twist(&path, 0.0, Seed::new(4)), path);
        assert_eq!(roughen(&path, 0.0, Seed::new(4)), path);
        assert_eq!(roughen(&path, -2.0, Seed::new(4)), path);
    }
}
