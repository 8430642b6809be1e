//! The normalized path model every stage speaks
//!
//! A [`Path`] is an ordered list of absolute drawing commands. Stages never
//! edit a path in place: they read one and build the next, so any
//! intermediate result can be shared freely between threads.

use kurbo::{Affine, BezPath, PathEl, Point};
use std::fmt;

/// One drawing operation in absolute glyph-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight segment to a point
    LineTo(Point),
    /// Quadratic Bezier: control, end
    QuadTo(Point, Point),
    /// Cubic Bezier: first control, second control, end
    CubicTo(Point, Point, Point),
    /// Back to the start of the current subpath
    Close,
}

impl PathCommand {
    /// Where the pen rests after this command, if the command names a point
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p)
            | PathCommand::LineTo(p)
            | PathCommand::QuadTo(_, p)
            | PathCommand::CubicTo(_, _, p) => Some(p),
            PathCommand::Close => None,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, PathCommand::QuadTo(..) | PathCommand::CubicTo(..))
    }

    /// SVG operator letter for this command
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::QuadTo(..) => 'Q',
            PathCommand::CubicTo(..) => 'C',
            PathCommand::Close => 'Z',
        }
    }

    /// Apply a point mapping to every coordinate of the command
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo(c, p) => PathCommand::QuadTo(f(c), f(p)),
            PathCommand::CubicTo(c1, c2, p) => PathCommand::CubicTo(f(c1), f(c2), f(p)),
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// An ordered sequence of [`PathCommand`]s, possibly holding several subpaths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::MoveTo(p.into()));
    }

    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::LineTo(p.into()));
    }

    pub fn quad_to(&mut self, c: impl Into<Point>, p: impl Into<Point>) {
        self.commands.push(PathCommand::QuadTo(c.into(), p.into()));
    }

    pub fn curve_to(&mut self, c1: impl Into<Point>, c2: impl Into<Point>, p: impl Into<Point>) {
        self.commands
            .push(PathCommand::CubicTo(c1.into(), c2.into(), p.into()));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Does any command bend?
    pub fn has_curves(&self) -> bool {
        self.commands.iter().any(PathCommand::is_curve)
    }

    /// Walk the commands together with the pen position before each one
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            inner: self.commands.iter(),
            current: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
        }
    }

    /// Split at every `MoveTo`, keeping each subpath's commands together
    pub fn subpaths(&self) -> Subpaths<'_> {
        Subpaths {
            rest: &self.commands,
        }
    }

    /// Map every coordinate through an affine transform
    pub fn apply_affine(&self, affine: Affine) -> Path {
        self.commands
            .iter()
            .map(|cmd| cmd.map_points(|p| affine * p))
            .collect()
    }

    /// Convert into kurbo's path type
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => path.move_to(p),
                PathCommand::LineTo(p) => path.line_to(p),
                PathCommand::QuadTo(c, p) => path.quad_to(c, p),
                PathCommand::CubicTo(c1, c2, p) => path.curve_to(c1, c2, p),
                PathCommand::Close => path.close_path(),
            }
        }
        path
    }
}

impl From<&BezPath> for Path {
    fn from(path: &BezPath) -> Self {
        path.elements()
            .iter()
            .map(|el| match *el {
                PathEl::MoveTo(p) => PathCommand::MoveTo(p),
                PathEl::LineTo(p) => PathCommand::LineTo(p),
                PathEl::QuadTo(c, p) => PathCommand::QuadTo(c, p),
                PathEl::CurveTo(c1, c2, p) => PathCommand::CubicTo(c1, c2, p),
                PathEl::ClosePath => PathCommand::Close,
            })
            .collect()
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathCommand> for Path {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Absolute SVG path data, e.g. `M0 0 L10 0 Z`
///
/// Coordinates use Rust's shortest round-trip float formatting, so parsing
/// the output reproduces the same points bit for bit.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command.letter())?;
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => write_point(f, p)?,
                PathCommand::QuadTo(c, p) => {
                    write_point(f, c)?;
                    f.write_str(" ")?;
                    write_point(f, p)?;
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    write_point(f, c1)?;
                    f.write_str(" ")?;
                    write_point(f, c2)?;
                    f.write_str(" ")?;
                    write_point(f, p)?;
                }
                PathCommand::Close => {}
            }
        }
        Ok(())
    }
}

fn write_point(f: &mut fmt::Formatter<'_>, p: Point) -> fmt::Result {
    write!(f, "{} {}", p.x, p.y)
}

/// A command paired with the pen position it starts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub command: PathCommand,
}

/// Iterator returned by [`Path::segments`]
///
/// The pen starts at the origin, follows every end point, and returns to the
/// subpath start after `Close`.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: std::slice::Iter<'a, PathCommand>,
    current: Point,
    subpath_start: Point,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let command = *self.inner.next()?;
        let from = self.current;
        match command {
            PathCommand::MoveTo(p) => {
                self.subpath_start = p;
                self.current = p;
            }
            PathCommand::Close => self.current = self.subpath_start,
            PathCommand::LineTo(p) | PathCommand::QuadTo(_, p) | PathCommand::CubicTo(_, _, p) => {
                self.current = p;
            }
        }
        Some(Segment { from, command })
    }
}

/// Iterator returned by [`Path::subpaths`]
#[derive(Debug, Clone)]
pub struct Subpaths<'a> {
    rest: &'a [PathCommand],
}

impl<'a> Iterator for Subpaths<'a> {
    type Item = &'a [PathCommand];

    fn next(&mut self) -> Option<&'a [PathCommand]> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .iter()
            .skip(1)
            .position(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
            .map_or(self.rest.len(), |i| i + 1);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_strokes() -> Path {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.close();
        path.move_to((20.0, 0.0));
        path.quad_to((25.0, 5.0), (30.0, 0.0));
        path
    }

    #[test]
    fn test_display_writes_absolute_commands() {
        let path = two_strokes();
        assert_eq!(path.to_string(), "M0 0 L10 0 L10 10 Z M20 0 Q25 5 30 0");
    }

    #[test]
    fn test_display_keeps_fractional_precision() {
        let mut path = Path::new();
        path.move_to((0.1, -2.5e-7));
        assert_eq!(path.to_string(), "M0.1 -0.00000025");
    }

    #[test]
    fn test_segments_track_pen_through_close() {
        let path = two_strokes();
        let froms: Vec<Point> = path.segments().map(|s| s.from).collect();
        assert_eq!(froms[0], Point::ORIGIN);
        assert_eq!(froms[2], Point::new(10.0, 0.0));
        // Close returns to the subpath start, so the next MoveTo starts there
        assert_eq!(froms[4], Point::new(0.0, 0.0));
        assert_eq!(froms[5], Point::new(20.0, 0.0));
    }

    #[test]
    fn test_subpaths_split_at_move() {
        let path = two_strokes();
        let subs: Vec<&[PathCommand]> = path.subpaths().collect();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].len(), 4);
        assert_eq!(subs[1].len(), 2);
    }

    #[test]
    fn test_subpaths_without_leading_move() {
        let path = Path::from_commands(vec![
            PathCommand::LineTo(Point::new(1.0, 1.0)),
            PathCommand::MoveTo(Point::new(2.0, 2.0)),
        ]);
        assert_eq!(path.subpaths().count(), 2);
        assert_eq!(Path::new().subpaths().count(), 0);
    }

    #[test]
    fn test_bez_path_conversion_round_trips() {
        let path = two_strokes();
        let bez = path.to_bez_path();
        assert_eq!(bez.elements().len(), path.len());
        assert_eq!(Path::from(&bez), path);
    }

    #[test]
    fn test_apply_affine_maps_controls_too() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.curve_to((2.0, 2.0), (3.0, 3.0), (4.0, 4.0));
        let scaled = path.apply_affine(Affine::scale(2.0));
        assert_eq!(
            scaled.commands()[1],
            PathCommand::CubicTo(
                Point::new(4.0, 4.0),
                Point::new(6.0, 6.0),
                Point::new(8.0, 8.0)
            )
        );
    }
}
