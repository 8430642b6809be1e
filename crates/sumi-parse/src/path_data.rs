//! SVG-style path data → absolute [`Path`]
//!
//! Supports `M L H V C S Q T Z` in absolute and relative form, implicit
//! operator repetition, and smooth-curve reflection. Anything the parser
//! does not understand is skipped; a glyph with bad data draws less, it
//! never aborts the render.

use crate::tokenizer::{Token, Tokenizer};
use std::iter::Peekable;
use sumi_core::{Path, PathCommand, Point};

/// Parse path data into absolute commands
///
/// ```
/// use sumi_parse::parse_path_data;
///
/// let path = parse_path_data("M10 10 h5 v5 z");
/// assert_eq!(path.to_string(), "M10 10 L15 10 L15 15 Z");
/// ```
pub fn parse_path_data(d: &str) -> Path {
    PathDataParser::new(d).run()
}

struct PathDataParser<'a> {
    tokens: Peekable<Tokenizer<'a>>,
    path: Path,
    current: Point,
    subpath_start: Point,
    // Set by Z until the next command; drawing then restarts at subpath_start
    closed: bool,
    // Second control point of the previous cubic, if the previous command was one
    last_cubic_ctrl: Option<Point>,
    // Control point of the previous quadratic, if the previous command was one
    last_quad_ctrl: Option<Point>,
}

impl<'a> PathDataParser<'a> {
    fn new(d: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(d).peekable(),
            path: Path::new(),
            current: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            closed: false,
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }

    fn run(mut self) -> Path {
        while let Some(token) = self.tokens.next() {
            match token {
                Token::Command(op) => self.command(op),
                Token::Number(value) => {
                    log::trace!("Skipping number {value} with no operator");
                },
            }
        }
        self.path
    }

    fn command(&mut self, op: char) {
        let arity = match op.to_ascii_uppercase() {
            'Z' => {
                self.close();
                return;
            },
            'H' | 'V' => 1,
            'M' | 'L' | 'T' => 2,
            'S' | 'Q' => 4,
            'C' => 6,
            _ => {
                let mut skipped = 0;
                while matches!(self.tokens.peek(), Some(Token::Number(_))) {
                    self.tokens.next();
                    skipped += 1;
                }
                log::debug!("Skipping unsupported path operator '{op}' and {skipped} operands");
                return;
            },
        };

        // Extra operand groups repeat the operator; after a move they draw lines
        let mut op = op;
        while let Some(args) = self.operands(op, arity) {
            self.apply(op, &args);
            op = match op {
                'M' => 'L',
                'm' => 'l',
                other => other,
            };
        }
    }

    /// Read one operand group, or None when the next token is not a number
    fn operands(&mut self, op: char, arity: usize) -> Option<[f64; 6]> {
        if !matches!(self.tokens.peek(), Some(Token::Number(_))) {
            return None;
        }
        let mut args = [0.0; 6];
        for (read, slot) in args.iter_mut().take(arity).enumerate() {
            match self.tokens.peek() {
                Some(&Token::Number(value)) => {
                    *slot = value;
                    self.tokens.next();
                },
                _ => {
                    log::debug!(
                        "Dropping truncated '{op}' operands: got {read} of {arity} numbers"
                    );
                    return None;
                },
            }
        }
        Some(args)
    }

    fn apply(&mut self, op: char, a: &[f64; 6]) {
        let origin = if op.is_ascii_lowercase() {
            self.current
        } else {
            Point::ORIGIN
        };
        let at = |x: f64, y: f64| Point::new(origin.x + x, origin.y + y);

        // Drawing straight after Z opens a new subpath at the closed one's start
        if std::mem::take(&mut self.closed) && !op.eq_ignore_ascii_case(&'m') {
            self.path.push(PathCommand::MoveTo(self.subpath_start));
        }

        let command = match op.to_ascii_uppercase() {
            'M' => {
                let p = at(a[0], a[1]);
                self.subpath_start = p;
                PathCommand::MoveTo(p)
            },
            'L' => PathCommand::LineTo(at(a[0], a[1])),
            'H' => PathCommand::LineTo(Point::new(origin.x + a[0], self.current.y)),
            'V' => PathCommand::LineTo(Point::new(self.current.x, origin.y + a[0])),
            'C' => PathCommand::CubicTo(at(a[0], a[1]), at(a[2], a[3]), at(a[4], a[5])),
            'S' => {
                let c1 = self.reflect(self.last_cubic_ctrl);
                PathCommand::CubicTo(c1, at(a[0], a[1]), at(a[2], a[3]))
            },
            'Q' => PathCommand::QuadTo(at(a[0], a[1]), at(a[2], a[3])),
            'T' => {
                let c = self.reflect(self.last_quad_ctrl);
                PathCommand::QuadTo(c, at(a[0], a[1]))
            },
            _ => return,
        };

        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
        match command {
            PathCommand::CubicTo(_, c2, _) => self.last_cubic_ctrl = Some(c2),
            PathCommand::QuadTo(c, _) => self.last_quad_ctrl = Some(c),
            _ => {},
        }
        if let Some(p) = command.end_point() {
            self.current = p;
        }
        self.path.push(command);
    }

    /// Mirror the previous control point through the current point
    ///
    /// Without a matching previous curve the control sits on the current point.
    fn reflect(&self, previous: Option<Point>) -> Point {
        match previous {
            Some(c) => Point::new(2.0 * self.current.x - c.x, 2.0 * self.current.y - c.y),
            None => self.current,
        }
    }

    fn close(&mut self) {
        self.path.push(PathCommand::Close);
        self.current = self.subpath_start;
        self.closed = true;
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }
}
