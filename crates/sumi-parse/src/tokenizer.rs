//! Path data tokenizer
//!
//! Splits a `d` string into operator letters and numbers. Separators are
//! whitespace and commas; anything else that is neither a letter nor the
//! start of a number is dropped byte by byte.

/// One lexical unit of path data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

/// Iterator over the tokens of a path data string
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(d: &'a str) -> Self {
        Self {
            data: d.as_bytes(),
            pos: 0,
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Scan a number starting at the current position
    ///
    /// `1.5.5` yields `1.5` and leaves `.5` for the next call, and `2e` stops
    /// before the dangling exponent marker.
    fn scan_number(&mut self) -> Option<f64> {
        let start = self.pos;
        if matches!(self.peek_byte(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = self.skip_digits();
        if self.peek_byte() == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            self.pos = start;
            return None;
        }

        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                self.pos = mark;
            }
        }

        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let b = self.peek_byte()?;
            match b {
                b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b',' => self.pos += 1,
                b if b.is_ascii_alphabetic() => {
                    self.pos += 1;
                    return Some(Token::Command(b as char));
                },
                b'0'..=b'9' | b'+' | b'-' | b'.' => match self.scan_number() {
                    Some(value) => return Some(Token::Number(value)),
                    None => {
                        log::trace!("Skipping stray '{}' in path data", b as char);
                        self.pos += 1;
                    },
                },
                _ => {
                    log::trace!("Skipping unexpected byte 0x{b:02x} in path data");
                    self.pos += 1;
                },
            }
        }
    }
}
