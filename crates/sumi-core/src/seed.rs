//! Per-instance seeds for the stochastic stages

use serde::{Deserialize, Serialize};

/// Seed for one glyph instance
///
/// Derived from the character and where it sits in the text, so a repeated
/// character gets a different distortion at each position while a re-render
/// of the same text reproduces every stroke exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(i64);

impl Seed {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Seed for `ch` at `column` within text line `line`
    pub fn for_position(ch: char, column: usize, line: usize) -> Self {
        Self(
            i64::from(u32::from(ch))
                .wrapping_mul(7919)
                .wrapping_add((column as i64).wrapping_mul(173))
                .wrapping_add((line as i64).wrapping_mul(59)),
        )
    }

    /// Seed for the `index`-th stroke primitive of a glyph
    pub fn for_primitive(self, index: usize) -> Self {
        Self(self.0.wrapping_add((index as i64).wrapping_mul(311)))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
