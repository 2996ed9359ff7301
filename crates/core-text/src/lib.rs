//! Line-oriented text model.
//!
//! A [`Text`] owns an ordered, never-empty sequence of [`Line`] values, each a
//! growable vector of Unicode code points. Every column offset in this crate is
//! a code point index (no grapheme clustering); every row offset is a line index.
//!
//! Invariants:
//! * `Text::line_count() >= 1` at all times.
//! * Mutating operations set the dirty bit; readers and `serialize` never do.
//! * Out-of-range offsets are reported as [`TextError::OutOfBounds`], never
//!   clamped and never panicked on.

pub mod error;
pub mod line;
pub mod text;

pub use error::{Axis, TextError};
pub use line::Line;
pub use text::{LineEnding, Text};

/// A position inside a text expressed as (column, row) code point offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn origin() -> Self {
        Self { column: 0, row: 0 }
    }

    /// Clamp into the given text so the position is a valid insert location.
    pub fn clamp_to(&mut self, text: &Text) {
        let last = text.line_count() - 1;
        if self.row > last {
            self.row = last;
        }
        let max_len = text.line_length(self.row).unwrap_or(0);
        if self.column > max_len {
            self.column = max_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_position_back_into_text() {
        let text = Text::load("abc\nde", false);
        let mut pos = Position::new(10, 7);
        pos.clamp_to(&text);
        assert_eq!(pos, Position::new(2, 1));

        let mut inside = Position::new(1, 0);
        inside.clamp_to(&text);
        assert_eq!(inside, Position::new(1, 0));
    }
}
