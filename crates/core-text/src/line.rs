use crate::error::TextError;
use std::fmt;

/// One row of text as a sequence of code points.
///
/// Column rules: `insert` accepts `0..=len`, `remove_tail` and `get` accept
/// `0..len`, `remove_head` accepts `1..=len` (it removes the code point before
/// the column). Inserting is O(n) in the remaining length, which is fine for
/// terminal-sized lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    buf: Vec<char>,
}

impl Line {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.buf
    }

    pub fn as_string(&self) -> String {
        self.buf.iter().collect()
    }

    pub fn get(&self, column: usize) -> Result<char, TextError> {
        self.buf
            .get(column)
            .copied()
            .ok_or_else(|| TextError::column(column, self.buf.len()))
    }

    pub fn insert(&mut self, ch: char, column: usize) -> Result<(), TextError> {
        if column > self.buf.len() {
            return Err(TextError::column(column, self.buf.len()));
        }
        self.buf.insert(column, ch);
        Ok(())
    }

    /// Remove the code point before `column` (backspace semantics).
    pub fn remove_head(&mut self, column: usize) -> Result<char, TextError> {
        if column == 0 || column > self.buf.len() {
            return Err(TextError::column(column, self.buf.len()));
        }
        Ok(self.buf.remove(column - 1))
    }

    /// Remove the code point at `column` (delete semantics).
    pub fn remove_tail(&mut self, column: usize) -> Result<char, TextError> {
        if column >= self.buf.len() {
            return Err(TextError::column(column, self.buf.len()));
        }
        Ok(self.buf.remove(column))
    }

    /// Split at `column`, keeping the head and returning the tail.
    pub fn split_off(&mut self, column: usize) -> Result<Line, TextError> {
        if column > self.buf.len() {
            return Err(TextError::column(column, self.buf.len()));
        }
        Ok(Line {
            buf: self.buf.split_off(column),
        })
    }

    pub fn append(&mut self, other: Line) {
        self.buf.extend(other.buf);
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self {
            buf: s.chars().collect(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.buf {
            fmt::Write::write_char(f, *ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn length_counts_code_points() {
        assert_eq!(Line::from("").len(), 0);
        assert_eq!(Line::from("Hello").len(), 5);
        assert_eq!(Line::from("zażółć").len(), 6);
    }

    #[test]
    fn string_and_slice_views_match_source() {
        let line = Line::from("Test line");
        assert_eq!(line.as_string(), "Test line");
        assert_eq!(line.to_string(), "Test line");
        assert_eq!(line.as_slice(), &"Test line".chars().collect::<Vec<_>>()[..]);
    }

    #[test]
    fn insert_in_middle() {
        let mut line = Line::from("Vali string");
        line.insert('d', 4).unwrap();
        assert_eq!(line.as_string(), "Valid string");
    }

    #[test]
    fn insert_at_both_ends() {
        let mut line = Line::from("bc");
        line.insert('a', 0).unwrap();
        line.insert('d', 3).unwrap();
        assert_eq!(line.as_string(), "abcd");
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut line = Line::from("abc");
        let err = line.insert('x', 4).unwrap_err();
        assert_eq!(
            err,
            TextError::OutOfBounds {
                axis: Axis::Column,
                offset: 4,
                limit: 3
            }
        );
        assert_eq!(line.as_string(), "abc");
    }

    #[test]
    fn remove_head_and_tail() {
        let mut head = Line::from("Valid string");
        assert_eq!(head.remove_head(1).unwrap(), 'V');
        assert_eq!(head.as_string(), "alid string");

        let mut tail = Line::from("Valid string");
        assert_eq!(tail.remove_tail(1).unwrap(), 'a');
        assert_eq!(tail.as_string(), "Vlid string");
    }

    #[test]
    fn remove_rejects_invalid_columns() {
        let mut line = Line::from("ab");
        assert!(line.remove_head(0).is_err());
        assert!(line.remove_head(3).is_err());
        assert!(line.remove_tail(2).is_err());
        assert_eq!(line.as_string(), "ab");
    }

    #[test]
    fn get_reads_only_existing_columns() {
        let line = Line::from("xyz");
        assert_eq!(line.get(0).unwrap(), 'x');
        assert_eq!(line.get(2).unwrap(), 'z');
        assert!(line.get(3).is_err());
    }

    #[test]
    fn split_then_append_restores_line() {
        let mut line = Line::from("abcd");
        let tail = line.split_off(1).unwrap();
        assert_eq!(line.as_string(), "a");
        assert_eq!(tail.as_string(), "bcd");
        line.append(tail);
        assert_eq!(line.as_string(), "abcd");
    }
}
