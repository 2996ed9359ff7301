use crate::Position;
use crate::error::TextError;
use crate::line::Line;
use std::fmt;
use tracing::trace;

/// End-of-line sequence observed when the text was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Short label used by the status bar.
    pub fn name(&self) -> &'static str {
        match self {
            LineEnding::Lf => "LF",
            LineEnding::CrLf => "CRLF",
        }
    }

    /// Line ending native to the build target.
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The whole buffer: lines, dirty bit and detected line ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    lines: Vec<Line>,
    modified: bool,
    line_ending: LineEnding,
}

impl Default for Text {
    fn default() -> Self {
        Self::load("", false)
    }
}

impl Text {
    /// Build a text from file content. Any `\r\n` pair marks the source as CRLF;
    /// pairs are normalized to `\n` before splitting. A brand-new file starts
    /// modified since it has no on-disk counterpart yet.
    pub fn load(content: &str, is_new_file: bool) -> Self {
        let line_ending = if content.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        let normalized = content.replace("\r\n", "\n");
        let lines: Vec<Line> = normalized.split('\n').map(Line::from).collect();
        trace!(target: "text", lines = lines.len(), eol = line_ending.name(), "text_loaded");
        Self {
            lines,
            modified: is_new_file,
            line_ending,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Result<&Line, TextError> {
        self.lines
            .get(row)
            .ok_or_else(|| TextError::row(row, self.lines.len()))
    }

    fn line_mut(&mut self, row: usize) -> Result<&mut Line, TextError> {
        let count = self.lines.len();
        self.lines
            .get_mut(row)
            .ok_or_else(|| TextError::row(row, count))
    }

    pub fn line_length(&self, row: usize) -> Result<usize, TextError> {
        self.line(row).map(Line::len)
    }

    pub fn get(&self, column: usize, row: usize) -> Result<char, TextError> {
        self.line(row)?.get(column)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn insert_character(&mut self, ch: char, pos: Position) -> Result<(), TextError> {
        self.line_mut(pos.row)?.insert(ch, pos.column)?;
        self.modified = true;
        Ok(())
    }

    /// Remove the character before `pos`. Never joins lines: callers turn a
    /// column-0 backspace into [`Text::combine_line`].
    pub fn remove_head(&mut self, pos: Position) -> Result<char, TextError> {
        let removed = self.line_mut(pos.row)?.remove_head(pos.column)?;
        self.modified = true;
        Ok(removed)
    }

    /// Remove the character at `pos`. Never joins lines: callers turn an
    /// end-of-line delete into [`Text::combine_line`] with `step_down`.
    pub fn remove_tail(&mut self, pos: Position) -> Result<char, TextError> {
        let removed = self.line_mut(pos.row)?.remove_tail(pos.column)?;
        self.modified = true;
        Ok(removed)
    }

    /// Break the line at `pos`. Column 0 opens an empty line above, end of line
    /// opens one below, anything in between splits the content in two.
    pub fn insert_line(&mut self, pos: Position) -> Result<(), TextError> {
        let len = self.line_length(pos.row)?;
        if pos.column == 0 {
            self.lines.insert(pos.row, Line::new());
        } else if pos.column == len {
            self.lines.insert(pos.row + 1, Line::new());
        } else {
            let tail = self.line_mut(pos.row)?.split_off(pos.column)?;
            self.lines.insert(pos.row + 1, tail);
        }
        self.modified = true;
        trace!(target: "text", row = pos.row, column = pos.column, lines = self.lines.len(), "line_split");
        Ok(())
    }

    /// Append row `pos.row` (or `pos.row + 1` when `step_down`) to the row
    /// above it and drop it. Joining above row 0 is out of bounds.
    pub fn combine_line(&mut self, pos: Position, step_down: bool) -> Result<(), TextError> {
        let target = if step_down { pos.row + 1 } else { pos.row };
        if target < 1 || target >= self.lines.len() {
            return Err(TextError::row(target, self.lines.len()));
        }
        let joined = self.lines.remove(target);
        self.lines[target - 1].append(joined);
        self.modified = true;
        trace!(target: "text", row = target, lines = self.lines.len(), "line_joined");
        Ok(())
    }

    /// Join all lines with `separator`. Leaves the dirty bit alone.
    pub fn serialize(&self, separator: &str) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push_str(separator);
            }
            out.extend(line.as_slice());
        }
        out
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }
}
