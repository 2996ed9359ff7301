//! Line-number gutter drawn in the left padding.

use crate::viewport::Viewport;
use anyhow::Result;
use core_terminal::Console;
use core_text::Text;

/// Three digits plus one separating blank.
pub const GUTTER_WIDTH: u16 = 4;
const DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// 1-based row numbers.
    Absolute,
    /// Distance from the cursor row.
    Relative,
}

/// Right-aligned label for `row`, always `DIGITS` wide.
pub fn label(row: usize, cursor_row: usize, numbering: Numbering) -> String {
    let n = match numbering {
        Numbering::Absolute => row + 1,
        Numbering::Relative => row.abs_diff(cursor_row),
    };
    let s = n.to_string();
    if s.len() > DIGITS {
        format!("*{}", &s[s.len() - (DIGITS - 1)..])
    } else {
        format!("{s:>width$}", width = DIGITS)
    }
}

/// Paint labels for every visible row. Rows past the end of the text get
/// blanks. Does nothing unless the left padding can hold the gutter.
pub fn draw_gutter<C: Console + ?Sized>(
    console: &mut C,
    viewport: &Viewport,
    text: &Text,
    cursor_row: usize,
    numbering: Numbering,
) -> Result<()> {
    if viewport.is_padding_fallback() || viewport.left_padding() < GUTTER_WIDTH {
        return Ok(());
    }
    let x0 = viewport.left_padding() - GUTTER_WIDTH;
    for i in 0..viewport.visible_rows() {
        let row = viewport.y_boundary() + i;
        let Some(screen_row) = viewport.screen_row(row) else {
            continue;
        };
        let cell = if row < text.line_count() {
            format!("{} ", label(row, cursor_row, numbering))
        } else {
            " ".repeat(GUTTER_WIDTH as usize)
        };
        for (dx, ch) in cell.chars().enumerate() {
            console.insert_cell(x0 + dx as u16, screen_row, ch)?;
        }
    }
    Ok(())
}
