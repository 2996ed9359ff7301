//! Status bar composition.
//!
//! Layout for a bar of `width` cells:
//! `<notification, left half><info, right-aligned in the right half>`
//! where info is `[*]<file> | <EOL> | [x;y]`.
//! * The notification is cut to `half - 3` characters plus `...` when it does
//!   not fit its half.
//! * `*` appears only when the text is modified.
//! * Info that does not fit the right half is omitted.
//!
//! Two stages: `compose_status` yields ordered segments, `format_status`
//! lays them out for a given width.

use anyhow::Result;
use core_terminal::Console;
use core_text::{LineEnding, Position};

pub struct StatusContext<'a> {
    pub notification: &'a str,
    pub file_name: &'a str,
    pub line_ending: LineEnding,
    pub cursor: Position,
    pub modified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Notification(&'a str),
    Modified,
    FileName(&'a str),
    LineEnding(&'static str),
    /// 0-based cursor coordinates.
    Position { column: usize, row: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut out = Vec::with_capacity(5);
    out.push(StatusSegment::Notification(ctx.notification));
    if ctx.modified {
        out.push(StatusSegment::Modified);
    }
    out.push(StatusSegment::FileName(ctx.file_name));
    out.push(StatusSegment::LineEnding(ctx.line_ending.name()));
    out.push(StatusSegment::Position {
        column: ctx.cursor.column,
        row: ctx.cursor.row,
    });
    out
}

/// Lay segments out into exactly `width` characters.
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> String {
    const SEPARATOR: &str = " | ";
    let left_width = width / 2;
    let right_width = width - left_width;

    let mut notification = "";
    let mut info = String::with_capacity(32);
    for seg in segments {
        match seg {
            StatusSegment::Notification(n) => notification = *n,
            StatusSegment::Modified => info.push('*'),
            StatusSegment::FileName(name) => info.push_str(name),
            StatusSegment::LineEnding(eol) => {
                info.push_str(SEPARATOR);
                info.push_str(eol);
            }
            StatusSegment::Position { column, row } => {
                info.push_str(SEPARATOR);
                info.push_str(&format!("[{column};{row}]"));
            }
        }
    }

    let mut out = String::with_capacity(width);
    let note_len = notification.chars().count();
    if note_len >= left_width {
        let keep = left_width.saturating_sub(3);
        out.extend(notification.chars().take(keep));
        out.extend("...".chars().take(left_width - keep));
    } else {
        out.push_str(notification);
        out.extend(std::iter::repeat_n(' ', left_width - note_len));
    }

    let info_len = info.chars().count();
    if info_len <= right_width {
        out.extend(std::iter::repeat_n(' ', right_width - info_len));
        out.push_str(&info);
    } else {
        out.extend(std::iter::repeat_n(' ', right_width));
    }
    out
}

/// Paint the bar on screen row `row`, starting at column 0.
pub fn draw_status<C: Console + ?Sized>(
    console: &mut C,
    row: u16,
    width: u16,
    ctx: &StatusContext<'_>,
) -> Result<()> {
    let line = format_status(&compose_status(ctx), width as usize);
    for (col, ch) in (0..width).zip(line.chars()) {
        console.insert_cell(col, row, ch)?;
    }
    Ok(())
}
