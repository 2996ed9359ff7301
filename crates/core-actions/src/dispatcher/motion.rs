//! Motion sub-dispatch (cursor movement).
//!
//! Horizontal moves wrap across line boundaries; vertical moves clamp the
//! column to the target row's length. Word jumps scan for runs of non-space
//! characters and stop at line boundaries: leftward lands at the end of the
//! previous line, rightward at the start of the next one.

use super::{DispatchError, EditEffect};
use crate::MotionKind;
use core_state::EditorState;
use core_text::{Position, Text};

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
) -> Result<EditEffect, DispatchError> {
    let before = state.cursor.position();
    let text = &state.text;
    let target = match kind {
        MotionKind::Left => left(text, before)?,
        MotionKind::Right => right(text, before)?,
        MotionKind::Up => up(text, before)?,
        MotionKind::Down => down(text, before)?,
        MotionKind::WordLeft => word_left(text, before)?,
        MotionKind::WordRight => word_right(text, before)?,
    };
    if target == before {
        return Ok(EditEffect::None);
    }
    state.cursor.set_position(target)?;
    tracing::trace!(
        target: "actions.dispatch",
        op = ?kind,
        from_col = before.column,
        from_row = before.row,
        to_col = target.column,
        to_row = target.row,
        "motion"
    );
    Ok(EditEffect::CursorMoved)
}

fn left(text: &Text, pos: Position) -> Result<Position, DispatchError> {
    if pos.column > 0 {
        return Ok(Position::new(pos.column - 1, pos.row));
    }
    if pos.row == 0 {
        return Ok(pos);
    }
    let row = pos.row - 1;
    Ok(Position::new(text.line_length(row)?, row))
}

fn right(text: &Text, pos: Position) -> Result<Position, DispatchError> {
    if pos.column < text.line_length(pos.row)? {
        return Ok(Position::new(pos.column + 1, pos.row));
    }
    if pos.row + 1 >= text.line_count() {
        return Ok(pos);
    }
    Ok(Position::new(0, pos.row + 1))
}

fn up(text: &Text, pos: Position) -> Result<Position, DispatchError> {
    if pos.row == 0 {
        return Ok(pos);
    }
    let row = pos.row - 1;
    Ok(Position::new(pos.column.min(text.line_length(row)?), row))
}

fn down(text: &Text, pos: Position) -> Result<Position, DispatchError> {
    if pos.row + 1 >= text.line_count() {
        return Ok(pos);
    }
    let row = pos.row + 1;
    Ok(Position::new(pos.column.min(text.line_length(row)?), row))
}

/// Walk left to the first character of the previous word. Column 0 is never
/// scanned, so a word starting there is reached by falling through.
fn word_left(text: &Text, pos: Position) -> Result<Position, DispatchError> {
    if pos.column == 0 {
        return left(text, pos);
    }
    let chars = text.line(pos.row)?.as_slice();
    let start = pos.column - 1;
    let mut word_start: Option<usize> = None;
    for i in (1..=start).rev() {
        if chars[i] == ' ' {
            if let Some(ws) = word_start {
                return Ok(Position::new(ws, pos.row));
            }
        } else {
            word_start = Some(i);
        }
    }
    Ok(Position::new(0, pos.row))
}

/// Walk right past the current word and any spaces to the start of the next
/// word, or to the end of the line.
fn word_right(text: &Text, pos: Position) -> Result<Position, DispatchError> {
    let chars = text.line(pos.row)?.as_slice();
    if pos.column >= chars.len() {
        return right(text, pos);
    }
    let mut passed_space = false;
    for (i, &ch) in chars.iter().enumerate().skip(pos.column) {
        if ch == ' ' {
            passed_space = true;
        } else if passed_space {
            return Ok(Position::new(i, pos.row));
        }
    }
    Ok(Position::new(chars.len(), pos.row))
}
