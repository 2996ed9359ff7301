//! Text edit action handling (insert/split/backspace/delete).
//!
//! Backspace at column 0 and Delete at the end of a line turn into line
//! joins. At the very start (Backspace) or very end (Delete) of the text
//! they do nothing, so `Text` never sees a join it would reject.

use super::{DispatchError, EditEffect};
use crate::Action;
use core_state::EditorState;
use core_text::Position;

pub(crate) fn handle_edit(
    action: Action,
    state: &mut EditorState,
) -> Result<EditEffect, DispatchError> {
    let pos = state.cursor.position();
    match action {
        Action::InsertChar(ch) => {
            state.checkpoint();
            state.text.insert_character(ch, pos)?;
            state.cursor.set_position(Position::new(pos.column + 1, pos.row))?;
            tracing::trace!(target: "actions.dispatch", op = "insert_char", %ch, col = pos.column, row = pos.row, "edit");
            Ok(EditEffect::LineChanged { row: pos.row })
        }
        Action::SplitLine => {
            state.checkpoint();
            state.text.insert_line(pos)?;
            state.cursor.set_position(Position::new(0, pos.row + 1))?;
            tracing::trace!(target: "actions.dispatch", op = "split_line", col = pos.column, row = pos.row, "edit");
            Ok(EditEffect::LinesShifted { from_row: pos.row })
        }
        Action::DeleteBackward => {
            if pos.column > 0 {
                state.checkpoint();
                state.text.remove_head(pos)?;
                state.cursor.set_position(Position::new(pos.column - 1, pos.row))?;
                tracing::trace!(target: "actions.dispatch", op = "backspace", col = pos.column, row = pos.row, "edit");
                return Ok(EditEffect::LineChanged { row: pos.row });
            }
            if pos.row == 0 {
                return Ok(EditEffect::None);
            }
            let above = pos.row - 1;
            let join_column = state.text.line_length(above)?;
            state.checkpoint();
            state.text.combine_line(pos, false)?;
            state.cursor.set_position(Position::new(join_column, above))?;
            tracing::trace!(target: "actions.dispatch", op = "backspace_join", row = pos.row, "edit");
            Ok(EditEffect::LinesShifted { from_row: above })
        }
        Action::DeleteForward => {
            if pos.column < state.text.line_length(pos.row)? {
                state.checkpoint();
                state.text.remove_tail(pos)?;
                tracing::trace!(target: "actions.dispatch", op = "delete", col = pos.column, row = pos.row, "edit");
                return Ok(EditEffect::LineChanged { row: pos.row });
            }
            if pos.row + 1 >= state.text.line_count() {
                return Ok(EditEffect::None);
            }
            state.checkpoint();
            state.text.combine_line(pos, true)?;
            tracing::trace!(target: "actions.dispatch", op = "delete_join", row = pos.row, "edit");
            Ok(EditEffect::LinesShifted { from_row: pos.row })
        }
        _ => Ok(EditEffect::None),
    }
}
