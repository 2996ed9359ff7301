//! Undo handling: restore the most recent checkpoint from `EditorState`.

use super::{DispatchError, DispatchOutcome, EditEffect, NOTHING_TO_UNDO_NOTIFICATION};
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState) -> Result<DispatchOutcome, DispatchError> {
    if state.undo()? {
        tracing::trace!(target: "actions.dispatch", op = "undo", remaining = state.history.len(), "undo");
        Ok(DispatchOutcome::effect(EditEffect::TextReplaced))
    } else {
        Ok(DispatchOutcome::notify(
            EditEffect::None,
            NOTHING_TO_UNDO_NOTIFICATION,
        ))
    }
}
