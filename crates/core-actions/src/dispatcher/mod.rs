//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `motion` - cursor movement, including word jumps
//! * `edit`   - text mutation (insert, split, backspace, delete)
//! * `undo`   - history restore
//!
//! Handlers mutate first and describe the change afterwards through
//! `EditEffect`. Deciding how much of the screen to repaint, and whether the
//! cursor left the viewport, is the editor loop's job.
//!
//! Every mutating handler checkpoints the pre-edit state right before its
//! first mutation; handlers that turn out to be no-ops (backspace at the very
//! start of the text, delete at the very end) never checkpoint.

use crate::{Action, io_ops};
use core_config::LineEndingPolicy;
use core_state::{CursorError, EditorState};
use core_text::TextError;
use thiserror::Error;
use tracing::{debug, warn};

mod edit;
mod motion;
mod undo;

pub const SAVED_NOTIFICATION: &str = "Changes saved.";
pub const UNSAVED_EXIT_NOTIFICATION: &str = "Unsaved changes. Exit again to discard them.";
pub const NOTHING_TO_UNDO_NOTIFICATION: &str = "Nothing to undo.";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    Cursor(#[from] CursorError),
}

/// What an action changed, in the order of how much must be repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEffect {
    None,
    CursorMoved,
    /// Content of one row changed; the line count did not.
    LineChanged { row: usize },
    /// Line count changed; rows from `from_row` down shifted.
    LinesShifted { from_row: usize },
    /// The whole text was swapped (undo).
    TextReplaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub effect: EditEffect,
    pub quit: bool,
    /// Message for the status bar. `None` leaves it blank.
    pub notification: Option<String>,
}

impl DispatchOutcome {
    pub fn effect(effect: EditEffect) -> Self {
        Self {
            effect,
            quit: false,
            notification: None,
        }
    }

    pub fn notify(effect: EditEffect, message: impl Into<String>) -> Self {
        Self {
            effect,
            quit: false,
            notification: Some(message.into()),
        }
    }

    pub fn quit() -> Self {
        Self {
            effect: EditEffect::None,
            quit: true,
            notification: None,
        }
    }
}

#[derive(Debug)]
pub struct Dispatcher {
    line_ending: LineEndingPolicy,
    /// Set by an exit request on modified text; the next action decides.
    exit_armed: bool,
}

impl Dispatcher {
    pub fn new(line_ending: LineEndingPolicy) -> Self {
        Self {
            line_ending,
            exit_armed: false,
        }
    }

    /// Forget a pending exit confirmation. For keys that never reach
    /// `dispatch`, which disarms on its own.
    pub fn disarm_exit(&mut self) {
        if std::mem::take(&mut self.exit_armed) {
            debug!(target: "actions.dispatch", "exit_disarmed");
        }
    }

    /// Apply an action to editor state.
    pub fn dispatch(
        &mut self,
        state: &mut EditorState,
        action: Action,
    ) -> Result<DispatchOutcome, DispatchError> {
        let armed = std::mem::take(&mut self.exit_armed);
        debug!(target: "actions.dispatch", ?action, mutating = action.is_mutating(), "dispatch");
        match action {
            Action::Motion(kind) => motion::handle_motion(kind, state).map(DispatchOutcome::effect),
            Action::InsertChar(_)
            | Action::SplitLine
            | Action::DeleteBackward
            | Action::DeleteForward => edit::handle_edit(action, state).map(DispatchOutcome::effect),
            Action::Undo => undo::handle_undo(state),
            Action::Save => Ok(self.save(state)),
            Action::Exit => {
                if state.text.is_modified() && !armed {
                    self.exit_armed = true;
                    Ok(DispatchOutcome::notify(
                        EditEffect::None,
                        UNSAVED_EXIT_NOTIFICATION,
                    ))
                } else {
                    Ok(DispatchOutcome::quit())
                }
            }
        }
    }

    /// Save failures are reported on the status bar and leave the text
    /// marked modified.
    fn save(&self, state: &mut EditorState) -> DispatchOutcome {
        match io_ops::save(state, self.line_ending) {
            Ok(()) => DispatchOutcome::notify(EditEffect::None, SAVED_NOTIFICATION),
            Err(e) => {
                warn!(target: "actions.dispatch", error = %e, "save_failed");
                DispatchOutcome::notify(EditEffect::None, format!("Save failed: {e}"))
            }
        }
    }
}
