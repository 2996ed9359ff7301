//! Editor actions: key translation, dispatch against `EditorState`, file IO.
//!
//! Flow per key press: `KeyTranslator::translate` turns a `KeyEvent` into an
//! `Action`; `Dispatcher::dispatch` applies it and reports an `EditEffect`
//! describing what changed, which the editor loop maps to a redraw.

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use dispatcher::{DispatchError, DispatchOutcome, Dispatcher, EditEffect};
pub use key_translator::KeyTranslator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    /// Start of the previous run of non-space characters.
    WordLeft,
    /// Start of the next run of non-space characters.
    WordRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertChar(char),
    /// Enter: split the line at the cursor.
    SplitLine,
    /// Backspace.
    DeleteBackward,
    /// Delete.
    DeleteForward,
    Motion(MotionKind),
    Save,
    Undo,
    Exit,
}

impl Action {
    /// True for actions that may change the text.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Action::InsertChar(_)
                | Action::SplitLine
                | Action::DeleteBackward
                | Action::DeleteForward
        )
    }
}
