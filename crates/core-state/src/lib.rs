//! Editor state: the text, its cursor, undo history and file identity.
//!
//! `EditorState` is exclusively owned by the editor loop; nothing here is
//! shared across threads. Text is the source of truth for line lengths, the
//! cursor is dumb state that the dispatcher keeps inside the text.

pub mod cursor;
pub mod undo;

pub use cursor::{Cursor, CursorError, CursorSink};
pub use undo::{HISTORY_DEFAULT_SIZE, History, Snapshot};

use core_text::Text;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level editor state container (single file per session).
#[derive(Debug)]
pub struct EditorState {
    pub text: Text,
    pub cursor: Cursor,
    pub history: History,
    path: PathBuf,
    file_exists: bool,
}

impl EditorState {
    pub fn new(text: Text, path: impl Into<PathBuf>, file_exists: bool, history: History) -> Self {
        Self {
            text,
            cursor: Cursor::new(0, 0),
            history,
            path: path.into(),
            file_exists,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name shown by the status bar.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn file_exists(&self) -> bool {
        self.file_exists
    }

    /// Record that the buffer now has an on-disk counterpart.
    pub fn mark_persisted(&mut self) {
        self.file_exists = true;
        self.text.clear_modified();
    }

    /// Capture the pre-edit state. Call right before a mutation.
    pub fn checkpoint(&mut self) {
        self.history.push(&self.text, self.cursor.position());
    }

    /// Restore the most recent checkpoint. Returns false when history is empty.
    pub fn undo(&mut self) -> Result<bool, CursorError> {
        let Some(snapshot) = self.history.pop() else {
            return Ok(false);
        };
        self.text = snapshot.text;
        self.text.mark_modified();
        let mut pos = snapshot.position;
        pos.clamp_to(&self.text);
        self.cursor.set_position(pos)?;
        debug!(target: "state.undo", row = pos.row, column = pos.column, depth = self.history.len(), "undo_applied");
        Ok(true)
    }
}
