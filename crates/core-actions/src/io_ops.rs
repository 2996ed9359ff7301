//! File IO helpers.
//!
//! Synchronous and minimal. Loading normalizes line endings through
//! `Text::load`; saving re-expands them with the separator resolved from the
//! configured `LineEndingPolicy`.

use core_config::LineEndingPolicy;
use core_state::EditorState;
use core_text::Text;
use std::{fs, io, path::Path};

/// Result of opening a path for editing.
#[derive(Debug)]
pub struct LoadedFile {
    pub text: Text,
    /// False when the path did not exist; the file is created on first save.
    pub exists: bool,
}

/// Read `path` into a `Text`. A missing file yields an empty, modified text;
/// content that is not UTF-8 fails with `ErrorKind::InvalidData`.
pub fn load(path: &Path) -> io::Result<LoadedFile> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let text = Text::load(&content, false);
            tracing::info!(
                target: "io",
                path = %path.display(),
                lines = text.line_count(),
                eol = text.line_ending().name(),
                "file_opened"
            );
            Ok(LoadedFile { text, exists: true })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(target: "io", path = %path.display(), "file_new");
            Ok(LoadedFile {
                text: Text::load("", true),
                exists: false,
            })
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            tracing::error!(target: "io", path = %path.display(), "file_not_utf8");
            Err(e)
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), ?e, "file_open_error");
            Err(e)
        }
    }
}

/// Serialize the text to the state's path. Clears the modified flag only on
/// success.
pub fn save(state: &mut EditorState, policy: LineEndingPolicy) -> io::Result<()> {
    let separator = policy.resolve(state.text.line_ending());
    let content = state.text.serialize(separator.as_str());
    if let Err(e) = fs::write(state.path(), content.as_bytes()) {
        tracing::error!(target: "io", path = %state.path().display(), ?e, "file_write_error");
        return Err(e);
    }
    state.mark_persisted();
    tracing::info!(
        target: "io",
        path = %state.path().display(),
        bytes = content.len(),
        eol = separator.name(),
        "file_saved"
    );
    Ok(())
}
