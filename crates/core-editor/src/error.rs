use core_actions::DispatchError;
use core_render::ViewportError;
use core_state::CursorError;
use core_text::TextError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    Cursor(#[from] CursorError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// Console failure; the screen may be half-written.
    #[error("terminal: {0}")]
    Terminal(#[from] anyhow::Error),
    /// Text is edited as UTF-8 only; other encodings are refused, not
    /// decoded lossily.
    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
