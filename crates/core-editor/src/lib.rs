//! Editor loop: input event -> dispatch -> reconcile -> redraw -> commit.
//!
//! The editor exclusively owns the state, the viewport and the console for
//! its whole lifetime. Every event ends in exactly one `Console::commit`, so a
//! frame is never split across commits and no event is left uncommitted.
//!
//! Reconciliation is the only place where the redraw kind is chosen: the
//! dispatcher reports what changed (`EditEffect`), and if the cursor left the
//! visible window the boundaries are recalculated and the redraw escalates to
//! `Full` regardless of what the edit alone would need.

mod error;
mod options;

pub use error::EditorError;
pub use options::EditorOptions;

use core_actions::{Dispatcher, EditEffect, KeyTranslator, io_ops};
use core_events::{Event, KeyEvent};
use core_render::{
    RedrawKind, StatusContext, Viewport, ViewportError, draw_gutter, draw_status, redraw_below,
    redraw_full, redraw_line,
};
use core_state::{EditorState, History};
use core_terminal::Console;
use core_text::Text;
use std::{io, path::PathBuf};
use tracing::{debug, info, trace, warn};

/// Redraw decision for one event: the kind plus the first affected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redraw {
    pub kind: RedrawKind,
    pub row: usize,
}

impl Redraw {
    pub fn none() -> Self {
        Self {
            kind: RedrawKind::None,
            row: 0,
        }
    }
}

pub struct Editor<C: Console> {
    console: C,
    state: EditorState,
    viewport: Viewport,
    translator: KeyTranslator,
    dispatcher: Dispatcher,
    options: EditorOptions,
    notification: String,
    quit: bool,
}

impl<C: Console> Editor<C> {
    /// Load `path` (missing files start empty) and size the viewport from the
    /// console.
    pub fn open(
        path: impl Into<PathBuf>,
        console: C,
        options: EditorOptions,
    ) -> Result<Self, EditorError> {
        let path = path.into();
        let loaded = io_ops::load(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::InvalidData {
                EditorError::NotUtf8 { path: path.clone() }
            } else {
                EditorError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        Self::new(loaded.text, path, loaded.exists, console, options)
    }

    pub fn new(
        text: Text,
        path: impl Into<PathBuf>,
        file_exists: bool,
        console: C,
        options: EditorOptions,
    ) -> Result<Self, EditorError> {
        let state = EditorState::new(text, path, file_exists, History::new(options.history_size));
        let (width, height) = console.size();
        let viewport = Viewport::new(width, height, options.padding(), state.cursor.position())?;
        info!(
            target: "runtime",
            file = %state.path().display(),
            lines = state.text.line_count(),
            width,
            height,
            "editor_created"
        );
        Ok(Self {
            console,
            state,
            viewport,
            translator: KeyTranslator::new(options.keybinds),
            dispatcher: Dispatcher::new(options.line_ending),
            options,
            notification: String::new(),
            quit: false,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn notification(&self) -> &str {
        &self.notification
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Paint the initial frame, then process events until an exit request.
    pub fn run(&mut self) -> Result<(), EditorError> {
        self.redraw_all()?;
        while !self.quit {
            let event = self.console.next_event()?;
            self.handle_event(event)?;
        }
        info!(target: "runtime", "editor_exit");
        Ok(())
    }

    /// Repaint and commit the whole screen.
    pub fn redraw_all(&mut self) -> Result<(), EditorError> {
        self.render(Redraw {
            kind: RedrawKind::Full,
            row: self.viewport.y_boundary(),
        })
    }

    /// Handle one event and commit the resulting frame.
    pub fn handle_event(&mut self, event: Event) -> Result<Redraw, EditorError> {
        let redraw = match event {
            Event::Key(key) => self.handle_key(key)?,
            Event::Resize { width, height } => match self.handle_resize(width, height)? {
                Some(redraw) => redraw,
                None => {
                    self.console.commit()?;
                    return Ok(Redraw::none());
                }
            },
        };
        self.render(redraw)?;
        Ok(redraw)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Redraw, EditorError> {
        self.notification.clear();
        let Some(action) = self.translator.translate(&key) else {
            debug!(target: "runtime", %key, "key_unmapped");
            self.dispatcher.disarm_exit();
            return Ok(self.reconcile(EditEffect::None));
        };
        let outcome = self.dispatcher.dispatch(&mut self.state, action)?;
        if let Some(message) = outcome.notification {
            self.notification = message;
        }
        self.quit = outcome.quit;
        Ok(self.reconcile(outcome.effect))
    }

    /// `None` when nothing needs repainting (same size, or a size the
    /// viewport cannot take).
    fn handle_resize(&mut self, width: u16, height: u16) -> Result<Option<Redraw>, EditorError> {
        if !self.viewport.has_size_changed(width, height) {
            trace!(target: "runtime", width, height, "resize_unchanged");
            return Ok(None);
        }
        match self
            .viewport
            .resize(width, height, self.state.cursor.position())
        {
            Ok(()) => Ok(Some(Redraw {
                kind: RedrawKind::Full,
                row: self.viewport.y_boundary(),
            })),
            Err(ViewportError::InvalidSize { .. }) => {
                warn!(target: "runtime", width, height, "resize_ignored");
                Ok(None)
            }
        }
    }

    /// Map an edit effect to a redraw, escalating to `Full` when the cursor
    /// is no longer inside the viewport.
    pub fn reconcile(&mut self, effect: EditEffect) -> Redraw {
        let cursor = self.state.cursor.position();
        let mut redraw = match effect {
            EditEffect::None | EditEffect::CursorMoved => Redraw {
                kind: RedrawKind::None,
                row: cursor.row,
            },
            EditEffect::LineChanged { row } => Redraw {
                kind: RedrawKind::Line,
                row,
            },
            EditEffect::LinesShifted { from_row } => Redraw {
                kind: RedrawKind::Below,
                row: from_row,
            },
            EditEffect::TextReplaced => Redraw {
                kind: RedrawKind::Full,
                row: 0,
            },
        };
        if !self.viewport.cursor_in_bounds(cursor) {
            self.viewport.recalculate_boundaries(cursor);
            redraw.kind = redraw.kind.escalate(RedrawKind::Full);
            trace!(
                target: "runtime",
                x_boundary = self.viewport.x_boundary(),
                y_boundary = self.viewport.y_boundary(),
                "cursor_left_viewport"
            );
        }
        redraw
    }

    /// Queue the chosen redraw plus widgets and cursor, then commit once.
    fn render(&mut self, redraw: Redraw) -> Result<(), EditorError> {
        let text = &self.state.text;
        match redraw.kind {
            RedrawKind::None => {}
            RedrawKind::Line => redraw_line(&mut self.console, &self.viewport, text, redraw.row)?,
            RedrawKind::Below => {
                redraw_below(&mut self.console, &self.viewport, text, redraw.row)?
            }
            RedrawKind::Full => redraw_full(&mut self.console, &self.viewport, text)?,
        }
        self.draw_widgets()?;
        let cursor = self.state.cursor.position();
        let (x, y) = self.viewport.screen_position(cursor).unwrap_or((0, 0));
        self.console.set_cursor_position(x, y)?;
        self.console.commit()?;
        trace!(target: "runtime", kind = ?redraw.kind, row = redraw.row, "frame_committed");
        Ok(())
    }

    fn draw_widgets(&mut self) -> Result<(), EditorError> {
        let cursor = self.state.cursor.position();
        if let Some(numbering) = self.options.gutter() {
            draw_gutter(
                &mut self.console,
                &self.viewport,
                &self.state.text,
                cursor.row,
                numbering,
            )?;
        }
        if self.options.status_bar {
            let (width, height) = self.viewport.full_display_size();
            let file_name = self.state.file_name();
            let ctx = StatusContext {
                notification: &self.notification,
                file_name: &file_name,
                line_ending: self
                    .options
                    .line_ending
                    .resolve(self.state.text.line_ending()),
                cursor,
                modified: self.state.text.is_modified(),
            };
            draw_status(&mut self.console, height - 1, width, &ctx)?;
        }
        Ok(())
    }

    /// Persist the text. Unlike the save key binding, failure is returned to
    /// the caller.
    pub fn save(&mut self) -> Result<(), EditorError> {
        io_ops::save(&mut self.state, self.options.line_ending).map_err(|source| {
            EditorError::Io {
                path: self.state.path().to_path_buf(),
                source,
            }
        })
    }
}
