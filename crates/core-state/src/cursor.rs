//! Edit cursor.
//!
//! The cursor is plain state: it validates that offsets are non-negative but
//! knows nothing about line lengths. Keeping `x` inside the current line is the
//! caller's job (the dispatcher consults `Text` before every move).
//!
//! A cursor may be bound to a [`CursorSink`] that mirrors every committed
//! coordinate, e.g. to keep a blinking hardware cursor in sync. Binding is
//! optional: the editor loop leaves its cursor unbound and places the
//! hardware cursor itself once per frame, after scrolling is resolved.

use core_text::{Axis, Position};
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Receives every coordinate the cursor commits to.
pub trait CursorSink {
    fn cursor_moved(&mut self, column: usize, row: usize) -> anyhow::Result<()>;
}

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("invalid {axis} offset {value}")]
    InvalidOffset { axis: Axis, value: isize },
    /// The new coordinate was applied but the bound sink failed to follow it.
    #[error("cursor sink failed to follow position")]
    Sink(#[source] anyhow::Error),
}

#[derive(Default)]
pub struct Cursor {
    x: usize,
    y: usize,
    sink: Option<Box<dyn CursorSink>>,
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("bound", &self.sink.is_some())
            .finish()
    }
}

fn validate(axis: Axis, value: isize) -> Result<usize, CursorError> {
    usize::try_from(value).map_err(|_| CursorError::InvalidOffset { axis, value })
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y, sink: None }
    }

    /// Attach a sink and push the current coordinate to it right away.
    pub fn bind(&mut self, sink: Box<dyn CursorSink>) -> Result<(), CursorError> {
        self.sink = Some(sink);
        self.forward()
    }

    pub fn unbind(&mut self) -> Option<Box<dyn CursorSink>> {
        self.sink.take()
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn set_x(&mut self, x: isize) -> Result<(), CursorError> {
        self.x = validate(Axis::Column, x)?;
        self.forward()
    }

    pub fn set_y(&mut self, y: isize) -> Result<(), CursorError> {
        self.y = validate(Axis::Row, y)?;
        self.forward()
    }

    /// Set both offsets. Both are validated before either is written, so a
    /// rejected `y` leaves `x` untouched too.
    pub fn set_offsets(&mut self, x: isize, y: isize) -> Result<(), CursorError> {
        let x = validate(Axis::Column, x)?;
        let y = validate(Axis::Row, y)?;
        self.x = x;
        self.y = y;
        self.forward()
    }

    /// Move to an already unsigned position; only the sink can fail.
    pub fn set_position(&mut self, pos: Position) -> Result<(), CursorError> {
        self.x = pos.column;
        self.y = pos.row;
        self.forward()
    }

    fn forward(&mut self) -> Result<(), CursorError> {
        trace!(target: "state.cursor", x = self.x, y = self.y, "cursor_set");
        match self.sink.as_mut() {
            Some(sink) => sink.cursor_moved(self.x, self.y).map_err(CursorError::Sink),
            None => Ok(()),
        }
    }
}
