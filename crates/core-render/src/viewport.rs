//! Visible window into the text.
//!
//! The viewport owns the terminal size, the padding reserved for widgets
//! (status bar at the bottom, line-number gutter on the left) and the scroll
//! offsets (`x_boundary`, `y_boundary`) that map buffer coordinates to cells.
//!
//! Invariants after `recalculate_boundaries(cursor)` outside padding fallback:
//! * `x_boundary <= cursor.column < x_boundary + visible_columns()`
//! * `y_boundary <= cursor.row < y_boundary + visible_rows()`
//!
//! One text-area column is held back so a cursor sitting past the last
//! character of a line still lands on a visible cell.
//!
//! Boundaries move to the fixed point of single-unit scrolling: when the
//! cursor is already visible nothing moves, when it sits past an edge the
//! window slides just far enough to show it on that edge.

use core_text::Position;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewportError {
    #[error("viewport size {width}x{height} must be non-zero on both axes")]
    InvalidSize { width: u16, height: u16 },
}

/// Cells reserved around the text area, per edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: u16,
    pub bottom: u16,
    pub left: u16,
    pub right: u16,
}

impl Padding {
    pub const fn new(top: u16, bottom: u16, left: u16, right: u16) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// One bottom row for the status bar.
    pub const fn status_bar() -> Self {
        Self::new(0, 1, 0, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    padding: Padding,
    x_boundary: usize,
    y_boundary: usize,
    padding_fallback: bool,
}

impl Viewport {
    pub fn new(
        width: u16,
        height: u16,
        padding: Padding,
        cursor: Position,
    ) -> Result<Self, ViewportError> {
        let mut vp = Self {
            width: 0,
            height: 0,
            padding,
            x_boundary: 0,
            y_boundary: 0,
            padding_fallback: false,
        };
        vp.resize(width, height, cursor)?;
        Ok(vp)
    }

    pub fn resize(&mut self, width: u16, height: u16, cursor: Position) -> Result<(), ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }
        self.width = width;
        self.height = height;
        let p = self.padding;
        self.padding_fallback = u32::from(p.left) + u32::from(p.right) >= u32::from(width)
            || u32::from(p.top) + u32::from(p.bottom) >= u32::from(height);
        debug!(
            target: "render.viewport",
            width,
            height,
            fallback = self.padding_fallback,
            "viewport_resized"
        );
        self.recalculate_boundaries(cursor);
        Ok(())
    }

    /// True when `(width, height)` differs from the current size.
    pub fn has_size_changed(&self, width: u16, height: u16) -> bool {
        self.width != width || self.height != height
    }

    /// Move both boundaries so the cursor is visible. No-op in padding fallback.
    pub fn recalculate_boundaries(&mut self, cursor: Position) {
        if self.padding_fallback {
            return;
        }
        let x = settle(self.x_boundary, cursor.column, self.visible_columns());
        let y = settle(self.y_boundary, cursor.row, self.visible_rows());
        if (x, y) != (self.x_boundary, self.y_boundary) {
            trace!(
                target: "render.viewport",
                from_x = self.x_boundary,
                from_y = self.y_boundary,
                to_x = x,
                to_y = y,
                "boundaries_moved"
            );
        }
        self.x_boundary = x;
        self.y_boundary = y;
    }

    /// Always true in padding fallback, where nothing is rendered.
    pub fn cursor_in_bounds(&self, cursor: Position) -> bool {
        if self.padding_fallback {
            return true;
        }
        within(self.x_boundary, cursor.column, self.visible_columns())
            && within(self.y_boundary, cursor.row, self.visible_rows())
    }

    /// Interior rectangle left for text, `(width, height)`.
    pub fn text_display_size(&self) -> (u16, u16) {
        let p = self.padding;
        (
            self.width.saturating_sub(p.left).saturating_sub(p.right),
            self.height.saturating_sub(p.top).saturating_sub(p.bottom),
        )
    }

    pub fn full_display_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn top_padding(&self) -> u16 {
        self.padding.top
    }

    pub fn bottom_padding(&self) -> u16 {
        self.padding.bottom
    }

    pub fn left_padding(&self) -> u16 {
        self.padding.left
    }

    pub fn right_padding(&self) -> u16 {
        self.padding.right
    }

    pub fn x_boundary(&self) -> usize {
        self.x_boundary
    }

    pub fn y_boundary(&self) -> usize {
        self.y_boundary
    }

    pub fn is_padding_fallback(&self) -> bool {
        self.padding_fallback
    }

    /// Columns of text shown per row. Never zero.
    pub fn visible_columns(&self) -> usize {
        (self.text_display_size().0 as usize).saturating_sub(1).max(1)
    }

    /// Rows of text shown. Never zero.
    pub fn visible_rows(&self) -> usize {
        (self.text_display_size().1 as usize).max(1)
    }

    /// Screen row of a buffer row, if that row is inside the window.
    pub fn screen_row(&self, row: usize) -> Option<u16> {
        if self.padding_fallback || !within(self.y_boundary, row, self.visible_rows()) {
            return None;
        }
        Some(self.padding.top + (row - self.y_boundary) as u16)
    }

    /// Terminal cell for a buffer position, if it is visible.
    pub fn screen_position(&self, cursor: Position) -> Option<(u16, u16)> {
        if self.padding_fallback
            || !within(self.x_boundary, cursor.column, self.visible_columns())
        {
            return None;
        }
        let row = self.screen_row(cursor.row)?;
        Some((self.padding.left + (cursor.column - self.x_boundary) as u16, row))
    }
}

fn within(boundary: usize, offset: usize, dim: usize) -> bool {
    offset >= boundary && offset < boundary + dim
}

fn settle(boundary: usize, offset: usize, dim: usize) -> usize {
    if offset < boundary {
        offset
    } else if offset >= boundary + dim {
        offset + 1 - dim
    } else {
        boundary
    }
}
