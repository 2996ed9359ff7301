//! Redraw strategies.
//!
//! | Kind    | Repaints                                                  |
//! |---------|-----------------------------------------------------------|
//! | `Line`  | one visible row, padded with blanks to the text-area edge |
//! | `Below` | a row and every visible row under it                      |
//! | `Full`  | the whole screen, cleared first                           |
//!
//! All routines only queue cells; the caller commits once per frame.

use crate::viewport::Viewport;
use anyhow::Result;
use core_terminal::Console;
use core_text::Text;
use tracing::trace;

/// Redraw kinds ordered by cost, so merging two requirements is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum RedrawKind {
    #[default]
    None,
    Line,
    Below,
    Full,
}

impl RedrawKind {
    pub fn escalate(self, other: RedrawKind) -> RedrawKind {
        self.max(other)
    }
}

/// Repaint buffer row `row` if it is visible. Rows past the end of the text
/// are painted blank.
pub fn redraw_line<C: Console + ?Sized>(
    console: &mut C,
    viewport: &Viewport,
    text: &Text,
    row: usize,
) -> Result<()> {
    let Some(screen_row) = viewport.screen_row(row) else {
        return Ok(());
    };
    let (text_width, _) = viewport.text_display_size();
    let left = viewport.left_padding();
    let visible = viewport.visible_columns();
    let chars = text.line(row).map(|l| l.as_slice()).unwrap_or(&[]);
    for i in 0..text_width {
        let ch = if (i as usize) < visible {
            chars
                .get(viewport.x_boundary() + i as usize)
                .copied()
                .unwrap_or(' ')
        } else {
            ' '
        };
        console.insert_cell(left + i, screen_row, ch)?;
    }
    Ok(())
}

/// Repaint from buffer row `from_row` to the bottom of the window.
pub fn redraw_below<C: Console + ?Sized>(
    console: &mut C,
    viewport: &Viewport,
    text: &Text,
    from_row: usize,
) -> Result<()> {
    let first = from_row.max(viewport.y_boundary());
    let end = viewport.y_boundary() + viewport.visible_rows();
    trace!(target: "render.redraw", from = first, to = end, "redraw_below");
    for row in first..end {
        redraw_line(console, viewport, text, row)?;
    }
    Ok(())
}

/// Clear the screen and repaint every visible text cell. In padding fallback
/// the screen is only cleared.
pub fn redraw_full<C: Console + ?Sized>(
    console: &mut C,
    viewport: &Viewport,
    text: &Text,
) -> Result<()> {
    console.clear()?;
    if viewport.is_padding_fallback() {
        trace!(target: "render.redraw", "redraw_full_fallback");
        return Ok(());
    }
    redraw_below(console, viewport, text, viewport.y_boundary())
}
