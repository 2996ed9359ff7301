//! Viewport, redraw strategies and the decorative widgets drawn around the
//! text area.
//!
//! Nothing in this crate commits a frame. Callers queue cells through a
//! `core_terminal::Console`, then commit once per input event.
//!
//! Exposed components:
//! - `viewport`: size, padding and scroll boundaries; maps buffer positions to cells.
//! - `redraw`: `line`, `below` and `full` repaint routines plus `RedrawKind`.
//! - `status`: status bar composition (notification, file, EOL, cursor).
//! - `gutter`: absolute or relative line numbers in the left padding.

pub mod gutter;
pub mod redraw;
pub mod status;
pub mod viewport;

pub use gutter::{GUTTER_WIDTH, Numbering, draw_gutter};
pub use redraw::{RedrawKind, redraw_below, redraw_full, redraw_line};
pub use status::{StatusContext, StatusSegment, compose_status, draw_status, format_status};
pub use viewport::{Padding, Viewport, ViewportError};
