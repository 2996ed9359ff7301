//! Terminal collaborator: the `Console` capability contract plus its crossterm
//! and in-memory implementations.
//!
//! Cell writes are buffered until `commit`, so a frame reaches the physical
//! screen in one flush no matter how many cells the renderer touched.

use anyhow::Result;
use core_events::Event;

pub mod batch;
pub mod crossterm_console;
pub mod headless;
pub mod translate;

pub use batch::{BatchStats, CellBatch};
pub use crossterm_console::CrosstermConsole;
pub use headless::HeadlessConsole;

/// Capability contract consumed by the editor loop.
pub trait Console {
    /// Write one code point at an absolute terminal cell.
    fn insert_cell(&mut self, column: u16, row: u16, ch: char) -> Result<()>;
    fn set_cursor_position(&mut self, column: u16, row: u16) -> Result<()>;
    /// Flush pending cell writes to the physical screen.
    fn commit(&mut self) -> Result<()>;
    /// Blank the whole screen as part of the next commit.
    fn clear(&mut self) -> Result<()>;
    /// Current size in cells, `(width, height)`.
    fn size(&self) -> (u16, u16);
    /// Block until the next key press or resize.
    fn next_event(&mut self) -> Result<Event>;
}
