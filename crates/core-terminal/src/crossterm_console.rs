use crate::{Console, batch::CellBatch, translate};
use anyhow::Result;
use core_config::CursorStyle;
use core_events::Event;
use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    event, execute, queue,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{Stdout, Write, stdout};
use tracing::{debug, trace};

/// Console backed by the real terminal through crossterm.
///
/// `enter` switches to raw mode and the alternate screen; `leave` (also run on
/// drop) restores the terminal.
pub struct CrosstermConsole {
    out: Stdout,
    batch: CellBatch,
    cursor: (u16, u16),
    clear_pending: bool,
    size: (u16, u16),
    style: CursorStyle,
    entered: bool,
}

impl CrosstermConsole {
    pub fn new(style: CursorStyle) -> Result<Self> {
        let size = terminal::size()?;
        Ok(Self {
            out: stdout(),
            batch: CellBatch::new(),
            cursor: (0, 0),
            clear_pending: false,
            size,
            style,
            entered: false,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(
                self.out,
                EnterAlternateScreen,
                cursor_shape(self.style),
                Clear(ClearType::All)
            )?;
            self.entered = true;
            debug!(target: "terminal", width = self.size.0, height = self.size.1, "terminal_entered");
        }
        Ok(())
    }

    pub fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(
                self.out,
                SetCursorStyle::DefaultUserShape,
                Show,
                LeaveAlternateScreen
            )?;
            disable_raw_mode()?;
            self.entered = false;
            debug!(target: "terminal", "terminal_left");
        }
        Ok(())
    }
}

fn cursor_shape(style: CursorStyle) -> SetCursorStyle {
    match style {
        CursorStyle::Default => SetCursorStyle::DefaultUserShape,
        CursorStyle::BlinkingBlock => SetCursorStyle::BlinkingBlock,
        CursorStyle::SteadyBlock => SetCursorStyle::SteadyBlock,
        CursorStyle::BlinkingBar => SetCursorStyle::BlinkingBar,
        CursorStyle::SteadyBar => SetCursorStyle::SteadyBar,
        CursorStyle::BlinkingUnderscore => SetCursorStyle::BlinkingUnderScore,
        CursorStyle::SteadyUnderscore => SetCursorStyle::SteadyUnderScore,
    }
}

impl Console for CrosstermConsole {
    fn insert_cell(&mut self, column: u16, row: u16, ch: char) -> Result<()> {
        self.batch.push(column, row, ch);
        Ok(())
    }

    fn set_cursor_position(&mut self, column: u16, row: u16) -> Result<()> {
        self.cursor = (column, row);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        queue!(self.out, Hide)?;
        if std::mem::take(&mut self.clear_pending) {
            queue!(self.out, Clear(ClearType::All))?;
        }
        let stats = self.batch.drain_into(&mut self.out)?;
        queue!(self.out, MoveTo(self.cursor.0, self.cursor.1), Show)?;
        self.out.flush()?;
        trace!(
            target: "terminal",
            print_commands = stats.print_commands,
            cells = stats.cells_printed,
            "commit"
        );
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        // Cells queued before the clear would be wiped anyway.
        self.batch.clear();
        self.clear_pending = true;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn next_event(&mut self) -> Result<Event> {
        loop {
            let raw = event::read()?;
            if let Some(ev) = translate::translate(raw) {
                if let Event::Resize { width, height } = ev
                    && width > 0
                    && height > 0
                {
                    self.size = (width, height);
                }
                return Ok(ev);
            }
        }
    }
}

impl Drop for CrosstermConsole {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
