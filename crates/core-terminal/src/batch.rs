//! Cell batching.
//!
//! Pending cell writes are grouped into runs of horizontally adjacent cells on
//! the same row. Each run becomes one `MoveTo` plus one `Print`, so repainting
//! a row costs two terminal commands instead of two per character.
//!
//! Metrics:
//! * `print_commands` counts `Print` commands issued after batching.
//! * `cells_printed` counts logical cells written. `print_commands <= cells_printed`
//!   always holds.

use crossterm::{cursor::MoveTo, queue, style::Print};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    column: u16,
    row: u16,
    ch: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    Print(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub print_commands: u64,
    pub cells_printed: u64,
}

#[derive(Debug, Default)]
pub struct CellBatch {
    cells: Vec<Cell>,
}

impl CellBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: u16, row: u16, ch: char) {
        self.cells.push(Cell { column, row, ch });
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Group pending cells into positioned runs, preserving write order.
    pub fn commands(&self) -> Vec<Command> {
        let mut cmds = Vec::new();
        let mut run = String::new();
        let mut next: Option<(u16, u16)> = None;
        for cell in &self.cells {
            if next != Some((cell.column, cell.row)) {
                if !run.is_empty() {
                    cmds.push(Command::Print(std::mem::take(&mut run)));
                }
                cmds.push(Command::MoveTo(cell.column, cell.row));
            }
            run.push(cell.ch);
            next = Some((cell.column.saturating_add(1), cell.row));
        }
        if !run.is_empty() {
            cmds.push(Command::Print(run));
        }
        cmds
    }

    /// Queue the batched commands on `out` and empty the batch. Does not flush.
    pub fn drain_into<W: Write>(&mut self, out: &mut W) -> io::Result<BatchStats> {
        let mut stats = BatchStats {
            cells_printed: self.cells.len() as u64,
            ..BatchStats::default()
        };
        for cmd in self.commands() {
            match cmd {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                    stats.print_commands += 1;
                }
            }
        }
        self.cells.clear();
        Ok(stats)
    }
}
