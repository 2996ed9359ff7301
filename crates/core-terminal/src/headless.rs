//! In-memory console for tests.
//!
//! Cell writes land in a back grid; `commit` copies it to the front grid,
//! which is what assertions read. Events are scripted up front and
//! `next_event` fails once the script runs dry, ending the editor loop.

use crate::Console;
use anyhow::{Result, anyhow, bail};
use core_events::Event;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct HeadlessConsole {
    width: u16,
    height: u16,
    back: Vec<Vec<char>>,
    front: Vec<Vec<char>>,
    cursor: (u16, u16),
    committed_cursor: (u16, u16),
    events: VecDeque<Event>,
    commits: usize,
    frame_writes: usize,
    last_frame_writes: usize,
    clears: usize,
}

fn blank(width: u16, height: u16) -> Vec<Vec<char>> {
    vec![vec![' '; width as usize]; height as usize]
}

impl HeadlessConsole {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            back: blank(width, height),
            front: blank(width, height),
            cursor: (0, 0),
            committed_cursor: (0, 0),
            events: VecDeque::new(),
            commits: 0,
            frame_writes: 0,
            last_frame_writes: 0,
            clears: 0,
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn push_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Cells written during the most recently committed frame.
    pub fn last_frame_writes(&self) -> usize {
        self.last_frame_writes
    }

    /// Cursor cell as of the last commit.
    pub fn cursor(&self) -> (u16, u16) {
        self.committed_cursor
    }

    /// Committed row contents, trailing blanks removed.
    pub fn row(&self, row: u16) -> String {
        self.front
            .get(row as usize)
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    pub fn screen(&self) -> Vec<String> {
        (0..self.height).map(|r| self.row(r)).collect()
    }

    fn resize(&mut self, width: u16, height: u16) {
        for grid in [&mut self.back, &mut self.front] {
            grid.resize(height as usize, Vec::new());
            for row in grid.iter_mut() {
                row.resize(width as usize, ' ');
            }
        }
        self.width = width;
        self.height = height;
    }
}

impl Console for HeadlessConsole {
    fn insert_cell(&mut self, column: u16, row: u16, ch: char) -> Result<()> {
        if column >= self.width || row >= self.height {
            bail!(
                "cell ({column},{row}) outside {}x{} console",
                self.width,
                self.height
            );
        }
        self.back[row as usize][column as usize] = ch;
        self.frame_writes += 1;
        Ok(())
    }

    fn set_cursor_position(&mut self, column: u16, row: u16) -> Result<()> {
        self.cursor = (column, row);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.front.clone_from(&self.back);
        self.committed_cursor = self.cursor;
        self.last_frame_writes = std::mem::take(&mut self.frame_writes);
        self.commits += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.back = blank(self.width, self.height);
        self.clears += 1;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn next_event(&mut self) -> Result<Event> {
        let ev = self
            .events
            .pop_front()
            .ok_or_else(|| anyhow!("headless event script exhausted"))?;
        // A zero dimension is passed on but never applied to the grid.
        if let Event::Resize { width, height } = ev
            && width > 0
            && height > 0
        {
            self.resize(width, height);
        }
        Ok(ev)
    }
}
