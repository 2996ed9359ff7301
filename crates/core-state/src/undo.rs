use core_text::{Position, Text};
use std::collections::VecDeque;
use tracing::trace;

/// Default number of snapshots retained when no configuration overrides it.
pub const HISTORY_DEFAULT_SIZE: usize = 256;

/// Text plus cursor position captured right before a mutating action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: Text,
    pub position: Position,
}

/// Bounded LIFO of snapshots. Pushing at capacity evicts the oldest entry.
#[derive(Debug)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
    skipped: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_DEFAULT_SIZE)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            skipped: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_pop(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Snapshots not stored because they matched the most recent one.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn push(&mut self, text: &Text, position: Position) {
        if let Some(last) = self.snapshots.back()
            && last.position == position
            && last.text == *text
        {
            self.skipped += 1;
            trace!(target: "state.undo", depth = self.snapshots.len(), "snapshot_dedupe_skip");
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
            trace!(target: "state.undo", capacity = self.capacity, "history_evicted_oldest");
        }
        self.snapshots.push_back(Snapshot {
            text: text.clone(),
            position,
        });
        trace!(target: "state.undo", depth = self.snapshots.len(), lines = text.line_count(), "push_snapshot");
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        let snap = self.snapshots.pop_back();
        trace!(target: "state.undo", depth = self.snapshots.len(), hit = snap.is_some(), "pop_snapshot");
        snap
    }
}
