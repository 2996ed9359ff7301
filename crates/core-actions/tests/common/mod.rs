#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Action, DispatchOutcome, Dispatcher, KeyTranslator};
use core_config::{Keybinds, LineEndingPolicy};
use core_events::{KeyCode, KeyEvent};
use core_state::{EditorState, History};
use core_text::{Position, Text};
use std::path::Path;

/// Editor state over `content` with the cursor at `(column, row)`.
pub fn state_at(content: &str, column: usize, row: usize) -> EditorState {
    state_for_path(content, "scratch.txt", column, row)
}

pub fn state_for_path(
    content: &str,
    path: impl AsRef<Path>,
    column: usize,
    row: usize,
) -> EditorState {
    let mut st = EditorState::new(
        Text::load(content, false),
        path.as_ref(),
        true,
        History::new(32),
    );
    st.cursor
        .set_position(Position::new(column, row))
        .expect("valid start position");
    st
}

pub struct Harness {
    pub translator: KeyTranslator,
    pub dispatcher: Dispatcher,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_policy(LineEndingPolicy::Detected)
    }

    pub fn with_policy(policy: LineEndingPolicy) -> Self {
        Self {
            translator: KeyTranslator::new(Keybinds::default()),
            dispatcher: Dispatcher::new(policy),
        }
    }

    /// Translate and dispatch one key; unmapped keys yield `None`.
    pub fn press(&mut self, st: &mut EditorState, key: KeyEvent) -> Option<DispatchOutcome> {
        let action = self.translator.translate(&key)?;
        Some(self.dispatch(st, action))
    }

    pub fn dispatch(&mut self, st: &mut EditorState, action: Action) -> DispatchOutcome {
        self.dispatcher.dispatch(st, action).expect("dispatch")
    }

    pub fn type_str(&mut self, st: &mut EditorState, s: &str) {
        for ch in s.chars() {
            self.press(st, KeyEvent::plain(KeyCode::Char(ch)));
        }
    }
}

pub fn body(st: &EditorState) -> String {
    st.text.serialize("\n")
}
