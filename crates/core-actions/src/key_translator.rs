//! KeyTranslator: stateless key -> Action mapping.
//!
//! * `Ctrl+<char>` matches the configured save/exit/undo bindings
//!   (case-insensitive); `Ctrl+Left` / `Ctrl+Right` are word jumps.
//! * Unmodified or Shift-only keys map to editing and arrow motions.
//! * Alt chords and unmapped keys yield `None` and are ignored by the loop.

use crate::{Action, MotionKind};
use core_config::Keybinds;
use core_events::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy)]
pub struct KeyTranslator {
    keybinds: Keybinds,
}

impl KeyTranslator {
    pub fn new(keybinds: Keybinds) -> Self {
        Self { keybinds }
    }

    pub fn translate(&self, key: &KeyEvent) -> Option<Action> {
        if key.mods.contains(KeyModifiers::ALT) {
            return None;
        }
        if key.mods.contains(KeyModifiers::CTRL) {
            return self.translate_ctrl(key.code);
        }
        match key.code {
            KeyCode::Char(c) if !c.is_control() => Some(Action::InsertChar(c)),
            KeyCode::Enter => Some(Action::SplitLine),
            KeyCode::Backspace => Some(Action::DeleteBackward),
            KeyCode::Delete => Some(Action::DeleteForward),
            KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
            KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
            KeyCode::Up => Some(Action::Motion(MotionKind::Up)),
            KeyCode::Down => Some(Action::Motion(MotionKind::Down)),
            _ => None,
        }
    }

    fn translate_ctrl(&self, code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                if c == self.keybinds.save {
                    Some(Action::Save)
                } else if c == self.keybinds.exit {
                    Some(Action::Exit)
                } else if c == self.keybinds.undo {
                    Some(Action::Undo)
                } else {
                    None
                }
            }
            KeyCode::Left => Some(Action::Motion(MotionKind::WordLeft)),
            KeyCode::Right => Some(Action::Motion(MotionKind::WordRight)),
            _ => None,
        }
    }
}
