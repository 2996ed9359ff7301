//! Ctrl-chord key bindings.
//!
//! Each binding is configured as a one-character string and matched
//! case-insensitively against `Ctrl+<char>` presses.

use crate::{ConfigError, KeybindsConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinds {
    pub save: char,
    pub exit: char,
    pub undo: char,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            save: 's',
            exit: 'x',
            undo: 'z',
        }
    }
}

impl Keybinds {
    pub fn from_config(cfg: &KeybindsConfig) -> Result<Self, ConfigError> {
        let mut taken: Vec<(char, &'static str)> = Vec::with_capacity(3);
        let save = parse_keybind("save", &cfg.save, &mut taken)?;
        let exit = parse_keybind("exit", &cfg.exit, &mut taken)?;
        let undo = parse_keybind("undo", &cfg.undo, &mut taken)?;
        Ok(Self { save, exit, undo })
    }
}

fn parse_keybind(
    action: &'static str,
    value: &str,
    taken: &mut Vec<(char, &'static str)>,
) -> Result<char, ConfigError> {
    let invalid = || ConfigError::InvalidKeybind {
        action,
        value: value.to_string(),
    };
    let mut chars = value.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => c.to_ascii_lowercase(),
        _ => return Err(invalid()),
    };
    if let Some((_, first)) = taken.iter().find(|(k, _)| *k == ch) {
        return Err(ConfigError::AmbiguousKeybind {
            key: ch,
            first,
            second: action,
        });
    }
    taken.push((ch, action));
    Ok(ch)
}
