use core_config::{Config, Keybinds, LineEndingPolicy};
use core_render::{GUTTER_WIDTH, Numbering, Padding};
use core_state::HISTORY_DEFAULT_SIZE;

/// Construction-time settings for an `Editor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub keybinds: Keybinds,
    pub line_ending: LineEndingPolicy,
    pub history_size: usize,
    pub line_numbers: bool,
    pub relative_numbers: bool,
    pub status_bar: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            keybinds: Keybinds::default(),
            line_ending: LineEndingPolicy::default(),
            history_size: HISTORY_DEFAULT_SIZE,
            line_numbers: false,
            relative_numbers: false,
            status_bar: true,
        }
    }
}

impl EditorOptions {
    pub fn from_config(cfg: &Config) -> Self {
        let display = &cfg.file.display;
        Self {
            keybinds: cfg.keybinds,
            line_ending: cfg.line_ending_policy(),
            history_size: cfg.history_size(),
            line_numbers: display.line_numbers,
            relative_numbers: display.relative_numbers,
            status_bar: display.status_bar,
        }
    }

    /// Relative numbering implies the gutter.
    pub fn gutter(&self) -> Option<Numbering> {
        if self.relative_numbers {
            Some(Numbering::Relative)
        } else if self.line_numbers {
            Some(Numbering::Absolute)
        } else {
            None
        }
    }

    pub fn padding(&self) -> Padding {
        Padding {
            top: 0,
            bottom: u16::from(self.status_bar),
            left: if self.gutter().is_some() { GUTTER_WIDTH } else { 0 },
            right: 0,
        }
    }
}
