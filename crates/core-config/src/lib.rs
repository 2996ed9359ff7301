//! Configuration loading and parsing.
//!
//! Parses `termpad.toml` (or an override path provided by the binary). Every
//! section and field is optional; missing values take the defaults below.
//! A file that fails to parse is reported with a warning and replaced by
//! defaults, while a file that parses but carries invalid values (zero history
//! size, malformed or clashing key bindings) is rejected with [`ConfigError`].
//!
//! ```toml
//! [history]
//! stack_size = 256
//! [keybinds]
//! save = "s"
//! exit = "x"
//! undo = "z"
//! [text]
//! line_ending = "detected"   # detected | platform | lf | crlf
//! [display]
//! line_numbers = false
//! relative_numbers = false
//! status_bar = true
//! [cursor]
//! style = "default"
//! ```
//!
//! Values are handed to each component at construction; nothing reads the
//! configuration from global state.

pub mod keybinds;

pub use keybinds::Keybinds;

use core_text::LineEnding;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "termpad.toml";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("history stack size must be greater than zero")]
    InvalidHistorySize,
    #[error("keybind `{value}` for {action} must be a single printable character")]
    InvalidKeybind { action: &'static str, value: String },
    #[error("keybind `{key}` is assigned to both {first} and {second}")]
    AmbiguousKeybind {
        key: char,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default = "HistoryConfig::default_stack_size")]
    pub stack_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            stack_size: Self::default_stack_size(),
        }
    }
}

impl HistoryConfig {
    const fn default_stack_size() -> usize {
        256
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct KeybindsConfig {
    #[serde(default = "KeybindsConfig::default_save")]
    pub save: String,
    #[serde(default = "KeybindsConfig::default_exit")]
    pub exit: String,
    #[serde(default = "KeybindsConfig::default_undo")]
    pub undo: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        Self {
            save: Self::default_save(),
            exit: Self::default_exit(),
            undo: Self::default_undo(),
        }
    }
}

impl KeybindsConfig {
    fn default_save() -> String {
        "s".into()
    }
    fn default_exit() -> String {
        "x".into()
    }
    fn default_undo() -> String {
        "z".into()
    }
}

/// Which separator `save` writes between lines.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingPolicy {
    /// Keep whatever the file used when it was loaded.
    #[default]
    Detected,
    /// Native separator of the running platform.
    Platform,
    Lf,
    Crlf,
}

impl LineEndingPolicy {
    pub fn resolve(self, detected: LineEnding) -> LineEnding {
        match self {
            LineEndingPolicy::Detected => detected,
            LineEndingPolicy::Platform => LineEnding::platform(),
            LineEndingPolicy::Lf => LineEnding::Lf,
            LineEndingPolicy::Crlf => LineEnding::CrLf,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TextConfig {
    #[serde(default)]
    pub line_ending: LineEndingPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default)]
    pub line_numbers: bool,
    #[serde(default)]
    pub relative_numbers: bool,
    #[serde(default = "DisplayConfig::default_status_bar")]
    pub status_bar: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            line_numbers: false,
            relative_numbers: false,
            status_bar: Self::default_status_bar(),
        }
    }
}

impl DisplayConfig {
    const fn default_status_bar() -> bool {
        true
    }
}

/// Terminal cursor shape requested at startup.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Default,
    BlinkingBlock,
    SteadyBlock,
    BlinkingBar,
    SteadyBar,
    BlinkingUnderscore,
    SteadyUnderscore,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CursorConfig {
    #[serde(default)]
    pub style: CursorStyle,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub keybinds: KeybindsConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub cursor: CursorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,   // parsed (or default) data
    pub keybinds: Keybinds, // validated from `file.keybinds`
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("termpad").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_defaults_no_file");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            let cfg = Config::from_file(file)?;
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(cfg)
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Validate a parsed file and derive the runtime values.
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        if file.history.stack_size == 0 {
            return Err(ConfigError::InvalidHistorySize);
        }
        let keybinds = Keybinds::from_config(&file.keybinds)?;
        Ok(Self { file, keybinds })
    }

    pub fn history_size(&self) -> usize {
        self.file.history.stack_size
    }

    pub fn line_ending_policy(&self) -> LineEndingPolicy {
        self.file.text.line_ending
    }
}
