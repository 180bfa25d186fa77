use std::path::PathBuf;

use serde::Deserialize;

use crate::disc::DiscCapacity;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mdfit/config.toml` or `~/.config/mdfit/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MDFIT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub discs: DiscSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File name suffix that marks a candidate file (case-sensitive, exact).
    pub extension: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extension: ".mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscSettings {
    /// Reference capacities (`label`, `minutes`), rendered top to bottom.
    pub capacities: Vec<DiscCapacity>,
}

impl Default for DiscSettings {
    fn default() -> Self {
        Self {
            capacities: DiscCapacity::defaults(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Where the folder chooser opens before any folder has been picked.
    /// Falls back to the working directory.
    pub start_dir: Option<PathBuf>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " MP3 Duration Calculator ".to_string(),
            start_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `mdfit=debug`. `RUST_LOG` wins.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/mdfit/mdfit.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
