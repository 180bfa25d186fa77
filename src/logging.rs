//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so records go to a file instead of
//! stderr. `RUST_LOG` overrides the configured level.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the log file path in use, or
/// `None` when no file could be opened and logging is off.
pub fn init(settings: &LoggingSettings) -> Option<PathBuf> {
    let path = settings.file.clone().or_else(default_log_path)?;

    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(_) => return None,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&settings.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    installed.then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("mdfit").join("mdfit.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn bad_level_falls_back_instead_of_failing() {
        // Must not panic on a directive that does not parse.
        let _ = build_filter("=[not a directive");
    }
}
