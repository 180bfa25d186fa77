use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::error::ScanError;

// Compared as raw bytes so names that are not valid UTF-8 still match.
fn is_candidate(path: &Path, settings: &LibrarySettings) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(settings.extension.as_bytes()))
}

/// List the direct entries of `dir` whose name ends with the configured
/// extension. Subdirectories are not entered.
///
/// Fails only when `dir` itself cannot be read; entries that cannot be
/// inspected are logged and skipped.
pub fn candidate_files(
    dir: &Path,
    settings: &LibrarySettings,
) -> Result<Vec<PathBuf>, ScanError> {
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the folder itself: nothing below it is readable either.
            Err(e) if e.depth() == 0 => {
                return Err(ScanError::ReadDir {
                    dir: dir.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if is_candidate(entry.path(), settings) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
