use std::path::Path;

use crate::config::LibrarySettings;

use super::decode::DurationDecoder;
use super::error::ScanError;
use super::scan::candidate_files;

/// Result of one folder scan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregate {
    /// Sum of every successfully decoded duration, in seconds.
    pub total_seconds: f64,
    pub decoded: usize,
    pub failed: usize,
}

impl Aggregate {
    fn add(mut self, seconds: f64) -> Self {
        self.total_seconds += seconds;
        self.decoded += 1;
        self
    }

    fn skip(mut self) -> Self {
        self.failed += 1;
        self
    }
}

/// Sum the durations of every candidate file directly inside `dir`.
///
/// Returns `NoFilesFound` before decoding anything when there are no
/// candidates. Files that fail to decode are logged and count as zero, so a
/// folder where every file is broken still yields `Ok` with a zero total.
pub fn compute_total_duration(
    dir: &Path,
    settings: &LibrarySettings,
    decoder: &dyn DurationDecoder,
) -> Result<Aggregate, ScanError> {
    let files = candidate_files(dir, settings)?;
    if files.is_empty() {
        return Err(ScanError::NoFilesFound {
            dir: dir.to_path_buf(),
            extension: settings.extension.clone(),
        });
    }

    let aggregate = files
        .iter()
        .fold(Aggregate::default(), |acc, path| match decoder.decode(path) {
            Ok(seconds) => {
                tracing::debug!(file = %path.display(), seconds, "decoded");
                acc.add(seconds)
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "error processing file");
                acc.skip()
            }
        });

    tracing::info!(
        dir = %dir.display(),
        total_seconds = aggregate.total_seconds,
        decoded = aggregate.decoded,
        failed = aggregate.failed,
        "scan finished"
    );
    Ok(aggregate)
}
