use std::path::PathBuf;

/// Failure of a whole folder scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("no files ending in '{extension}' found in {}", .dir.display())]
    NoFilesFound { dir: PathBuf, extension: String },
    #[error("cannot read folder {}: {source}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Failure to pull a duration out of one file. Never fatal to a scan.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
    /// For `DurationDecoder` implementations that do not go through `lofty`.
    #[allow(dead_code)]
    #[error("{0}")]
    Other(String),
}
