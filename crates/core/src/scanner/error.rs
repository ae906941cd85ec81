//! Error types for the scanner module.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while enumerating conversion candidates.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory does not exist.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The directory could not be read.
    #[error("Failed to read directory {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub(crate) fn read_failed(path: &Path, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}
