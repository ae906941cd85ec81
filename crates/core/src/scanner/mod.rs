//! Directory scanning for conversion candidates.
//!
//! The scanner lists eligible source files in a single directory,
//! non-recursively. An empty result is not an error; callers decide
//! how to report a directory with nothing to convert.

mod error;

pub use error::ScanError;

use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists regular files in `dir` whose name case-insensitively ends in
/// `.<extension>`.
///
/// Subdirectories are skipped even when their names match. Returns an
/// error only when the directory itself is missing, is not a
/// directory, or cannot be read.
pub async fn scan_directory(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = tokio::fs::metadata(dir).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ScanError::DirectoryNotFound {
                path: dir.to_path_buf(),
            }
        } else {
            ScanError::read_failed(dir, e)
        }
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let suffix = format!(".{}", extension.to_lowercase());
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ScanError::read_failed(dir, e))?;

    let mut matches = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ScanError::read_failed(dir, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| ScanError::read_failed(dir, e))?;
        if file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        if name.to_string_lossy().to_lowercase().ends_with(&suffix) {
            matches.push(entry.path());
        }
    }

    debug!(
        dir = %dir.display(),
        count = matches.len(),
        "Directory scan complete"
    );

    Ok(matches)
}
