//! Types for the converter module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File extension of conversion source files.
pub const SOURCE_EXTENSION: &str = "pdf";

/// File extension produced by the converter.
pub const TARGET_EXTENSION: &str = "svg";

/// Derives the output path for an input by swapping its final
/// extension for the target extension.
///
/// An input with no extension keeps its full name and gains `.svg`,
/// so `report` becomes `report.svg` just like `report.pdf` does. A
/// bare dot-file such as `.pdf` counts as extension-less, so it
/// becomes `.pdf.svg` rather than collapsing to `.svg`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(TARGET_EXTENSION)
}

/// A single conversion job: one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionJob {
    pub job_id: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionJob {
    /// Creates a job for the given input, deriving the output path.
    pub fn new(job_id: impl Into<String>, input_path: PathBuf) -> Self {
        let output_path = derive_output_path(&input_path);
        Self {
            job_id: job_id.into(),
            input_path,
            output_path,
        }
    }
}

/// The outcome of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub job_id: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub output_size_bytes: u64,
    pub duration_ms: u64,
}
