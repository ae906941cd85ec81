//! Types for the batch pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A successfully converted file. Unless the run keeps sources, the
/// source file has already been deleted when this is emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertedFile {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub output_size_bytes: u64,
}

/// A job abandoned after a non-fatal failure. The source file is
/// retained so the run can be repeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedFile {
    pub input_path: PathBuf,
    pub error: String,
}

/// Per-job outcome events, emitted in completion order.
///
/// Completion order is unrelated to enumeration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BatchProgress {
    Converted(ConvertedFile),
    Failed(FailedFile),
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
    pub duration_ms: u64,
}

impl BatchReport {
    /// Total number of jobs that produced an outcome.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Whether every job succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}
