//! Configuration for the converter module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the pdf2svg-based converter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Path to the pdf2svg binary.
    #[serde(default = "default_tool_path")]
    pub tool_path: PathBuf,

    /// Additional arguments appended after the input/output paths.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_tool_path() -> PathBuf {
    PathBuf::from("pdf2svg")
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            tool_path: default_tool_path(),
            extra_args: Vec::new(),
        }
    }
}

impl ConverterConfig {
    /// Creates a new config with a custom tool path.
    pub fn with_tool_path(tool_path: PathBuf) -> Self {
        Self {
            tool_path,
            ..Default::default()
        }
    }

    /// Sets the additional arguments.
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }
}
