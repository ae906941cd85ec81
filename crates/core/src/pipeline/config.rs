//! Configuration for the batch pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for a batch conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum parallel conversions. A worker task is spawned per
    /// input file, but at most this many run at once.
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,

    /// Keep source files after successful conversion.
    #[serde(default)]
    pub keep_sources: bool,
}

fn default_max_parallel() -> usize {
    4
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_parallel: default_max_parallel(),
            keep_sources: false,
        }
    }
}

impl BatchConfig {
    /// Sets the maximum parallel conversions.
    pub fn with_max_parallel(mut self, max: usize) -> Self {
        self.max_parallel = max;
        self
    }

    /// Sets whether source files are kept after conversion.
    pub fn with_keep_sources(mut self, keep: bool) -> Self {
        self.keep_sources = keep;
        self
    }
}
