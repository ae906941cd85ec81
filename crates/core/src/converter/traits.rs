//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::ConverterError;
use super::types::{ConversionJob, ConversionResult, SOURCE_EXTENSION, TARGET_EXTENSION};

/// A converter that can turn one source file into one output file.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Converts a single file according to the job specification,
    /// waiting until the conversion has finished.
    async fn convert(&self, job: ConversionJob) -> Result<ConversionResult, ConverterError>;

    /// Validates that the converter is properly configured and ready.
    async fn validate(&self) -> Result<(), ConverterError>;

    /// Extension of the files this converter accepts.
    fn source_extension(&self) -> &str {
        SOURCE_EXTENSION
    }

    /// Extension of the files this converter produces.
    fn target_extension(&self) -> &str {
        TARGET_EXTENSION
    }
}
