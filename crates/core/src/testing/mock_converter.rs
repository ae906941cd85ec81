//! Mock converter for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::converter::{ConversionJob, ConversionResult, Converter, ConverterError};

/// A recorded conversion job for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedConversion {
    /// The job that was submitted.
    pub job: ConversionJob,
    /// Whether the conversion succeeded.
    pub success: bool,
}

/// Mock implementation of the Converter trait.
///
/// Provides controllable behavior for testing:
/// - Track conversion jobs for assertions
/// - Inject a one-shot error or fail every job
/// - Simulate conversion time
/// - Optionally create the output file like the real tool does
#[derive(Debug, Clone)]
pub struct MockConverter {
    /// Recorded conversions.
    conversions: Arc<RwLock<Vec<RecordedConversion>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ConverterError>>>,
    /// If set, every conversion fails with this reason.
    fail_all: Arc<RwLock<Option<String>>>,
    /// Simulated conversion duration in milliseconds.
    conversion_duration_ms: Arc<RwLock<u64>>,
    /// Whether to write a stub output file on success.
    create_output: Arc<RwLock<bool>>,
}

impl Default for MockConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConverter {
    /// Create a new mock converter.
    pub fn new() -> Self {
        Self {
            conversions: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            fail_all: Arc::new(RwLock::new(None)),
            conversion_duration_ms: Arc::new(RwLock::new(0)),
            create_output: Arc::new(RwLock::new(false)),
        }
    }

    /// Get all recorded conversions.
    pub async fn recorded_conversions(&self) -> Vec<RecordedConversion> {
        self.conversions.read().await.clone()
    }

    /// Get the number of conversions attempted.
    pub async fn conversion_count(&self) -> usize {
        self.conversions.read().await.len()
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: ConverterError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every conversion fail with the given reason.
    pub async fn set_fail_all(&self, reason: impl Into<String>) {
        *self.fail_all.write().await = Some(reason.into());
    }

    /// Set the simulated conversion duration.
    pub async fn set_conversion_duration(&self, duration: Duration) {
        *self.conversion_duration_ms.write().await = duration.as_millis() as u64;
    }

    /// Write a stub output file on each successful conversion.
    pub async fn set_create_output(&self, create: bool) {
        *self.create_output.write().await = create;
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<ConverterError> {
        self.next_error.write().await.take()
    }
}

const STUB_OUTPUT: &[u8] = b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

#[async_trait]
impl Converter for MockConverter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn convert(&self, job: ConversionJob) -> Result<ConversionResult, ConverterError> {
        if let Some(err) = self.take_error().await {
            self.conversions.write().await.push(RecordedConversion {
                job,
                success: false,
            });
            return Err(err);
        }

        if let Some(reason) = self.fail_all.read().await.clone() {
            self.conversions.write().await.push(RecordedConversion {
                job,
                success: false,
            });
            return Err(ConverterError::conversion_failed(reason, None));
        }

        self.conversions.write().await.push(RecordedConversion {
            job: job.clone(),
            success: true,
        });

        let duration_ms = *self.conversion_duration_ms.read().await;
        if duration_ms > 0 {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
        }

        if *self.create_output.read().await {
            tokio::fs::write(&job.output_path, STUB_OUTPUT).await?;
        }

        Ok(ConversionResult {
            job_id: job.job_id,
            input_path: job.input_path,
            output_path: job.output_path,
            output_size_bytes: STUB_OUTPUT.len() as u64,
            duration_ms,
        })
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_job(id: &str) -> ConversionJob {
        ConversionJob::new(id, PathBuf::from("/input/test.pdf"))
    }

    #[tokio::test]
    async fn test_basic_conversion() {
        let converter = MockConverter::new();

        let result = converter.convert(create_test_job("test-1")).await.unwrap();
        assert_eq!(result.job_id, "test-1");
        assert_eq!(result.output_path, PathBuf::from("/input/test.svg"));
    }

    #[tokio::test]
    async fn test_recorded_conversions() {
        let converter = MockConverter::new();

        converter.convert(create_test_job("job-1")).await.unwrap();
        converter.convert(create_test_job("job-2")).await.unwrap();

        let conversions = converter.recorded_conversions().await;
        assert_eq!(conversions.len(), 2);
        assert!(conversions[0].success);
        assert_eq!(conversions[0].job.job_id, "job-1");
    }

    #[tokio::test]
    async fn test_error_injection_is_one_shot() {
        let converter = MockConverter::new();
        converter
            .set_next_error(ConverterError::conversion_failed("test error", None))
            .await;

        assert!(converter.convert(create_test_job("fail")).await.is_err());
        assert!(converter.convert(create_test_job("ok")).await.is_ok());

        let conversions = converter.recorded_conversions().await;
        assert_eq!(conversions.len(), 2);
        assert!(!conversions[0].success);
        assert!(conversions[1].success);
    }

    #[tokio::test]
    async fn test_fail_all() {
        let converter = MockConverter::new();
        converter.set_fail_all("always down").await;

        assert!(converter.convert(create_test_job("a")).await.is_err());
        assert!(converter.convert(create_test_job("b")).await.is_err());
        assert_eq!(converter.conversion_count().await, 2);
    }

    #[tokio::test]
    async fn test_create_output_writes_stub_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.pdf");
        std::fs::write(&input, b"x").unwrap();

        let converter = MockConverter::new();
        converter.set_create_output(true).await;

        let result = converter
            .convert(ConversionJob::new("j1", input))
            .await
            .unwrap();
        assert!(result.output_path.exists());
        assert_eq!(result.output_size_bytes, STUB_OUTPUT.len() as u64);
    }
}
