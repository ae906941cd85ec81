//! pdf2svg-based converter implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

use super::config::ConverterConfig;
use super::error::ConverterError;
use super::traits::Converter;
use super::types::{ConversionJob, ConversionResult};

/// Converter that shells out to the external `pdf2svg` tool.
///
/// The tool is invoked as `pdf2svg <input> <output>` and its exit
/// status is the sole success signal. No per-job timeout is applied;
/// a conversion runs until the subprocess exits.
pub struct Pdf2SvgConverter {
    config: ConverterConfig,
}

impl Pdf2SvgConverter {
    /// Creates a new converter with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    async fn run_conversion(
        &self,
        job: &ConversionJob,
    ) -> Result<ConversionResult, ConverterError> {
        let start = Instant::now();

        if !tokio::fs::try_exists(&job.input_path).await.unwrap_or(false) {
            return Err(ConverterError::InputNotFound {
                path: job.input_path.clone(),
            });
        }

        debug!(
            job_id = %job.job_id,
            input = %job.input_path.display(),
            output = %job.output_path.display(),
            "Invoking converter"
        );

        let output = Command::new(&self.config.tool_path)
            .arg(&job.input_path)
            .arg(&job.output_path)
            .args(&self.config.extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConverterError::ToolNotFound {
                        path: self.config.tool_path.clone(),
                    }
                } else {
                    ConverterError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConverterError::conversion_failed(
                format!("pdf2svg exited with code: {:?}", output.status.code()),
                if stderr.is_empty() {
                    None
                } else {
                    Some(stderr.into_owned())
                },
            ));
        }

        // Verify output exists and get its size
        let output_meta = tokio::fs::metadata(&job.output_path)
            .await
            .map_err(|_| ConverterError::conversion_failed("Output file not created", None))?;

        Ok(ConversionResult {
            job_id: job.job_id.clone(),
            input_path: job.input_path.clone(),
            output_path: job.output_path.clone(),
            output_size_bytes: output_meta.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[async_trait]
impl Converter for Pdf2SvgConverter {
    fn name(&self) -> &str {
        "pdf2svg"
    }

    async fn convert(&self, job: ConversionJob) -> Result<ConversionResult, ConverterError> {
        self.run_conversion(&job).await
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        // pdf2svg exits non-zero when run without arguments; only a
        // launch failure matters here.
        let result = Command::new(&self.config.tool_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConverterError::ToolNotFound {
                    path: self.config.tool_path.clone(),
                })
            }
            Err(e) => Err(ConverterError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_stub_tool(dir: &TempDir, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join(name);
        std::fs::write(&path, script).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[tokio::test]
    async fn test_input_not_found() {
        let converter = Pdf2SvgConverter::with_defaults();
        let job = ConversionJob::new("j1", PathBuf::from("/nonexistent/input.pdf"));

        let result = converter.convert(job).await;
        assert!(matches!(result, Err(ConverterError::InputNotFound { .. })));
    }

    #[tokio::test]
    async fn test_tool_not_found() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.pdf");
        std::fs::write(&input, b"%PDF-1.4").unwrap();

        let converter = Pdf2SvgConverter::new(ConverterConfig::with_tool_path(PathBuf::from(
            "/nonexistent/svgmill-no-such-tool",
        )));
        let result = converter.convert(ConversionJob::new("j1", input)).await;
        assert!(matches!(result, Err(ConverterError::ToolNotFound { .. })));
    }

    #[tokio::test]
    async fn test_validate_tool_not_found() {
        let converter = Pdf2SvgConverter::new(ConverterConfig::with_tool_path(PathBuf::from(
            "/nonexistent/svgmill-no-such-tool",
        )));
        let result = converter.validate().await;
        assert!(matches!(result, Err(ConverterError::ToolNotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_convert_with_stub_tool() {
        let dir = TempDir::new().unwrap();
        let tool = write_stub_tool(&dir, "fake-pdf2svg", "#!/bin/sh\ncp \"$1\" \"$2\"\n");

        let input = dir.path().join("doc.pdf");
        std::fs::write(&input, b"%PDF-1.4 stub content").unwrap();

        let converter = Pdf2SvgConverter::new(ConverterConfig::with_tool_path(tool));
        let result = converter
            .convert(ConversionJob::new("j1", input.clone()))
            .await
            .unwrap();

        assert_eq!(result.output_path, dir.path().join("doc.svg"));
        assert!(result.output_path.exists());
        assert!(result.output_size_bytes > 0);
        // The converter itself never touches the source.
        assert!(input.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_convert_nonzero_exit_captures_stderr() {
        let dir = TempDir::new().unwrap();
        let tool = write_stub_tool(
            &dir,
            "fake-pdf2svg",
            "#!/bin/sh\necho 'corrupt document' >&2\nexit 3\n",
        );

        let input = dir.path().join("doc.pdf");
        std::fs::write(&input, b"%PDF-1.4").unwrap();

        let converter = Pdf2SvgConverter::new(ConverterConfig::with_tool_path(tool));
        let result = converter.convert(ConversionJob::new("j1", input)).await;

        match result {
            Err(ConverterError::ConversionFailed { reason, stderr }) => {
                assert!(reason.contains("3"));
                assert!(stderr.unwrap().contains("corrupt document"));
            }
            other => panic!("Expected ConversionFailed, got {:?}", other.map(|r| r.job_id)),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_convert_missing_output_is_failure() {
        let dir = TempDir::new().unwrap();
        // Tool exits zero without producing anything.
        let tool = write_stub_tool(&dir, "fake-pdf2svg", "#!/bin/sh\nexit 0\n");

        let input = dir.path().join("doc.pdf");
        std::fs::write(&input, b"%PDF-1.4").unwrap();

        let converter = Pdf2SvgConverter::new(ConverterConfig::with_tool_path(tool));
        let result = converter.convert(ConversionJob::new("j1", input)).await;
        assert!(matches!(
            result,
            Err(ConverterError::ConversionFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_validate_with_stub_tool() {
        let dir = TempDir::new().unwrap();
        // Mimics pdf2svg: exits non-zero when called without arguments.
        let tool = write_stub_tool(&dir, "fake-pdf2svg", "#!/bin/sh\nexit 1\n");

        let converter = Pdf2SvgConverter::new(ConverterConfig::with_tool_path(tool));
        assert!(converter.validate().await.is_ok());
    }
}
