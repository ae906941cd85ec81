//! Batch processor implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, error, warn};

use crate::converter::{ConversionJob, Converter};

use super::config::BatchConfig;
use super::types::{BatchProgress, BatchReport, ConvertedFile, FailedFile};

/// Coordinates a pool of conversion workers over a set of input files.
///
/// One worker task is spawned per input, gated by a semaphore sized
/// from [`BatchConfig::max_parallel`]. Outcomes are funneled through a
/// single channel drained by the coordinator, so workers never write
/// to any shared sink directly.
pub struct BatchProcessor<C: Converter> {
    config: BatchConfig,
    converter: Arc<C>,
}

impl<C: Converter + 'static> BatchProcessor<C> {
    /// Creates a new batch processor.
    pub fn new(config: BatchConfig, converter: C) -> Self {
        Self {
            config,
            converter: Arc::new(converter),
        }
    }

    /// Runs every input through the conversion pipeline and returns
    /// the aggregate outcome.
    ///
    /// Per-job outcomes are forwarded to `progress_tx` (when provided)
    /// in completion order. The call returns only after every worker
    /// has exited; the outcome stream terminates deterministically
    /// because the workers hold the only senders.
    pub async fn run(
        &self,
        inputs: Vec<PathBuf>,
        progress_tx: Option<mpsc::Sender<BatchProgress>>,
    ) -> BatchReport {
        let start = Instant::now();
        let total = inputs.len();
        let mut report = BatchReport::default();

        if total == 0 {
            return report;
        }

        let permits = self.config.max_parallel.max(1).min(total);
        let semaphore = Arc::new(Semaphore::new(permits));
        // Capacity equals the job count so no send ever blocks.
        let (outcome_tx, mut outcome_rx) = mpsc::channel::<BatchProgress>(total);

        debug!(total, permits, "Dispatching conversion jobs");

        let mut handles = Vec::with_capacity(total);
        for (idx, input) in inputs.into_iter().enumerate() {
            let converter = Arc::clone(&self.converter);
            let semaphore = Arc::clone(&semaphore);
            let outcome_tx = outcome_tx.clone();
            let keep_sources = self.config.keep_sources;

            handles.push(tokio::spawn(async move {
                // The semaphore is never closed while workers exist.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore closed during batch run");
                let outcome =
                    process_input(idx, input, converter.as_ref(), keep_sources).await;
                let _ = outcome_tx.send(outcome).await;
            }));
        }

        // The workers now hold the only senders: the channel closes
        // exactly when the last worker has exited, panicked workers
        // included.
        drop(outcome_tx);

        while let Some(outcome) = outcome_rx.recv().await {
            match &outcome {
                BatchProgress::Converted(file) => report.converted.push(file.clone()),
                BatchProgress::Failed(file) => report.failed.push(file.clone()),
            }
            if let Some(ref tx) = progress_tx {
                let _ = tx.send(outcome).await;
            }
        }

        // Explicit join barrier; the drain above already finished, so
        // this only surfaces panics.
        for handle in handles {
            if let Err(e) = handle.await {
                error!("Conversion worker panicked: {}", e);
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        report
    }
}

/// Runs the full per-job sequence: existence check, conversion, source
/// deletion. Every failure is reported and abandons only this job.
async fn process_input<C: Converter>(
    idx: usize,
    input: PathBuf,
    converter: &C,
    keep_sources: bool,
) -> BatchProgress {
    if !tokio::fs::try_exists(&input).await.unwrap_or(false) {
        warn!(input = %input.display(), "Source file vanished before processing");
        return BatchProgress::Failed(FailedFile {
            input_path: input.clone(),
            error: format!("File not found: {}", input.display()),
        });
    }

    let job = ConversionJob::new(format!("job-{idx}"), input.clone());
    let output_path = job.output_path.clone();

    let result = match converter.convert(job).await {
        Ok(result) => result,
        Err(e) => {
            warn!(input = %input.display(), error = %e, "Conversion failed");
            return BatchProgress::Failed(FailedFile {
                input_path: input.clone(),
                error: format!("Conversion failed for {}: {}", input.display(), e),
            });
        }
    };

    // Deletion is the last step so a failure anywhere earlier never
    // loses the source. If deletion itself fails the output artifact
    // is retained, not rolled back.
    if !keep_sources {
        if let Err(e) = tokio::fs::remove_file(&input).await {
            warn!(input = %input.display(), error = %e, "Failed to remove source file");
            return BatchProgress::Failed(FailedFile {
                input_path: input.clone(),
                error: format!("Failed to remove source file {}: {}", input.display(), e),
            });
        }
    }

    debug!(
        input = %input.display(),
        output = %output_path.display(),
        "Job complete"
    );

    BatchProgress::Converted(ConvertedFile {
        input_path: input,
        output_path: result.output_path,
        output_size_bytes: result.output_size_bytes,
    })
}
