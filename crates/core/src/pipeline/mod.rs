//! Batch pipeline for concurrent file conversion.
//!
//! This module provides the `BatchProcessor`, which coordinates:
//! - Fan-out: one worker task per input file, bounded by a semaphore
//! - Per-job sequence: existence check, conversion, source deletion
//! - Fan-in: a single outcome channel drained by the coordinator
//!
//! The outcome channel closes only after every worker has exited, and
//! all reporting flows through the single drain stage rather than from
//! the workers themselves.
//!
//! # Example
//!
//! ```ignore
//! use svgmill_core::pipeline::{BatchConfig, BatchProcessor, BatchProgress};
//! use svgmill_core::converter::Pdf2SvgConverter;
//!
//! let processor = BatchProcessor::new(BatchConfig::default(), Pdf2SvgConverter::with_defaults());
//!
//! let (progress_tx, mut progress_rx) = tokio::sync::mpsc::channel(files.len());
//! let run = tokio::spawn(async move { processor.run(files, Some(progress_tx)).await });
//!
//! while let Some(progress) = progress_rx.recv().await {
//!     println!("{:?}", progress);
//! }
//! let report = run.await?;
//! ```

mod batch;
mod config;
mod types;

pub use batch::BatchProcessor;
pub use config::BatchConfig;
pub use types::{BatchProgress, BatchReport, ConvertedFile, FailedFile};
