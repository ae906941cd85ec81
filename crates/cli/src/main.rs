use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{error::ErrorKind, Parser};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svgmill_core::{
    load_config, scan_directory, BatchProcessor, BatchProgress, Config, Converter,
    Pdf2SvgConverter,
};

/// Batch-convert every PDF file in a directory to SVG.
///
/// Each source file is handed to the external pdf2svg tool; on success
/// the source PDF is deleted and the SVG is left next to it.
#[derive(Debug, Parser)]
#[command(name = "svgmill", version, about)]
struct Cli {
    /// Directory containing the PDF files to convert
    directory: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long, env = "SVGMILL_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Maximum number of concurrent conversions
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Path to the pdf2svg executable
    #[arg(long)]
    tool_path: Option<PathBuf>,

    /// Keep source PDF files instead of deleting them after conversion
    #[arg(long)]
    keep_sources: bool,
}

const EXIT_OK: u8 = 0;
const EXIT_FAIL: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "svgmill=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Any argument problem is a startup error and exits with code 1;
    // help and version requests are not errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Usage problems go to stdout like the rest of the
            // user-facing output.
            print!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(jobs) = cli.jobs {
        config.batch.max_parallel = jobs;
    }
    if let Some(tool_path) = cli.tool_path {
        config.converter.tool_path = tool_path;
    }
    if cli.keep_sources {
        config.batch.keep_sources = true;
    }

    let dir = &cli.directory;
    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => bail!("Not a directory: {}", dir.display()),
        Err(_) => bail!("Directory not found: {}", dir.display()),
    }

    let converter = Pdf2SvgConverter::new(config.converter.clone());

    let files = scan_directory(dir, converter.source_extension())
        .await
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    if files.is_empty() {
        println!("No PDF files found in the directory.");
        return Ok(EXIT_FAIL);
    }

    converter
        .validate()
        .await
        .context("Converter validation failed")?;

    debug!(count = files.len(), "Starting batch conversion");

    let total = files.len();
    let processor = BatchProcessor::new(config.batch.clone(), converter);
    let (progress_tx, mut progress_rx) = mpsc::channel(total);
    let run_handle = tokio::spawn(async move { processor.run(files, Some(progress_tx)).await });

    // Sole consumer of per-job outcomes; workers never print.
    while let Some(event) = progress_rx.recv().await {
        match event {
            BatchProgress::Converted(file) => {
                println!(
                    "Successfully converted {} to {}",
                    file.input_path.with_extension("").display(),
                    file.output_path.display()
                );
            }
            BatchProgress::Failed(file) => {
                println!("Error: {}", file.error);
            }
        }
    }

    let report = run_handle.await.context("Batch run aborted")?;
    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        duration_ms = report.duration_ms,
        "Batch complete"
    );

    if report.all_succeeded() {
        println!("All PDF files have been converted to SVG.");
        Ok(EXIT_OK)
    } else {
        println!(
            "Converted {} of {} PDF files; {} failed.",
            report.converted.len(),
            report.total(),
            report.failed.len()
        );
        Ok(EXIT_FAIL)
    }
}
