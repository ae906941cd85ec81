//! Converter module for turning PDF files into SVG files.
//!
//! This module provides the `Converter` trait and the `Pdf2SvgConverter`
//! implementation, which delegates the actual conversion to the external
//! `pdf2svg` command-line tool invoked as a subprocess.
//!
//! # Example
//!
//! ```ignore
//! use svgmill_core::converter::{Converter, ConversionJob, ConverterConfig, Pdf2SvgConverter};
//!
//! let converter = Pdf2SvgConverter::new(ConverterConfig::default());
//!
//! // Validate pdf2svg is available
//! converter.validate().await?;
//!
//! // Convert a single file
//! let job = ConversionJob::new("job-1", PathBuf::from("/docs/report.pdf"));
//! let result = converter.convert(job).await?;
//! println!("Wrote {} in {} ms", result.output_path.display(), result.duration_ms);
//! ```

mod config;
mod error;
mod pdf2svg;
mod traits;
mod types;

pub use config::ConverterConfig;
pub use error::ConverterError;
pub use pdf2svg::Pdf2SvgConverter;
pub use traits::Converter;
pub use types::{
    derive_output_path, ConversionJob, ConversionResult, SOURCE_EXTENSION, TARGET_EXTENSION,
};
