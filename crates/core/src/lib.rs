pub mod config;
pub mod converter;
pub mod pipeline;
pub mod scanner;
pub mod testing;

pub use config::{load_config, load_config_from_str, Config, ConfigError};
pub use converter::{
    derive_output_path, ConversionJob, ConversionResult, Converter, ConverterConfig,
    ConverterError, Pdf2SvgConverter, SOURCE_EXTENSION, TARGET_EXTENSION,
};
pub use pipeline::{
    BatchConfig, BatchProcessor, BatchProgress, BatchReport, ConvertedFile, FailedFile,
};
pub use scanner::{scan_directory, ScanError};
