//! Test doubles for the public traits.

mod mock_converter;

pub use mock_converter::{MockConverter, RecordedConversion};
