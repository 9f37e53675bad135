//! Codec error types.

use thiserror::Error;

/// Errors produced by format capabilities.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("decode failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("encode failed: {0}")]
    Encode(#[source] image::ImageError),
}

/// Result type for format operations.
pub type FormatResult<T> = std::result::Result<T, FormatError>;
