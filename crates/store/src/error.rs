//! Storage engine error types.

use darkroom_formats::FormatError;
use thiserror::Error;

/// Errors produced by the storage engine.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No configured format decodes the requested media type.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// A format rejected the payload bytes.
    #[error("decode failed: {0}")]
    Decode(#[source] FormatError),

    /// Encoding a variant into its target file failed. Files written
    /// before the failure remain on disk.
    #[error("encode failed for {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: FormatError,
    },

    /// Malformed data-URL input.
    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// The checksum, or the named variant under it, is not stored.
    #[error("not found: {0}")]
    NotFound(String),

    /// Filesystem failure other than absence, e.g. permission denied.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid store configuration.
    #[error("configuration error: {0}")]
    Config(#[from] darkroom_core::Error),
}

/// Result type for storage engine operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
