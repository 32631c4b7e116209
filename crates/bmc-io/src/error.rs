//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Color type / bit depth combination the reader does not handle.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Bad file name pattern.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Decoded samples did not form a valid grid, or a crop failed.
    #[error(transparent)]
    Core(#[from] bmc_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
