//! Error types for ranger-common.

use thiserror::Error;

/// Common error type for Ranger operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Unrecognized byte order name.
    #[error("unknown byte order {0:?} (expected \"little\" or \"big\")")]
    InvalidEndian(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
