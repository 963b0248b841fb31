//! Error types for hsvmask-core.

use thiserror::Error;

/// Result type alias for hsvmask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for hsvmask operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two images that must share dimensions do not.
    #[error("dimension mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// An image with zero width or height.
    #[error("image has no pixels")]
    EmptyImage,

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
