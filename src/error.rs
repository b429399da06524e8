//! Error types for pixel filtering.

use thiserror::Error;

/// Error type for filter lookup and application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A filter read a channel the pixel does not have.
    #[error("channel index {index} out of range for pixel with {channels} channel(s)")]
    ChannelOutOfRange { index: usize, channels: usize },

    /// A filter produced a pixel whose arity differs from the image's.
    #[error("filter produced {found} channel(s) but image pixels have {expected}")]
    ArityMismatch { expected: usize, found: usize },

    /// No catalog entry with this name.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Buffer length does not match the declared image shape.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Decoded image does not use 8-bit channels.
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
