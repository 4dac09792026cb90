//! Error types for pcbtrace.

use thiserror::Error;

/// Result alias for pcbtrace operations.
pub type PcbResult<T> = std::result::Result<T, PcbError>;

/// Errors that can occur when loading inputs or running detection.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PcbError {
    /// The template library is shorter than its declared record layout.
    #[error("malformed template library: need {needed} bytes, got {got}")]
    MalformedLibrary { needed: usize, got: usize },
    /// An index is outside of its valid range.
    #[error("{context} index {index} out of range (len {len})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        context: &'static str,
    },
    /// The source image could not be decoded.
    #[error("unreadable image: {reason}")]
    UnreadableImage { reason: String },
    /// Width or height is zero or overflows the address space.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer does not hold enough elements.
    #[error("buffer too small: need {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A library can hold at most 255 templates.
    #[error("too many templates for one library: {count} (max 255)")]
    TooManyTemplates { count: usize },
}
