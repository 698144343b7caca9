//! Error types for relief I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for relief I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during relief I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// STL header text exceeds the fixed 80-byte field.
    #[error("header text is {length} bytes, the STL header field holds at most 80")]
    HeaderTooLong {
        /// Byte length of the rejected text.
        length: usize,
    },

    /// STL header text begins with "solid".
    ///
    /// Naive parsers treat a leading "solid" as the ASCII variant of the
    /// format, so the binary header must never start with it.
    #[error("binary STL header must not begin with \"solid\"")]
    ReservedHeaderPrefix,

    /// More facets than the format's 32-bit count field can hold.
    #[error("solid has {count} facets, more than the format's 32-bit count field")]
    FacetCountOverflow {
        /// Facet count of the rejected solid.
        count: usize,
    },

    /// A required grid header field is missing.
    #[error("missing grid header field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The grid body holds a different number of samples than the header
    /// promised.
    #[error("grid body has {got} samples, header promised {expected}")]
    SampleCountMismatch {
        /// Sample count promised by the header.
        expected: usize,
        /// Sample count actually present.
        got: usize,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
