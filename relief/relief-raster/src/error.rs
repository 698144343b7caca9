//! Error types for raster preprocessing.

use thiserror::Error;

/// Result type for raster preprocessing operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors that can occur during raster preprocessing.
#[derive(Debug, Error)]
pub enum RasterError {
    /// No input grids were supplied to a combine operation.
    #[error("no input grids to combine")]
    EmptyInput,

    /// Grids to be stacked have differing column counts.
    #[error("grid {index} has {got} columns, expected {expected}")]
    ColumnMismatch {
        /// Index of the offending grid in the input slice.
        index: usize,
        /// Column count of the first grid.
        expected: usize,
        /// Column count of the offending grid.
        got: usize,
    },

    /// Gaussian sigma is not a finite positive number.
    #[error("invalid gaussian sigma: {sigma}")]
    InvalidSigma {
        /// The rejected sigma value.
        sigma: f64,
    },

    /// Clip range has min above max or a NaN bound.
    #[error("invalid clip range: min {min} .. max {max}")]
    InvalidRange {
        /// Lower clip bound.
        min: f64,
        /// Upper clip bound.
        max: f64,
    },

    /// Vertical size is not a finite non-negative number.
    #[error("invalid vertical size: {size}")]
    InvalidVerticalSize {
        /// The rejected vertical size.
        size: f64,
    },

    /// Base thickness is not a finite non-negative number.
    #[error("invalid base thickness: {base}")]
    InvalidBase {
        /// The rejected base value.
        base: f64,
    },
}
