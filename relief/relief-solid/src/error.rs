//! Error types for solid generation.

use thiserror::Error;

/// Result type for solid generation operations.
pub type SolidResult<T> = Result<T, SolidError>;

/// Errors that can occur while turning a heightfield into a solid.
#[derive(Debug, Error)]
pub enum SolidError {
    /// The grid is too small to form any closed cell.
    ///
    /// A closed volume needs at least one interior cell, which requires at
    /// least two rows and two columns. A degenerate grid is a configuration
    /// error, never a silent empty output.
    #[error("grid of {rows}x{cols} samples cannot form a closed solid (need at least 2x2)")]
    DegenerateGrid {
        /// Row count of the rejected grid.
        rows: usize,
        /// Column count of the rejected grid.
        cols: usize,
    },

    /// An elevation sample is NaN or infinite.
    ///
    /// Preprocessing is expected to have clipped the data; a non-finite
    /// sample reaching the engine indicates an upstream bug and is always a
    /// hard failure, never substituted geometry.
    #[error("non-finite elevation {value} at row {row}, column {col}")]
    NonFiniteElevation {
        /// Row of the offending sample.
        row: usize,
        /// Column of the offending sample.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// The horizontal scale factor is not a finite positive number.
    #[error("invalid horizontal scale: {scale}")]
    InvalidScale {
        /// The rejected scale value.
        scale: f64,
    },

    /// The grid would produce more facets than the output format can count.
    #[error("grid would produce {count} facets, more than the format's 32-bit count field")]
    TooManyFacets {
        /// The facet count the grid would produce.
        count: u64,
    },

    /// Generation was cancelled cooperatively before completion.
    #[error("solid generation cancelled")]
    Cancelled,

    /// The requested worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}
