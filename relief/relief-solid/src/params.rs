//! Parameters for solid generation.

/// How row computations are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Concurrency {
    /// Compute rows one after another on the calling thread.
    #[default]
    Sequential,

    /// Fan rows out across a worker pool.
    Parallel {
        /// Number of workers, or `None` for one per available core.
        workers: Option<usize>,
    },
}

impl Concurrency {
    /// Parallel scheduling with one worker per available core.
    #[inline]
    #[must_use]
    pub const fn parallel() -> Self {
        Self::Parallel { workers: None }
    }

    /// Parallel scheduling with a fixed worker count.
    #[inline]
    #[must_use]
    pub const fn parallel_with(workers: usize) -> Self {
        Self::Parallel {
            workers: Some(workers),
        }
    }
}

/// Parameters for solid generation.
///
/// # Example
///
/// ```
/// use relief_solid::{Concurrency, SolidParams};
///
/// let params = SolidParams::default()
///     .with_scale(0.5)
///     .with_concurrency(Concurrency::parallel());
/// assert_eq!(params.scale, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidParams {
    /// Horizontal scale in physical units per grid cell, applied uniformly
    /// to x and y. Elevation samples are consumed as-is; vertical scaling
    /// belongs to preprocessing.
    pub scale: f64,

    /// Scheduling mode for row computation. Output bytes are identical in
    /// every mode.
    pub concurrency: Concurrency,
}

impl Default for SolidParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            concurrency: Concurrency::Sequential,
        }
    }
}

impl SolidParams {
    /// Set the horizontal scale factor.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the scheduling mode.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: Concurrency) -> Self {
        self.concurrency = concurrency;
        self
    }
}
