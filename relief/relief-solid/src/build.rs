//! Row scheduling and solid assembly.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use relief_types::{Facet, Heightfield, Solid};
use tracing::{debug, info};

use crate::cancel::CancelToken;
use crate::error::{SolidError, SolidResult};
use crate::facets::row_facets;
use crate::params::{Concurrency, SolidParams};

/// The facet count a grid of the given sample dimensions produces.
///
/// For interior width `cols - 1` and height `rows - 1` this is
/// `4*width*height` top and bottom triangles, `4*width` north/south wall
/// triangles, and `4*height` east/west wall triangles. Returns `None` for
/// grids too small to form a closed cell.
///
/// # Example
///
/// ```
/// use relief_solid::expected_facet_count;
///
/// // 3x3 samples: 2x2 interior cells.
/// assert_eq!(expected_facet_count(3, 3), Some(32));
/// assert_eq!(expected_facet_count(1, 5), None);
/// ```
#[must_use]
pub const fn expected_facet_count(rows: usize, cols: usize) -> Option<u64> {
    if rows < 2 || cols < 2 {
        return None;
    }
    let width = (cols - 1) as u64;
    let height = (rows - 1) as u64;
    Some(4 * width * height + 4 * width + 4 * height)
}

/// Build a closed solid from a finalized heightfield.
///
/// The grid is treated as read-only; each interior cell-row is generated by
/// [`row_facets`] independently and the results are concatenated strictly
/// in row order, so output is byte-for-byte reproducible under any
/// [`Concurrency`] mode.
///
/// # Errors
///
/// * [`SolidError::DegenerateGrid`] - fewer than 2 rows or columns
/// * [`SolidError::InvalidScale`] - scale not a finite positive number
/// * [`SolidError::TooManyFacets`] - facet count exceeds the format's u32
/// * [`SolidError::NonFiniteElevation`] - a NaN/infinite sample survived
///   preprocessing
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_solid::{build_solid, SolidParams};
///
/// let grid = Heightfield::from_rows(vec![
///     vec![1.0, 1.0, 1.0],
///     vec![1.0, 5.0, 1.0],
///     vec![1.0, 1.0, 1.0],
/// ]).unwrap();
///
/// let solid = build_solid(&grid, &SolidParams::default()).unwrap();
/// assert_eq!(solid.facet_count(), 32);
/// ```
pub fn build_solid(grid: &Heightfield, params: &SolidParams) -> SolidResult<Solid> {
    build_solid_cancellable(grid, params, &CancelToken::new())
}

/// [`build_solid`] with a cooperative cancellation token.
///
/// The token is checked before each row; once tripped, remaining rows are
/// abandoned and the build fails with [`SolidError::Cancelled`] without
/// producing partial output.
///
/// # Errors
///
/// As [`build_solid`], plus [`SolidError::Cancelled`].
pub fn build_solid_cancellable(
    grid: &Heightfield,
    params: &SolidParams,
    cancel: &CancelToken,
) -> SolidResult<Solid> {
    let expected = validate(grid, params)?;
    let height = grid.rows() - 1;

    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        facets = expected,
        scale = params.scale,
        mode = ?params.concurrency,
        "Generating solid"
    );

    let progress = Progress::new(height);
    let generate_row = |row: usize| -> SolidResult<Vec<Facet>> {
        if cancel.is_cancelled() {
            return Err(SolidError::Cancelled);
        }
        let facets = row_facets(grid, row, params.scale)?;
        progress.row_done();
        Ok(facets)
    };

    let row_results: SolidResult<Vec<Vec<Facet>>> = match params.concurrency {
        Concurrency::Sequential => (0..height).map(generate_row).collect(),
        Concurrency::Parallel { workers: None } => {
            (0..height).into_par_iter().map(generate_row).collect()
        }
        Concurrency::Parallel {
            workers: Some(workers),
        } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| SolidError::WorkerPool(e.to_string()))?;
            pool.install(|| (0..height).into_par_iter().map(generate_row).collect())
        }
    };

    // Reassembly is by row index: the per-row vectors arrive in index
    // order from both the sequential iterator and rayon's indexed collect,
    // never in completion order.
    let solid: Solid = row_results?.into_iter().flatten().collect();

    #[allow(clippy::cast_possible_truncation)]
    // Validation capped the count at u32::MAX, which fits usize on all supported targets.
    {
        debug_assert_eq!(solid.facet_count(), expected as usize);
    }
    Ok(solid)
}

/// Check the configuration before any computation starts.
fn validate(grid: &Heightfield, params: &SolidParams) -> SolidResult<u64> {
    let Some(expected) = expected_facet_count(grid.rows(), grid.cols()) else {
        return Err(SolidError::DegenerateGrid {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    };
    if !params.scale.is_finite() || params.scale <= 0.0 {
        return Err(SolidError::InvalidScale {
            scale: params.scale,
        });
    }
    if expected > u64::from(u32::MAX) {
        return Err(SolidError::TooManyFacets { count: expected });
    }
    Ok(expected)
}

/// Decile progress reporting shared across workers.
///
/// Purely observable: emits tracing events and never influences output
/// bytes or ordering.
struct Progress {
    total: usize,
    done: AtomicUsize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self {
            total,
            done: AtomicUsize::new(0),
        }
    }

    fn row_done(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        let decile = done * 10 / self.total;
        let previous = (done - 1) * 10 / self.total;
        if decile != previous {
            debug!(percent = decile * 10, "Generated facet rows");
        }
    }
}
