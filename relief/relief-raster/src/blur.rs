//! Gaussian smoothing to suppress raster sampling noise.

use relief_types::Heightfield;
use tracing::debug;

use crate::error::{RasterError, RasterResult};

/// Kernel truncation in standard deviations.
const TRUNCATE: f64 = 4.0;

/// Smooth a grid with a separable Gaussian filter.
///
/// The kernel is truncated at `4 * sigma` and normalized; samples outside
/// the grid are treated as zero (constant boundary mode), so values near
/// the border are pulled toward zero. This matches the smoothing the
/// downstream solid expects after clipping.
///
/// # Errors
///
/// Returns [`RasterError::InvalidSigma`] if `sigma` is not a finite
/// positive number.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_raster::gaussian_blur;
///
/// let grid = Heightfield::from_elem(9, 9, 1.0).unwrap();
/// let smoothed = gaussian_blur(&grid, 1.0).unwrap();
/// // Far from the border the surface is unchanged.
/// assert!((smoothed.get(4, 4) - 1.0).abs() < 1e-9);
/// ```
pub fn gaussian_blur(grid: &Heightfield, sigma: f64) -> RasterResult<Heightfield> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(RasterError::InvalidSigma { sigma });
    }

    let weights = kernel(sigma);
    debug!(
        sigma,
        radius = weights.len() - 1,
        rows = grid.rows(),
        cols = grid.cols(),
        "Applying gaussian blur"
    );

    let horizontal = convolve_rows(grid, &weights);
    Ok(convolve_cols(&horizontal, &weights))
}

/// Normalized half-kernel: `weights[0]` is the center tap, `weights[i]`
/// the tap at offset ±i.
fn kernel(sigma: f64) -> Vec<f64> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation: radius is a small non-negative integer by construction
    let radius = (TRUNCATE * sigma + 0.5) as usize;
    let radius = radius.max(1);

    let mut weights = Vec::with_capacity(radius + 1);
    for i in 0..=radius {
        #[allow(clippy::cast_precision_loss)]
        let x = i as f64;
        weights.push((-x * x / (2.0 * sigma * sigma)).exp());
    }

    // Normalize over the full symmetric kernel.
    let total: f64 = weights[0] + 2.0 * weights[1..].iter().sum::<f64>();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

fn convolve_rows(grid: &Heightfield, weights: &[f64]) -> Heightfield {
    let (rows, cols) = (grid.rows(), grid.cols());
    let out = Heightfield::from_fn(rows, cols, |row, col| {
        let mut acc = weights[0] * grid.get(row, col);
        for (i, &w) in weights.iter().enumerate().skip(1) {
            if let Some(c) = col.checked_sub(i) {
                acc += w * grid.get(row, c);
            }
            if col + i < cols {
                acc += w * grid.get(row, col + i);
            }
        }
        acc
    });
    // Dimensions are unchanged, so construction cannot fail.
    out.unwrap_or_else(|| grid.clone())
}

fn convolve_cols(grid: &Heightfield, weights: &[f64]) -> Heightfield {
    let (rows, cols) = (grid.rows(), grid.cols());
    let out = Heightfield::from_fn(rows, cols, |row, col| {
        let mut acc = weights[0] * grid.get(row, col);
        for (i, &w) in weights.iter().enumerate().skip(1) {
            if let Some(r) = row.checked_sub(i) {
                acc += w * grid.get(r, col);
            }
            if row + i < rows {
                acc += w * grid.get(row + i, col);
            }
        }
        acc
    });
    out.unwrap_or_else(|| grid.clone())
}
