//! Vertical normalization into a physical height range.

use relief_types::Heightfield;
use tracing::debug;

use crate::error::{RasterError, RasterResult};

/// Map the sample range affinely onto `[base, base + vertical_size]`.
///
/// The lowest sample lands at `base` and the highest at
/// `base + vertical_size`, so the finished solid carries `base` units of
/// flat material between the bottom plane at z = 0 and the lowest point of
/// the surface. A flat grid maps everywhere to `base`. NaN samples
/// propagate unchanged and are rejected later by the solid engine.
///
/// # Errors
///
/// Returns [`RasterError::InvalidVerticalSize`] or
/// [`RasterError::InvalidBase`] when either parameter is not a finite
/// non-negative number.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_raster::normalize;
///
/// let grid = Heightfield::from_rows(vec![vec![10.0, 30.0, 20.0]]).unwrap();
/// let normalized = normalize(&grid, 2.0, 0.5).unwrap();
/// assert_eq!(normalized.samples(), &[0.5, 2.5, 1.5]);
/// ```
pub fn normalize(grid: &Heightfield, vertical_size: f64, base: f64) -> RasterResult<Heightfield> {
    if !vertical_size.is_finite() || vertical_size < 0.0 {
        return Err(RasterError::InvalidVerticalSize {
            size: vertical_size,
        });
    }
    if !base.is_finite() || base < 0.0 {
        return Err(RasterError::InvalidBase { base });
    }

    let Some((min, max)) = grid.sample_range() else {
        // Every sample is NaN; nothing to scale. The solid engine will
        // report the first offending coordinate.
        return Ok(grid.clone());
    };

    let span = max - min;
    let gain = if span > 0.0 && span.is_finite() {
        vertical_size / span
    } else {
        0.0
    };

    debug!(min, max, vertical_size, base, "Normalizing elevation range");
    Ok(grid.map(|v| base + (v - min) * gain))
}
