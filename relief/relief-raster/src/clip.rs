//! Sample clamping and no-data replacement.

use relief_types::Heightfield;

use crate::error::{RasterError, RasterResult};

/// Clamp every sample into `[min, max]`.
///
/// Infinite bounds are allowed and leave that side open. NaN samples pass
/// through unchanged; the solid engine rejects them with the offending
/// coordinates, which is more useful than clamping them into silence here.
///
/// # Errors
///
/// Returns [`RasterError::InvalidRange`] if `min > max` or either bound is
/// NaN.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_raster::clip;
///
/// let grid = Heightfield::from_rows(vec![vec![-5.0, 0.5, 9.0]]).unwrap();
/// let clipped = clip(&grid, 0.0, 1.0).unwrap();
/// assert_eq!(clipped.samples(), &[0.0, 0.5, 1.0]);
/// ```
pub fn clip(grid: &Heightfield, min: f64, max: f64) -> RasterResult<Heightfield> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(RasterError::InvalidRange { min, max });
    }
    Ok(grid.map(|v| if v.is_nan() { v } else { v.clamp(min, max) }))
}

/// Replace no-data sentinel samples with a fixed value.
///
/// Matching is exact; a NaN sentinel matches NaN samples.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_raster::fill_nodata;
///
/// let grid = Heightfield::from_rows(vec![vec![-9999.0, 3.0]]).unwrap();
/// let filled = fill_nodata(&grid, -9999.0, 0.0);
/// assert_eq!(filled.samples(), &[0.0, 3.0]);
/// ```
#[must_use]
pub fn fill_nodata(grid: &Heightfield, sentinel: f64, replacement: f64) -> Heightfield {
    if sentinel.is_nan() {
        grid.map(|v| if v.is_nan() { replacement } else { v })
    } else {
        grid.map(|v| if v == sentinel { replacement } else { v })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn clip_clamps_both_sides() {
        let grid = Heightfield::from_rows(vec![vec![-10.0, 5.0, 20.0]]).unwrap();
        let clipped = clip(&grid, -1.0, 10.0).unwrap();
        assert_eq!(clipped.samples(), &[-1.0, 5.0, 10.0]);
    }

    #[test]
    fn clip_open_bounds() {
        let grid = Heightfield::from_rows(vec![vec![-10.0, 20.0]]).unwrap();
        let clipped = clip(&grid, f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert_eq!(clipped.samples(), &[-10.0, 20.0]);
    }

    #[test]
    fn clip_rejects_inverted_range() {
        let grid = Heightfield::from_elem(1, 1, 0.0).unwrap();
        assert!(matches!(
            clip(&grid, 1.0, 0.0),
            Err(RasterError::InvalidRange { .. })
        ));
        assert!(clip(&grid, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn clip_leaves_nan_untouched() {
        let grid = Heightfield::from_rows(vec![vec![f64::NAN, 2.0]]).unwrap();
        let clipped = clip(&grid, 0.0, 1.0).unwrap();
        assert!(clipped.get(0, 0).is_nan());
        assert_eq!(clipped.get(0, 1), 1.0);
    }

    #[test]
    fn fill_nodata_exact_match() {
        let grid = Heightfield::from_rows(vec![vec![-9999.0, -9998.5]]).unwrap();
        let filled = fill_nodata(&grid, -9999.0, 7.0);
        assert_eq!(filled.samples(), &[7.0, -9998.5]);
    }

    #[test]
    fn fill_nodata_nan_sentinel() {
        let grid = Heightfield::from_rows(vec![vec![f64::NAN, 1.0]]).unwrap();
        let filled = fill_nodata(&grid, f64::NAN, 0.0);
        assert_eq!(filled.samples(), &[0.0, 1.0]);
    }
}
