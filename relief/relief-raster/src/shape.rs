//! Grid shape transforms: padding, transposition, stacking.

use relief_types::Heightfield;
use tracing::debug;

use crate::error::{RasterError, RasterResult};

/// Surround the grid with a one-cell border ring at a constant value.
///
/// The ring gives every output a flat skirt at the border so the boundary
/// walls meet the base in a straight line instead of following the outermost
/// data samples.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_raster::pad;
///
/// let grid = Heightfield::from_elem(1, 1, 9.0).unwrap();
/// let padded = pad(&grid, 0.0);
/// assert_eq!(padded.rows(), 3);
/// assert_eq!(padded.cols(), 3);
/// assert_eq!(padded.get(1, 1), 9.0);
/// assert_eq!(padded.get(0, 0), 0.0);
/// ```
#[must_use]
pub fn pad(grid: &Heightfield, value: f64) -> Heightfield {
    let (rows, cols) = (grid.rows(), grid.cols());
    let padded = Heightfield::from_fn(rows + 2, cols + 2, |row, col| {
        if row == 0 || col == 0 || row == rows + 1 || col == cols + 1 {
            value
        } else {
            grid.get(row - 1, col - 1)
        }
    });
    // Dimensions grew from a non-empty grid, so construction cannot fail.
    padded.unwrap_or_else(|| grid.clone())
}

/// Swap rows and columns.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_raster::transpose;
///
/// let grid = Heightfield::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
/// let rotated = transpose(&grid);
/// assert_eq!(rotated.rows(), 3);
/// assert_eq!(rotated.get(2, 0), 3.0);
/// ```
#[must_use]
pub fn transpose(grid: &Heightfield) -> Heightfield {
    let transposed = Heightfield::from_fn(grid.cols(), grid.rows(), |row, col| grid.get(col, row));
    transposed.unwrap_or_else(|| grid.clone())
}

/// Stack grids vertically with a separation band between them.
///
/// Grids are concatenated along the row axis in input order, with
/// `gap_rows` rows of `fill` inserted between consecutive grids. All grids
/// must share one column count.
///
/// # Errors
///
/// Returns [`RasterError::EmptyInput`] for an empty slice and
/// [`RasterError::ColumnMismatch`] naming the first grid whose column count
/// differs from the first grid's.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
/// use relief_raster::vstack;
///
/// let a = Heightfield::from_elem(2, 3, 1.0).unwrap();
/// let b = Heightfield::from_elem(1, 3, 2.0).unwrap();
/// let stacked = vstack(&[a, b], 1, 0.0).unwrap();
/// assert_eq!(stacked.rows(), 4);
/// assert_eq!(stacked.get(2, 0), 0.0); // separation band
/// assert_eq!(stacked.get(3, 0), 2.0);
/// ```
pub fn vstack(grids: &[Heightfield], gap_rows: usize, fill: f64) -> RasterResult<Heightfield> {
    let Some(first) = grids.first() else {
        return Err(RasterError::EmptyInput);
    };
    let cols = first.cols();
    for (index, grid) in grids.iter().enumerate() {
        if grid.cols() != cols {
            return Err(RasterError::ColumnMismatch {
                index,
                expected: cols,
                got: grid.cols(),
            });
        }
    }

    let total_rows: usize =
        grids.iter().map(Heightfield::rows).sum::<usize>() + gap_rows * (grids.len() - 1);
    let mut samples = Vec::with_capacity(total_rows * cols);
    for (index, grid) in grids.iter().enumerate() {
        if index > 0 {
            samples.extend(std::iter::repeat_n(fill, gap_rows * cols));
        }
        samples.extend_from_slice(grid.samples());
    }

    debug!(
        pieces = grids.len(),
        gap_rows, total_rows, cols, "Stacked grids vertically"
    );
    Heightfield::from_row_major(total_rows, cols, samples).ok_or(RasterError::EmptyInput)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::cast_precision_loss)]
mod tests {
    use super::*;

    #[test]
    fn pad_wraps_all_sides() {
        let grid = Heightfield::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let padded = pad(&grid, -1.0);
        assert_eq!(padded.rows(), 4);
        assert_eq!(padded.cols(), 4);
        assert_eq!(padded.row(0), &[-1.0, -1.0, -1.0, -1.0]);
        assert_eq!(padded.row(1), &[-1.0, 1.0, 2.0, -1.0]);
        assert_eq!(padded.row(2), &[-1.0, 3.0, 4.0, -1.0]);
        assert_eq!(padded.row(3), &[-1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn transpose_swaps_axes() {
        let grid = Heightfield::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let rotated = transpose(&grid);
        assert_eq!(rotated.rows(), 3);
        assert_eq!(rotated.cols(), 2);
        assert_eq!(rotated.row(0), &[1.0, 4.0]);
        assert_eq!(rotated.row(2), &[3.0, 6.0]);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let grid = Heightfield::from_fn(3, 5, |r, c| (r * 10 + c) as f64).unwrap();
        assert_eq!(transpose(&transpose(&grid)), grid);
    }

    #[test]
    fn vstack_without_gap() {
        let a = Heightfield::from_rows(vec![vec![1.0, 1.0]]).unwrap();
        let b = Heightfield::from_rows(vec![vec![2.0, 2.0]]).unwrap();
        let stacked = vstack(&[a, b], 0, 9.0).unwrap();
        assert_eq!(stacked.rows(), 2);
        assert_eq!(stacked.samples(), &[1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn vstack_inserts_separation_band() {
        let a = Heightfield::from_rows(vec![vec![1.0]]).unwrap();
        let b = Heightfield::from_rows(vec![vec![2.0]]).unwrap();
        let stacked = vstack(&[a, b], 2, 0.5).unwrap();
        assert_eq!(stacked.rows(), 4);
        assert_eq!(stacked.samples(), &[1.0, 0.5, 0.5, 2.0]);
    }

    #[test]
    fn vstack_rejects_column_mismatch() {
        let a = Heightfield::from_elem(1, 2, 0.0).unwrap();
        let b = Heightfield::from_elem(1, 3, 0.0).unwrap();
        let err = vstack(&[a, b], 0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            RasterError::ColumnMismatch {
                index: 1,
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn vstack_rejects_empty_input() {
        assert!(matches!(vstack(&[], 0, 0.0), Err(RasterError::EmptyInput)));
    }

    #[test]
    fn vstack_single_grid_is_identity() {
        let a = Heightfield::from_fn(2, 2, |r, c| (r + c) as f64).unwrap();
        let stacked = vstack(std::slice::from_ref(&a), 3, 0.0).unwrap();
        assert_eq!(stacked, a);
    }
}
