//! Heightfield grid of elevation samples.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular grid of elevation samples.
///
/// Samples are stored row-major: row index increases "south", column index
/// increases "east". The grid is immutable once built; every preprocessing
/// step produces a new `Heightfield` rather than mutating in place, so the
/// solid engine always receives a finalized, read-only grid.
///
/// # Example
///
/// ```
/// use relief_types::Heightfield;
///
/// let grid = Heightfield::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![3.0, 4.0, 5.0],
/// ]).unwrap();
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.get(1, 2), 5.0);
/// assert_eq!(grid.row(0), &[0.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Heightfield {
    rows: usize,
    cols: usize,
    samples: Vec<f64>,
}

impl Heightfield {
    /// Create a grid filled with a constant value.
    ///
    /// Returns `None` if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::Heightfield;
    ///
    /// let flat = Heightfield::from_elem(4, 3, 1.5).unwrap();
    /// assert_eq!(flat.get(3, 2), 1.5);
    /// assert!(Heightfield::from_elem(0, 3, 1.5).is_none());
    /// ```
    #[must_use]
    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self {
            rows,
            cols,
            samples: vec![value; rows * cols],
        })
    }

    /// Create a grid by sampling a function of (row, col).
    ///
    /// Returns `None` if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::Heightfield;
    ///
    /// let ramp = Heightfield::from_fn(2, 2, |row, col| (row + col) as f64).unwrap();
    /// assert_eq!(ramp.get(1, 1), 2.0);
    /// ```
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let mut samples = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                samples.push(f(row, col));
            }
        }
        Some(Self { rows, cols, samples })
    }

    /// Create a grid from nested row vectors.
    ///
    /// Returns `None` if the input is empty, any row is empty, or the rows
    /// have differing lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let row_count = rows.len();
        let samples: Vec<f64> = rows.into_iter().flatten().collect();
        Some(Self {
            rows: row_count,
            cols,
            samples,
        })
    }

    /// Create a grid from a row-major sample buffer.
    ///
    /// Returns `None` if either dimension is zero or the buffer length does
    /// not equal `rows * cols`.
    #[must_use]
    pub fn from_row_major(rows: usize, cols: usize, samples: Vec<f64>) -> Option<Self> {
        if rows == 0 || cols == 0 || samples.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, samples })
    }

    /// Number of rows (extent along the south axis).
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (extent along the east axis).
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The sample at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "sample index out of bounds");
        self.samples[row * self.cols + col]
    }

    /// The sample at (row, col), or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn try_get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.samples[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row of samples as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        &self.samples[row * self.cols..(row + 1) * self.cols]
    }

    /// All samples in row-major order.
    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Minimum and maximum sample values, skipping NaN samples.
    ///
    /// Returns `None` only when every sample is NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::Heightfield;
    ///
    /// let grid = Heightfield::from_rows(vec![vec![3.0, -1.0], vec![7.0, 0.0]]).unwrap();
    /// assert_eq!(grid.sample_range(), Some((-1.0, 7.0)));
    /// ```
    #[must_use]
    pub fn sample_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.samples {
            if v.is_nan() {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }

    /// Whether every sample is finite (no NaN or infinities).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|v| v.is_finite())
    }

    /// Apply a function to every sample, producing a new grid.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::Heightfield;
    ///
    /// let grid = Heightfield::from_elem(2, 2, 2.0).unwrap();
    /// let doubled = grid.map(|v| v * 2.0);
    /// assert_eq!(doubled.get(0, 0), 4.0);
    /// ```
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            samples: self.samples.iter().map(|&v| f(v)).collect(),
        }
    }
}
