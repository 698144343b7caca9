//! Per-row facet generation.
//!
//! One cell-row of the grid contributes a fixed, deterministic facet
//! sequence: the west and east wall pairs for that row, then per cell the
//! north wall pair (first row only), the top pair, the bottom pair, and the
//! south wall pair (last row only). Rows are independent of each other and
//! touch no shared state, so they can be computed in any order and on any
//! thread.

use relief_types::{Facet, Heightfield, Point3};

use crate::error::{SolidError, SolidResult};

/// Physical position of the grid node at (row, col) with height `z`.
#[inline]
#[allow(clippy::cast_precision_loss)] // Grid indices are far below 2^52; the cast is exact.
fn node(col: usize, row: usize, scale: f64, z: f64) -> Point3<f64> {
    Point3::new(col as f64 * scale, row as f64 * scale, z)
}

/// The elevation at (row, col), rejecting NaN and infinities.
#[inline]
fn elevation(grid: &Heightfield, row: usize, col: usize) -> SolidResult<f64> {
    let value = grid.get(row, col);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolidError::NonFiniteElevation { row, col, value })
    }
}

/// Generate all facets contributed by cell-row `row`.
///
/// `row` indexes the cell strip between sample rows `row` and `row + 1`, so
/// valid values are `0..rows - 1`. The caller is expected to have validated
/// the grid shape and scale; this function still fails cleanly on
/// non-finite samples, naming the offending coordinates.
///
/// This is a pure function: it reads the grid, allocates its own output,
/// and touches nothing shared.
///
/// # Errors
///
/// Returns [`SolidError::NonFiniteElevation`] if any sample in the two
/// bordering sample rows is NaN or infinite.
///
/// # Panics
///
/// Panics if `row + 1 >= grid.rows()`; the scheduler's validation excludes
/// this, along with grids narrower than two columns.
pub fn row_facets(grid: &Heightfield, row: usize, scale: f64) -> SolidResult<Vec<Facet>> {
    let width = grid.cols() - 1;
    let height = grid.rows() - 1;
    assert!(row < height, "cell-row index out of bounds");

    let first_row = row == 0;
    let last_row = row == height - 1;
    let mut walls_per_cell = 0;
    if first_row {
        walls_per_cell += 2;
    }
    if last_row {
        walls_per_cell += 2;
    }
    let mut facets = Vec::with_capacity(4 + (4 + walls_per_cell) * width);

    west_wall(grid, row, scale, &mut facets)?;
    east_wall(grid, row, scale, &mut facets)?;

    for col in 0..width {
        if first_row {
            north_wall(grid, col, scale, &mut facets)?;
        }
        top_cell(grid, row, col, scale, &mut facets)?;
        bottom_cell(row, col, scale, &mut facets);
        if last_row {
            south_wall(grid, col, scale, &mut facets)?;
        }
    }

    Ok(facets)
}

/// Two upward triangles over cell (col, row), split along the
/// (col, row) -> (col + 1, row + 1) diagonal.
fn top_cell(
    grid: &Heightfield,
    row: usize,
    col: usize,
    scale: f64,
    facets: &mut Vec<Facet>,
) -> SolidResult<()> {
    let a = node(col, row, scale, elevation(grid, row, col)?);
    let b = node(col + 1, row, scale, elevation(grid, row, col + 1)?);
    let c = node(col + 1, row + 1, scale, elevation(grid, row + 1, col + 1)?);
    let d = node(col, row + 1, scale, elevation(grid, row + 1, col)?);
    facets.push(Facet::new(a, b, c));
    facets.push(Facet::new(a, c, d));
    Ok(())
}

/// Two downward triangles closing the same footprint at the base plane.
fn bottom_cell(row: usize, col: usize, scale: f64, facets: &mut Vec<Facet>) {
    let a = node(col, row, scale, 0.0);
    let b = node(col + 1, row, scale, 0.0);
    let c = node(col + 1, row + 1, scale, 0.0);
    let d = node(col, row + 1, scale, 0.0);
    facets.push(Facet::new(a, c, b));
    facets.push(Facet::new(a, d, c));
}

/// North boundary wall for one column, facing -Y.
fn north_wall(
    grid: &Heightfield,
    col: usize,
    scale: f64,
    facets: &mut Vec<Facet>,
) -> SolidResult<()> {
    let base0 = node(col, 0, scale, 0.0);
    let base1 = node(col + 1, 0, scale, 0.0);
    let top0 = node(col, 0, scale, elevation(grid, 0, col)?);
    let top1 = node(col + 1, 0, scale, elevation(grid, 0, col + 1)?);
    facets.push(Facet::new(base0, base1, top1));
    facets.push(Facet::new(base0, top1, top0));
    Ok(())
}

/// South boundary wall for one column, facing +Y.
fn south_wall(
    grid: &Heightfield,
    col: usize,
    scale: f64,
    facets: &mut Vec<Facet>,
) -> SolidResult<()> {
    let south = grid.rows() - 1;
    let base0 = node(col, south, scale, 0.0);
    let base1 = node(col + 1, south, scale, 0.0);
    let top0 = node(col, south, scale, elevation(grid, south, col)?);
    let top1 = node(col + 1, south, scale, elevation(grid, south, col + 1)?);
    facets.push(Facet::new(base1, base0, top0));
    facets.push(Facet::new(base1, top0, top1));
    Ok(())
}

/// West boundary wall for one cell-row, facing -X.
fn west_wall(
    grid: &Heightfield,
    row: usize,
    scale: f64,
    facets: &mut Vec<Facet>,
) -> SolidResult<()> {
    let base0 = node(0, row, scale, 0.0);
    let base1 = node(0, row + 1, scale, 0.0);
    let top0 = node(0, row, scale, elevation(grid, row, 0)?);
    let top1 = node(0, row + 1, scale, elevation(grid, row + 1, 0)?);
    facets.push(Facet::new(base1, base0, top0));
    facets.push(Facet::new(base1, top0, top1));
    Ok(())
}

/// East boundary wall for one cell-row, facing +X.
fn east_wall(
    grid: &Heightfield,
    row: usize,
    scale: f64,
    facets: &mut Vec<Facet>,
) -> SolidResult<()> {
    let east = grid.cols() - 1;
    let base0 = node(east, row, scale, 0.0);
    let base1 = node(east, row + 1, scale, 0.0);
    let top0 = node(east, row, scale, elevation(grid, row, east)?);
    let top1 = node(east, row + 1, scale, elevation(grid, row + 1, east)?);
    facets.push(Facet::new(base0, base1, top1));
    facets.push(Facet::new(base0, top1, top0));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn flat(rows: usize, cols: usize, z: f64) -> Heightfield {
        Heightfield::from_elem(rows, cols, z).unwrap()
    }

    #[test]
    fn row_count_matches_position() {
        // 4x3 grid: height 3, width 2.
        let grid = flat(4, 3, 1.0);
        // First row: west + east (4) + per cell north (2) + top (2) + bottom (2) = 4 + 2*6
        assert_eq!(row_facets(&grid, 0, 1.0).unwrap().len(), 16);
        // Middle row: 4 + 2*4
        assert_eq!(row_facets(&grid, 1, 1.0).unwrap().len(), 12);
        // Last row mirrors the first.
        assert_eq!(row_facets(&grid, 2, 1.0).unwrap().len(), 16);
    }

    #[test]
    fn two_row_grid_emits_both_boundary_walls() {
        let grid = flat(2, 2, 1.0);
        // Single cell-row is both first and last: 4 walls + (2 north + 2 top
        // + 2 bottom + 2 south) per cell.
        assert_eq!(row_facets(&grid, 0, 1.0).unwrap().len(), 12);
    }

    #[test]
    fn top_facets_face_up_bottom_facets_face_down() {
        let grid = flat(3, 3, 2.0);
        for row in 0..2 {
            for facet in row_facets(&grid, row, 1.0).unwrap() {
                let n = facet.normal().unwrap();
                let centroid_z = (facet.v0.z + facet.v1.z + facet.v2.z) / 3.0;
                if n.z.abs() > 0.5 {
                    // Horizontal facet: up on the surface, down on the base.
                    if centroid_z > 0.0 {
                        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
                    } else {
                        assert_relative_eq!(n.z, -1.0, epsilon = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn wall_normals_point_outward() {
        let grid = flat(3, 4, 1.0);
        let width = 3.0;
        let height = 2.0;
        for row in 0..2 {
            for facet in row_facets(&grid, row, 1.0).unwrap() {
                let Some(n) = facet.normal() else { continue };
                if n.z.abs() > 1e-9 {
                    continue; // top or bottom
                }
                let cx = (facet.v0.x + facet.v1.x + facet.v2.x) / 3.0;
                let cy = (facet.v0.y + facet.v1.y + facet.v2.y) / 3.0;
                let expected = if cy == 0.0 {
                    Vector3::new(0.0, -1.0, 0.0)
                } else if cy == height {
                    Vector3::new(0.0, 1.0, 0.0)
                } else if cx == 0.0 {
                    Vector3::new(-1.0, 0.0, 0.0)
                } else {
                    assert_eq!(cx, width);
                    Vector3::new(1.0, 0.0, 0.0)
                };
                assert_relative_eq!((n - expected).norm(), 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn elevation_error_names_coordinates() {
        let mut rows = vec![vec![1.0; 3]; 3];
        rows[1][2] = f64::NAN;
        let grid = Heightfield::from_rows(rows).unwrap();
        let err = row_facets(&grid, 0, 1.0).unwrap_err();
        match err {
            SolidError::NonFiniteElevation { row, col, value } => {
                assert_eq!((row, col), (1, 2));
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scale_applies_to_xy_only() {
        let grid = flat(2, 2, 3.0);
        let facets = row_facets(&grid, 0, 2.0).unwrap();
        let max_x = facets
            .iter()
            .flat_map(|f| [f.v0.x, f.v1.x, f.v2.x])
            .fold(f64::NEG_INFINITY, f64::max);
        let max_z = facets
            .iter()
            .flat_map(|f| [f.v0.z, f.v1.z, f.v2.z])
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max_x, 2.0);
        assert_eq!(max_z, 3.0);
    }
}
