//! Closed-solid properties of generated solids.
//!
//! A watertight, consistently oriented triangle mesh has a simple edge
//! signature: every directed edge appears exactly once, and its reverse
//! also appears exactly once. These tests check that signature directly on
//! the generated facet soup, plus the count and scale invariants the
//! binary format depends on.

use std::collections::HashMap;

use relief_solid::{Concurrency, SolidParams, build_solid, expected_facet_count};
use relief_types::{Heightfield, Point3, Solid};

type NodeKey = (u64, u64, u64);

fn node_key(p: &Point3<f64>) -> NodeKey {
    (p.x.to_bits(), p.y.to_bits(), p.z.to_bits())
}

/// Count every directed edge of every facet.
fn directed_edges(solid: &Solid) -> HashMap<(NodeKey, NodeKey), usize> {
    let mut edges = HashMap::new();
    for facet in &solid.facets {
        let corners = [facet.v0, facet.v1, facet.v2];
        for i in 0..3 {
            let from = node_key(&corners[i]);
            let to = node_key(&corners[(i + 1) % 3]);
            *edges.entry((from, to)).or_insert(0) += 1;
        }
    }
    edges
}

fn assert_watertight(solid: &Solid) {
    let edges = directed_edges(solid);
    for (&(from, to), &count) in &edges {
        assert_eq!(count, 1, "directed edge repeated {count} times");
        assert_eq!(
            edges.get(&(to, from)),
            Some(&1),
            "directed edge has no opposite; the surface has a hole"
        );
    }
}

#[allow(clippy::cast_precision_loss)]
fn terrain(rows: usize, cols: usize) -> Heightfield {
    Heightfield::from_fn(rows, cols, |r, c| {
        1.0 + ((r as f64) * 0.9).sin().abs() + ((c as f64) * 0.4).cos().abs()
    })
    .unwrap()
}

#[test]
fn generated_solids_are_watertight() {
    for (rows, cols) in [(2, 2), (2, 5), (5, 2), (3, 3), (7, 4), (12, 12)] {
        let solid = build_solid(&terrain(rows, cols), &SolidParams::default()).unwrap();
        let expected = expected_facet_count(rows, cols).unwrap();
        assert_eq!(solid.facet_count() as u64, expected);
        assert_watertight(&solid);
    }
}

#[test]
fn parallel_solids_are_watertight_too() {
    let params = SolidParams::default().with_concurrency(Concurrency::parallel());
    let solid = build_solid(&terrain(9, 6), &params).unwrap();
    assert_watertight(&solid);
}

#[test]
fn adjacent_top_triangles_share_their_edge_exactly() {
    // The top surface of a 2-cell strip: the shared interior edge must be
    // referenced by both cells with identical coordinates.
    let grid = Heightfield::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let solid = build_solid(&grid, &SolidParams::default()).unwrap();

    let edges = directed_edges(&solid);
    let shared_lo = node_key(&Point3::new(1.0, 0.0, 2.0));
    let shared_hi = node_key(&Point3::new(1.0, 1.0, 5.0));
    assert_eq!(edges.get(&(shared_lo, shared_hi)), Some(&1));
    assert_eq!(edges.get(&(shared_hi, shared_lo)), Some(&1));
}

#[test]
fn doubling_scale_doubles_xy_and_preserves_z() {
    let grid = terrain(5, 7);
    let base = build_solid(&grid, &SolidParams::default().with_scale(1.0)).unwrap();
    let doubled = build_solid(&grid, &SolidParams::default().with_scale(2.0)).unwrap();

    assert_eq!(base.facet_count(), doubled.facet_count());
    for (a, b) in base.facets.iter().zip(&doubled.facets) {
        for (va, vb) in [(a.v0, b.v0), (a.v1, b.v1), (a.v2, b.v2)] {
            assert_eq!(vb.x, va.x * 2.0);
            assert_eq!(vb.y, va.y * 2.0);
            assert_eq!(vb.z, va.z);
        }
    }
}

#[test]
fn facet_order_is_row_major_and_reproducible() {
    let grid = terrain(8, 8);
    let first = build_solid(&grid, &SolidParams::default()).unwrap();
    let second = build_solid(&grid, &SolidParams::default()).unwrap();
    assert_eq!(first, second);

    // Facets are emitted strip by strip: each facet's minimum y stays
    // within one cell of the strip front reached so far.
    let mut last_row_y = 0.0f64;
    for facet in &first.facets {
        let min_y = facet.v0.y.min(facet.v1.y).min(facet.v2.y);
        assert!(min_y + 1.0 >= last_row_y, "facet emitted out of row order");
        last_row_y = last_row_y.max(min_y);
    }
}
