//! Core data model for relief.
//!
//! This crate provides the foundational types for turning elevation rasters
//! into printable solids:
//!
//! - [`Heightfield`] - A rectangular grid of elevation samples
//! - [`Facet`] - One oriented triangle of an output solid
//! - [`Solid`] - The ordered set of facets forming a closed shape
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. Elevation
//! samples entering the solid engine are expected to already be in physical
//! vertical units; horizontal units are derived from a scale factor.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: east (grid column index increases east)
//! - Y: south (grid row index increases south)
//! - Z: height (up)
//!
//! Facet winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use relief_types::{Heightfield, Facet, Point3};
//!
//! let grid = Heightfield::from_rows(vec![
//!     vec![1.0, 1.0],
//!     vec![1.0, 2.0],
//! ]).unwrap();
//!
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.get(1, 1), 2.0);
//!
//! let facet = Facet::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! assert!((facet.area() - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod facet;
mod heightfield;
mod solid;

pub use facet::Facet;
pub use heightfield::Heightfield;
pub use solid::Solid;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
