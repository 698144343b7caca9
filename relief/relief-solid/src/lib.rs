//! Row-parallel heightfield-to-solid mesh engine.
//!
//! Turns a finalized elevation grid into a closed, watertight triangulated
//! solid: the top surface follows the data, a flat bottom closes the
//! volume at z = 0, and four vertical walls connect the surface rim to the
//! base.
//!
//! # Design
//!
//! Facet generation is embarrassingly parallel across cell-rows. Each row
//! is a pure function of the read-only grid that returns its own facet
//! vector; the scheduler fans rows out over a rayon pool (or runs them
//! inline) and concatenates the results strictly by row index. Output is
//! therefore byte-for-byte identical for every concurrency mode, which the
//! tests assert directly.
//!
//! # Example
//!
//! ```
//! use relief_types::Heightfield;
//! use relief_solid::{build_solid, Concurrency, SolidParams};
//!
//! let grid = Heightfield::from_rows(vec![
//!     vec![0.2, 0.2, 0.2],
//!     vec![0.2, 1.0, 0.2],
//!     vec![0.2, 0.2, 0.2],
//! ]).unwrap();
//!
//! let params = SolidParams::default()
//!     .with_scale(0.5)
//!     .with_concurrency(Concurrency::parallel());
//! let solid = build_solid(&grid, &params).unwrap();
//! assert_eq!(solid.facet_count(), 32);
//! ```
//!
//! # Cancellation
//!
//! Long builds can be aborted cooperatively through a [`CancelToken`];
//! a cancelled build returns [`SolidError::Cancelled`] and discards all
//! partial output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod build;
mod cancel;
mod error;
mod facets;
mod params;

pub use build::{build_solid, build_solid_cancellable, expected_facet_count};
pub use cancel::CancelToken;
pub use error::{SolidError, SolidResult};
pub use facets::row_facets;
pub use params::{Concurrency, SolidParams};
