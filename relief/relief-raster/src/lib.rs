//! Elevation raster preprocessing for relief.
//!
//! This crate turns raw elevation grids into the finalized heightfields the
//! solid engine consumes. Every step is an immutable transform: it takes a
//! [`Heightfield`](relief_types::Heightfield) by reference and returns a new
//! one, so the engine always receives a read-only grid with no in-place
//! mutation anywhere in the pipeline.
//!
//! The usual order, mirroring the command line:
//!
//! 1. [`fill_nodata`] - replace the raster's no-data sentinel
//! 2. [`clip`] - clamp samples into a min/max range
//! 3. [`gaussian_blur`] - suppress sampling noise
//! 4. [`transpose`] / [`vstack`] - orientation and combine policy
//! 5. [`normalize`] - map the range onto physical units above the base
//! 6. [`pad`] - add the flat border ring the walls are built against
//!
//! # Example
//!
//! ```
//! use relief_types::Heightfield;
//! use relief_raster::{clip, gaussian_blur, normalize, pad};
//!
//! let raw = Heightfield::from_rows(vec![
//!     vec![120.0, 140.0, 130.0],
//!     vec![110.0, 180.0, 125.0],
//!     vec![115.0, 135.0, 120.0],
//! ]).unwrap();
//!
//! let clipped = clip(&raw, 100.0, 150.0).unwrap();
//! let smooth = gaussian_blur(&clipped, 1.0).unwrap();
//! let scaled = normalize(&smooth, 1.0, 0.1).unwrap();
//! let finalized = pad(&scaled, 0.1);
//! assert_eq!(finalized.rows(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod blur;
mod clip;
mod error;
mod normalize;
mod shape;

pub use blur::gaussian_blur;
pub use clip::{clip, fill_nodata};
pub use error::{RasterError, RasterResult};
pub use normalize::normalize;
pub use shape::{pad, transpose, vstack};
