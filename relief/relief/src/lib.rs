//! Turn elevation rasters into watertight, printable STL solids.
//!
//! This umbrella crate re-exports the relief family, providing a unified
//! API for the whole pipeline:
//!
//! - [`types`] - Core data model: `Heightfield`, `Facet`, `Solid`
//! - [`raster`] - Preprocessing: clip, blur, normalize, pad, combine
//! - [`solid`] - Row-parallel heightfield-to-solid engine
//! - [`io`] - Binary STL output and ESRI ASCII grid input
//!
//! # Quick Start
//!
//! ```no_run
//! use relief::prelude::*;
//!
//! // Load a DEM tile
//! let tile = relief::io::read_asc("tile.asc").unwrap();
//!
//! // Preprocess: clamp, smooth, scale into physical units, add the skirt
//! let grid = relief::raster::clip(&tile.heightfield, 0.0, 4000.0).unwrap();
//! let grid = relief::raster::gaussian_blur(&grid, 1.0).unwrap();
//! let grid = relief::raster::normalize(&grid, 20.0, 2.0).unwrap();
//! let grid = relief::raster::pad(&grid, 2.0);
//!
//! // Generate the solid and write it
//! let params = SolidParams::default()
//!     .with_scale(0.5)
//!     .with_concurrency(Concurrency::parallel());
//! let solid = build_solid(&grid, &params).unwrap();
//! write_stl(&solid, "tile.stl", &StlHeader::default()).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Core data model: `Heightfield`, `Facet`, `Solid`.
pub use relief_types as types;

/// Elevation raster preprocessing.
pub use relief_raster as raster;

/// Row-parallel heightfield-to-solid engine.
pub use relief_solid as solid;

/// Binary STL output and ESRI ASCII grid input.
pub use relief_io as io;

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use relief_io::{AsciiGrid, StlHeader, read_asc, write_stl};
    pub use relief_solid::{
        CancelToken, Concurrency, SolidParams, build_solid, build_solid_cancellable,
        expected_facet_count,
    };
    pub use relief_types::{Facet, Heightfield, Point3, Solid, Vector3};
}
