//! File I/O for relief.
//!
//! This crate owns both ends of the pipeline's contact with the
//! filesystem:
//!
//! - **Binary STL output** - wire-exact serialization of a
//!   [`Solid`](relief_types::Solid) with atomic replace semantics
//! - **ESRI ASCII grid input** - the `.asc` DEM interchange format,
//!   surfacing the grid plus its no-data sentinel
//!
//! # Example
//!
//! ```no_run
//! use relief_io::{read_asc, write_stl, StlHeader};
//! use relief_solid::{build_solid, SolidParams};
//!
//! let grid = read_asc("tile.asc").unwrap();
//! let solid = build_solid(&grid.heightfield, &SolidParams::default()).unwrap();
//! write_stl(&solid, "tile.stl", &StlHeader::default()).unwrap();
//! ```
//!
//! # Atomicity
//!
//! [`write_stl`] never leaves a truncated file at the destination: bytes
//! are staged in a temporary file in the same directory and renamed into
//! place only after the last byte is flushed. An injected failure part-way
//! through serialization leaves the destination untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod asc;
mod error;
mod stl;

pub use asc::{AsciiGrid, read_asc};
pub use error::{IoError, IoResult};
pub use stl::{StlHeader, write_stl, write_stl_to};
