//! ESRI ASCII grid (`.asc`) input.
//!
//! The simplest widely used DEM interchange format: a short key/value
//! header followed by `nrows` lines of `ncols` whitespace-separated
//! samples.
//!
//! ```text
//! ncols         4
//! nrows         3
//! xllcorner     0.0
//! yllcorner     0.0
//! cellsize      30.0
//! NODATA_value  -9999
//! 12.1 12.7 13.0 13.2
//! 11.9 12.4 -9999 13.0
//! 11.7 12.0 12.6 12.8
//! ```
//!
//! Row order in the file is north to south, matching the heightfield's
//! row-index convention.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use relief_types::Heightfield;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// A parsed ASCII grid: the heightfield plus raster metadata.
#[derive(Debug, Clone)]
pub struct AsciiGrid {
    /// The elevation samples.
    pub heightfield: Heightfield,
    /// Ground distance covered by one cell.
    pub cellsize: f64,
    /// X map coordinate of the lower-left corner.
    pub xllcorner: f64,
    /// Y map coordinate of the lower-left corner.
    pub yllcorner: f64,
    /// The no-data sentinel, when the header declares one.
    pub nodata: Option<f64>,
}

/// Read an ESRI ASCII grid file.
///
/// Header keys are matched case-insensitively; `ncols` and `nrows` are
/// required, the rest default to zero/one/none. The body must contain
/// exactly `nrows * ncols` samples.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A required header field is missing
/// - The body holds the wrong number of samples or an unparseable one
///
/// # Example
///
/// ```no_run
/// use relief_io::read_asc;
///
/// let grid = read_asc("tile.asc").unwrap();
/// println!("{} x {} samples", grid.heightfield.rows(), grid.heightfield.cols());
/// ```
pub fn read_asc<P: AsRef<Path>>(path: P) -> IoResult<AsciiGrid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let mut ncols: Option<usize> = None;
    let mut nrows: Option<usize> = None;
    let mut xllcorner = 0.0;
    let mut yllcorner = 0.0;
    let mut cellsize = 1.0;
    let mut nodata: Option<f64> = None;
    let mut samples: Vec<f64> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            continue;
        };

        match first.to_ascii_lowercase().as_str() {
            "ncols" => ncols = Some(header_value(&mut parts, "ncols")?.parse()?),
            "nrows" => nrows = Some(header_value(&mut parts, "nrows")?.parse()?),
            "xllcorner" => xllcorner = header_value(&mut parts, "xllcorner")?.parse()?,
            "yllcorner" => yllcorner = header_value(&mut parts, "yllcorner")?.parse()?,
            "cellsize" => cellsize = header_value(&mut parts, "cellsize")?.parse()?,
            "nodata_value" => nodata = Some(header_value(&mut parts, "nodata_value")?.parse()?),
            _ => {
                // Data row; the first token is a sample too.
                samples.push(first.parse()?);
                for token in parts {
                    samples.push(token.parse()?);
                }
            }
        }
    }

    let ncols = ncols.ok_or(IoError::MissingField { field: "ncols" })?;
    let nrows = nrows.ok_or(IoError::MissingField { field: "nrows" })?;

    let expected = nrows * ncols;
    if samples.len() != expected {
        return Err(IoError::SampleCountMismatch {
            expected,
            got: samples.len(),
        });
    }

    let heightfield = Heightfield::from_row_major(nrows, ncols, samples)
        .ok_or_else(|| IoError::invalid_content("grid dimensions must be at least 1x1"))?;

    debug!(
        path = %path.display(),
        rows = nrows,
        cols = ncols,
        cellsize,
        nodata,
        "Read ASCII grid"
    );

    Ok(AsciiGrid {
        heightfield,
        cellsize,
        xllcorner,
        yllcorner,
        nodata,
    })
}

/// The value token following a header key.
fn header_value<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> IoResult<&'a str> {
    parts.next().ok_or(IoError::MissingField { field })
}
