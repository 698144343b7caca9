//! dem2solid - generate a binary STL solid from elevation rasters.
//!
//! Reads one or more ESRI ASCII grid files, preprocesses them (no-data
//! fill, clipping, smoothing), scales them into physical units, and emits
//! closed, watertight STL solids ready for printing.
//!
//! # Examples
//!
//! One solid per input tile:
//!
//! ```text
//! dem2solid out north.asc south.asc --hsize 100 --vsize 20 --base 2
//! ```
//!
//! All tiles stacked into one piece with a 10-row gap:
//!
//! ```text
//! dem2solid combined north.asc south.asc --combine vstack --cdist 10 -p
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use relief::prelude::*;
use relief::raster;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate an STL solid from elevation rasters.
#[derive(Parser, Debug)]
#[command(name = "dem2solid")]
#[command(about = "Generate a binary STL solid from elevation rasters", long_about = None)]
#[command(version)]
struct Cli {
    /// Output stem for `--combine vstack`; the file is written as
    /// DESTINATION.stl. Ignored under `--combine sep`, where each piece is
    /// named after its source.
    destination: PathBuf,

    /// Elevation rasters to read (ESRI ASCII grid)
    #[arg(required = true)]
    sourcefile: Vec<PathBuf>,

    /// Physical width of the output in arbitrary units
    #[arg(long, default_value_t = 1.0)]
    hsize: f64,

    /// Physical height range of the surface in arbitrary units
    #[arg(long, default_value_t = 1.0)]
    vsize: f64,

    /// Clip input data to this minimum value
    #[arg(long, default_value_t = f64::NEG_INFINITY)]
    min: f64,

    /// Clip input data to this maximum value
    #[arg(long, default_value_t = f64::INFINITY)]
    max: f64,

    /// Flat material thickness added under the surface, in arbitrary units
    #[arg(long, default_value_t = 0.0)]
    base: f64,

    /// Gaussian smoothing sigma in cells; 0 disables smoothing
    #[arg(long, default_value_t = 1.0)]
    blur_sigma: f64,

    /// Run facet generation in parallel
    #[arg(short, long)]
    parallel: bool,

    /// How to combine multiple input files
    #[arg(short, long, value_enum, default_value_t = Combine::Sep)]
    combine: Combine,

    /// Separation rows between stacked grids
    #[arg(long, default_value_t = 0)]
    cdist: usize,

    /// Transpose the input data
    #[arg(short, long)]
    rotate: bool,

    /// Text embedded in the STL header (at most 80 bytes, must not begin
    /// with "solid")
    #[arg(long)]
    name: Option<String>,
}

/// Multi-input combine policy.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    /// One output file per input file.
    Sep,
    /// Stack all inputs vertically into one output file.
    Vstack,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    // Header problems are configuration errors; fail before reading any data.
    let header = match &cli.name {
        Some(text) => StlHeader::new(text).context("invalid --name header text")?,
        None => StlHeader::default(),
    };

    let concurrency = if cli.parallel {
        Concurrency::parallel()
    } else {
        Concurrency::Sequential
    };

    let mut grids = Vec::with_capacity(cli.sourcefile.len());
    for source in &cli.sourcefile {
        let grid = load_grid(source, cli)
            .with_context(|| format!("preprocessing input {}", source.display()))?;
        grids.push(grid);
    }

    match cli.combine {
        Combine::Vstack => {
            let fill = global_floor(&grids);
            let stacked = raster::vstack(&grids, cli.cdist, fill)
                .context("stacking input grids vertically")?;
            let destination = stl_destination(&cli.destination);
            write_piece(&stacked, &destination, cli, concurrency, &header)?;
        }
        Combine::Sep => {
            for (grid, source) in grids.iter().zip(&cli.sourcefile) {
                let destination = stl_destination(source);
                write_piece(grid, &destination, cli, concurrency, &header)?;
            }
        }
    }

    Ok(())
}

/// Read one raster and run the per-file preprocessing steps on it.
fn load_grid(source: &Path, cli: &Cli) -> Result<Heightfield> {
    let tile = read_asc(source).with_context(|| format!("reading {}", source.display()))?;
    let mut grid = tile.heightfield;

    if let Some(sentinel) = tile.nodata {
        let replacement = nodata_replacement(&grid, sentinel, cli.min);
        grid = raster::fill_nodata(&grid, sentinel, replacement);
    }
    if cli.rotate {
        grid = raster::transpose(&grid);
    }
    grid = raster::clip(&grid, cli.min, cli.max)?;
    if cli.blur_sigma > 0.0 {
        grid = raster::gaussian_blur(&grid, cli.blur_sigma)?;
    }
    Ok(grid)
}

/// Normalize, pad, generate, and write one output piece.
fn write_piece(
    grid: &Heightfield,
    destination: &Path,
    cli: &Cli,
    concurrency: Concurrency,
    header: &StlHeader,
) -> Result<()> {
    let grid = raster::normalize(grid, cli.vsize, cli.base)
        .with_context(|| format!("scaling elevations for {}", destination.display()))?;
    let grid = raster::pad(&grid, cli.base);

    let params = SolidParams::default()
        .with_scale(derive_scale(cli.hsize, grid.cols()))
        .with_concurrency(concurrency);
    let solid = build_solid(&grid, &params)
        .with_context(|| format!("generating solid for {}", destination.display()))?;

    write_stl(&solid, destination, header)
        .with_context(|| format!("writing {}", destination.display()))?;
    info!(
        destination = %destination.display(),
        facets = solid.facet_count(),
        "Saved solid"
    );
    Ok(())
}

/// Horizontal scale in physical units per grid cell.
fn derive_scale(hsize: f64, cols: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    // Column counts are far below 2^52; the cast is exact.
    let cols = cols as f64;
    hsize / cols
}

/// Replacement value for no-data samples: the clip floor when one is set,
/// otherwise the lowest real sample so holes sink to the base.
fn nodata_replacement(grid: &Heightfield, sentinel: f64, clip_min: f64) -> f64 {
    if clip_min.is_finite() {
        return clip_min;
    }
    grid.samples()
        .iter()
        .copied()
        .filter(|&v| v != sentinel && v.is_finite())
        .fold(f64::INFINITY, f64::min)
}

/// The lowest sample across all grids; used to fill separation bands so
/// they map to the base after normalization.
fn global_floor(grids: &[Heightfield]) -> f64 {
    grids
        .iter()
        .filter_map(Heightfield::sample_range)
        .map(|(lo, _)| lo)
        .fold(f64::INFINITY, f64::min)
}

/// Output path for one piece.
fn stl_destination(path: &Path) -> PathBuf {
    path.with_extension("stl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_divides_width_by_columns() {
        assert!((derive_scale(100.0, 200) - 0.5).abs() < 1e-12);
        assert!((derive_scale(1.0, 4) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn destination_replaces_extension() {
        assert_eq!(stl_destination(Path::new("tile.asc")), Path::new("tile.stl"));
        assert_eq!(stl_destination(Path::new("out")), Path::new("out.stl"));
    }

    #[test]
    fn nodata_prefers_clip_floor() {
        let grid = Heightfield::from_rows(vec![vec![5.0, -9999.0]]).unwrap();
        assert!((nodata_replacement(&grid, -9999.0, 2.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn nodata_falls_back_to_lowest_real_sample() {
        let grid = Heightfield::from_rows(vec![vec![5.0, -9999.0, 3.0]]).unwrap();
        let replacement = nodata_replacement(&grid, -9999.0, f64::NEG_INFINITY);
        assert!((replacement - 3.0).abs() < 1e-12);
    }

    #[test]
    fn global_floor_spans_all_grids() {
        let a = Heightfield::from_elem(2, 2, 4.0).unwrap();
        let b = Heightfield::from_elem(2, 2, 1.5).unwrap();
        assert!((global_floor(&[a, b]) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn end_to_end_sep_writes_one_file_per_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("tile.asc");
        std::fs::write(
            &source,
            "ncols 3\nnrows 3\ncellsize 1.0\n1 1 1\n1 5 1\n1 1 1\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "dem2solid",
            dir.path().join("unused").to_str().unwrap(),
            source.to_str().unwrap(),
            "--blur-sigma",
            "0",
            "--base",
            "0.2",
        ]);
        run(&cli).unwrap();

        let out = dir.path().join("tile.stl");
        let bytes = std::fs::read(out).unwrap();
        // 5x5 padded samples -> 4x4 interior cells.
        assert_eq!(bytes.len() as u64, 84 + 50 * (4 * 16 + 4 * 4 + 4 * 4));
    }

    #[test]
    fn end_to_end_vstack_writes_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.asc");
        let b = dir.path().join("b.asc");
        std::fs::write(&a, "ncols 2\nnrows 2\n1 2\n3 4\n").unwrap();
        std::fs::write(&b, "ncols 2\nnrows 2\n4 3\n2 1\n").unwrap();

        let cli = Cli::parse_from([
            "dem2solid",
            dir.path().join("stacked").to_str().unwrap(),
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--combine",
            "vstack",
            "--cdist",
            "1",
            "--blur-sigma",
            "0",
            "--parallel",
        ]);
        run(&cli).unwrap();

        // 2+1+2 stacked rows, padded to 7x4 samples.
        let bytes = std::fs::read(dir.path().join("stacked.stl")).unwrap();
        let expected = relief::solid::expected_facet_count(7, 4).unwrap();
        assert_eq!(bytes.len() as u64, 84 + 50 * expected);
    }

    #[test]
    fn header_error_is_configuration_time() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("tile.asc");
        std::fs::write(&source, "ncols 2\nnrows 2\n1 2\n3 4\n").unwrap();

        let cli = Cli::parse_from([
            "dem2solid",
            "out",
            source.to_str().unwrap(),
            "--name",
            "solid name",
        ]);
        assert!(run(&cli).is_err());
        assert!(!Path::new("out.stl").exists());
        assert!(!dir.path().join("tile.stl").exists());
    }
}
