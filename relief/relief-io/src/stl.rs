//! Binary STL (Stereolithography) output.
//!
//! # Format
//!
//! ```text
//! UINT8[80]    – Header; must NOT begin with "solid"
//! UINT32       – Number of triangles, little-endian
//! foreach triangle
//!     REAL32[3] – Normal vector (derived from winding, zero if degenerate)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! A valid file is therefore exactly `84 + 50 * N` bytes long. Only the
//! binary variant is emitted; a leading "solid" would make naive parsers
//! read the file as the ASCII variant, so header text starting with it is
//! rejected before any byte is written.

use std::io::{BufWriter, Write};
use std::path::Path;

use relief_types::Solid;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Header prefix reserved for the ASCII variant of the format.
const RESERVED_PREFIX: &[u8] = b"solid";

/// Validated 80-byte header for a binary STL file.
///
/// Construction enforces the two format rules: the text must fit the fixed
/// 80-byte field, and it must not begin with `solid`. The remainder of the
/// field is padded with spaces.
///
/// # Example
///
/// ```
/// use relief_io::StlHeader;
///
/// let header = StlHeader::new("Mount St. Helens, 1:250000").unwrap();
/// assert_eq!(header.as_bytes().len(), 80);
/// assert!(StlHeader::new("solid oops").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StlHeader {
    bytes: [u8; HEADER_SIZE],
}

impl StlHeader {
    /// Build a header from free-form text.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::HeaderTooLong`] if the text exceeds 80 bytes and
    /// [`IoError::ReservedHeaderPrefix`] if it begins with `solid`.
    pub fn new(text: &str) -> IoResult<Self> {
        let raw = text.as_bytes();
        if raw.len() > HEADER_SIZE {
            return Err(IoError::HeaderTooLong { length: raw.len() });
        }
        if raw.starts_with(RESERVED_PREFIX) {
            return Err(IoError::ReservedHeaderPrefix);
        }
        let mut bytes = [b' '; HEADER_SIZE];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self { bytes })
    }

    /// The padded 80-byte field.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.bytes
    }
}

impl Default for StlHeader {
    /// A generator tag; never begins with the reserved prefix.
    fn default() -> Self {
        let mut bytes = [b' '; HEADER_SIZE];
        let text = b"Binary STL generated by relief-io";
        bytes[..text.len()].copy_from_slice(text);
        Self { bytes }
    }
}

/// Write a solid to `path` as binary STL with atomic replace semantics.
///
/// The bytes are serialized into a temporary file in the destination's
/// directory and moved into place only after every byte has been written,
/// so a failure part-way never leaves a truncated or partially-valid file
/// at `path`.
///
/// # Errors
///
/// Returns [`IoError::FacetCountOverflow`] for solids beyond the format's
/// u32 facet count, or [`IoError::Io`] for any underlying write failure.
/// On error the destination path is untouched.
///
/// # Example
///
/// ```no_run
/// use relief_io::{write_stl, StlHeader};
/// use relief_types::Solid;
///
/// let solid = Solid::new();
/// write_stl(&solid, "flat.stl", &StlHeader::default()).unwrap();
/// ```
pub fn write_stl<P: AsRef<Path>>(solid: &Solid, path: P, header: &StlHeader) -> IoResult<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_stl_to(solid, &mut writer, header)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| IoError::Io(e.error))?;

    info!(
        path = %path.display(),
        facets = solid.facet_count(),
        bytes = 84 + 50 * solid.facet_count(),
        "Wrote binary STL"
    );
    Ok(())
}

/// Serialize a solid as binary STL into any writer.
///
/// Emits exactly `84 + 50 * N` bytes for `N` facets.
///
/// # Errors
///
/// Returns [`IoError::FacetCountOverflow`] if the facet count does not fit
/// the format's u32 field, or [`IoError::Io`] on write failure.
pub fn write_stl_to<W: Write>(solid: &Solid, writer: &mut W, header: &StlHeader) -> IoResult<()> {
    let facet_count = u32::try_from(solid.facet_count()).map_err(|_| {
        IoError::FacetCountOverflow {
            count: solid.facet_count(),
        }
    })?;

    writer.write_all(header.as_bytes())?;
    writer.write_all(&facet_count.to_le_bytes())?;

    for facet in &solid.facets {
        let normal = facet.normal_or_zero();
        write_vector(writer, normal.x, normal.y, normal.z)?;
        write_vector(writer, facet.v0.x, facet.v0.y, facet.v0.z)?;
        write_vector(writer, facet.v1.x, facet.v1.y, facet.v1.z)?;
        write_vector(writer, facet.v2.x, facet.v2.y, facet.v2.z)?;
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write three coordinates as little-endian f32.
fn write_vector<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: f64 to f32 is intentional, the STL format stores f32
    {
        writer.write_all(&(x as f32).to_le_bytes())?;
        writer.write_all(&(y as f32).to_le_bytes())?;
        writer.write_all(&(z as f32).to_le_bytes())?;
    }
    Ok(())
}
