//! Facet type for solid construction.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One triangle of an output solid.
///
/// Stores concrete vertex positions; facets are value types and never
/// reference each other.
///
/// Winding is **counter-clockwise (CCW) when viewed from outside** the
/// solid, so the facet normal points away from the interior by the
/// right-hand rule.
///
/// # Example
///
/// ```
/// use relief_types::{Facet, Point3};
///
/// let facet = Facet::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// // Normal points in +Z direction
/// let normal = facet.normal().unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facet {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Facet {
    /// Create a new facet from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a facet from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::Facet;
    ///
    /// let facet = Facet::from_arrays(
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// assert!((facet.area() - 0.5).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Compute the (unnormalized) facet normal via cross product.
    ///
    /// The direction follows the right-hand rule with CCW winding.
    /// The magnitude equals twice the facet's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit facet normal.
    ///
    /// Returns `None` for degenerate facets (zero area). Mesh consumers
    /// recompute true normals from winding order, so a missing normal is
    /// serialized as the zero vector.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// The unit facet normal, or the zero vector when degenerate.
    #[inline]
    #[must_use]
    pub fn normal_or_zero(&self) -> Vector3<f64> {
        self.normal().unwrap_or_else(Vector3::zeros)
    }

    /// Area of the facet.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() / 2.0
    }
}
