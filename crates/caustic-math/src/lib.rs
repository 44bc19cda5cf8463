#![warn(missing_docs)]

//! Math types for the caustic pipeline.
//!
//! Thin wrappers around nalgebra providing the handful of types the
//! loader, refraction and projection stages share: points, vectors,
//! 2D bounds, tolerances and the index-alignment diagnostic.

use std::fmt;

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Tolerance constants for the refraction and intersection stages.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Smallest `|D.z|` for which a ray still counts as crossing a z-plane.
    pub parallel: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 for the ray/plane denominator).
    pub const DEFAULT: Self = Self { parallel: 1e-9 };

    /// Check whether a ray direction component is too small to divide by.
    pub fn is_parallel(&self, denom: f64) -> bool {
        denom.abs() < self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Two arrays that should be index-aligned but are not.
///
/// Stages that receive such arrays iterate over `min(left, right)` entries
/// and hand this value back so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Length of the first array (positions).
    pub left: usize,
    /// Length of the second array (normals or refracted directions).
    pub right: usize,
}

impl LengthMismatch {
    /// Compare two lengths, returning a mismatch if they differ.
    pub fn check(left: usize, right: usize) -> Option<Self> {
        (left != right).then_some(Self { left, right })
    }

    /// Number of entries both arrays have in common.
    pub fn aligned(&self) -> usize {
        self.left.min(self.right)
    }
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length mismatch: {} vs {} (using {})",
            self.left,
            self.right,
            self.aligned()
        )
    }
}

/// Axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Create bounds from min and max corners.
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) box suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Bounds of a set of points, or `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut bounds = Self::empty();
        let mut any = false;
        for p in points {
            bounds.include_point(p);
            any = true;
        }
        any.then_some(bounds)
    }

    /// Expand the box to include a point.
    pub fn include_point(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Test whether a point lies inside (boundary inclusive).
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
