//! Loader output: index-aligned positions and normals.

use caustic_math::{LengthMismatch, Point3, Vec3};

/// Sampled lens surface.
///
/// Entry `i` of `positions` and `normals` describe the same sample, in
/// source record order. The arrays are not required to have equal length;
/// see [`LensGeometry::length_mismatch`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LensGeometry {
    /// Surface sample positions.
    pub positions: Vec<Point3>,
    /// Surface normals, expected to be unit length.
    pub normals: Vec<Vec3>,
}

impl LensGeometry {
    /// Create geometry from position and normal arrays.
    pub fn new(positions: Vec<Point3>, normals: Vec<Vec3>) -> Self {
        Self { positions, normals }
    }

    /// Number of samples that have both a position and a normal.
    pub fn aligned_len(&self) -> usize {
        self.positions.len().min(self.normals.len())
    }

    /// Report differing position/normal counts.
    pub fn length_mismatch(&self) -> Option<LengthMismatch> {
        LengthMismatch::check(self.positions.len(), self.normals.len())
    }

    /// True if either array is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.normals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_len() {
        let g = LensGeometry::new(
            vec![Point3::origin(); 5],
            vec![Vec3::z(); 3],
        );
        assert_eq!(g.aligned_len(), 3);
        assert_eq!(
            g.length_mismatch(),
            Some(LengthMismatch { left: 5, right: 3 })
        );
        assert!(!g.is_empty());
    }

    #[test]
    fn test_matched() {
        let g = LensGeometry::new(vec![Point3::origin()], vec![Vec3::z()]);
        assert!(g.length_mismatch().is_none());
        assert!(LensGeometry::default().is_empty());
    }
}
