//! Ray intersection with the receiver plane `z = distance`.

use caustic_math::{Point2, Point3, Tolerance, Vec3};

/// Where a ray crosses the receiver plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Ray parameter; `origin + t * direction` lies on the plane.
    pub t: f64,
    /// Intersection x and y in lens units.
    pub point: Point2,
}

/// Receiver plane perpendicular to the optical axis.
#[derive(Debug, Clone, Copy)]
pub struct ReceiverPlane {
    /// Plane z coordinate.
    pub z: f64,
    tolerance: Tolerance,
}

impl ReceiverPlane {
    /// Plane at `z = distance` with default tolerances.
    pub fn at(distance: f64) -> Self {
        Self {
            z: distance,
            tolerance: Tolerance::DEFAULT,
        }
    }

    /// Intersect the line `origin + t * direction` with the plane.
    ///
    /// Returns `None` when the direction is (near-)parallel to the plane.
    /// Negative `t` is allowed: a ray whose origin lies beyond the plane
    /// still gets the point where its line crosses it.
    pub fn intersect(&self, origin: &Point3, direction: &Vec3) -> Option<PlaneHit> {
        let denom = direction.z;
        if self.tolerance.is_parallel(denom) {
            return None;
        }
        let t = (self.z - origin.z) / denom;
        Some(PlaneHit {
            t,
            point: Point2::new(origin.x + direction.x * t, origin.y + direction.y * t),
        })
    }
}

/// Intersect a ray with the plane `z = distance`.
pub fn intersect_receiver(origin: &Point3, direction: &Vec3, distance: f64) -> Option<PlaneHit> {
    ReceiverPlane::at(distance).intersect(origin, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axial_ray() {
        let hit = intersect_receiver(&Point3::new(0.25, -0.5, 1.0), &Vec3::z(), 5.0).unwrap();
        assert_relative_eq!(hit.t, 4.0);
        assert_relative_eq!(hit.point.x, 0.25);
        assert_relative_eq!(hit.point.y, -0.5);
    }

    #[test]
    fn test_angled_ray() {
        let hit = intersect_receiver(&Point3::origin(), &Vec3::new(1.0, -2.0, 4.0), 2.0).unwrap();
        assert_relative_eq!(hit.t, 0.5);
        assert_relative_eq!(hit.point.x, 0.5);
        assert_relative_eq!(hit.point.y, -1.0);
    }

    #[test]
    fn test_parallel_ray() {
        assert!(intersect_receiver(&Point3::origin(), &Vec3::x(), 5.0).is_none());
        assert!(intersect_receiver(&Point3::origin(), &Vec3::new(1.0, 0.0, 1e-10), 5.0).is_none());
    }

    #[test]
    fn test_plane_behind_origin() {
        let hit = intersect_receiver(&Point3::new(0.0, 0.0, 3.0), &Vec3::new(1.0, 0.0, 1.0), 1.0).unwrap();
        assert_relative_eq!(hit.t, -2.0);
        assert_relative_eq!(hit.point.x, -2.0);
    }
}
