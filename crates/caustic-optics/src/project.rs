//! Receiver-plane projection of refracted rays.

use caustic_math::{Bounds2, LengthMismatch, Point2, Point3, Vec3};
use log::{debug, warn};

use crate::frame::{in_frame, is_sentinel, to_frame, SENTINEL};
use crate::plane::ReceiverPlane;

/// Projected points for one receiver-plane distance.
///
/// `points[i]` belongs to sample `i`. Rays parallel to the plane keep
/// their slot with [`SENTINEL`](crate::SENTINEL).
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Receiver-plane distance these points were computed for.
    pub distance: f64,
    /// One point per aligned sample, in the nominal frame.
    pub points: Vec<Point2>,
    /// Present when positions and directions had different lengths.
    pub mismatch: Option<LengthMismatch>,
}

impl Projection {
    /// Number of projected points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing was projected.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points that fall inside the nominal frame.
    pub fn in_frame_count(&self) -> usize {
        self.points.iter().filter(|p| in_frame(p)).count()
    }

    /// Rays that were parallel to the receiver plane.
    pub fn degenerate_count(&self) -> usize {
        self.points.iter().filter(|p| is_sentinel(p)).count()
    }

    /// Bounds of all finite, non-sentinel points.
    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_points(
            self.points
                .iter()
                .filter(|p| !is_sentinel(p) && p.x.is_finite() && p.y.is_finite()),
        )
    }
}

/// Project every `(position, direction)` pair onto the plane `z = distance`.
///
/// Iterates over `min(positions.len(), refracteds.len())` pairs. A length
/// difference is logged and returned in [`Projection::mismatch`] rather
/// than treated as an error. Each call builds a new point array.
pub fn compute_intersections(
    positions: &[Point3],
    refracteds: &[Vec3],
    distance: f64,
) -> Projection {
    let mismatch = LengthMismatch::check(positions.len(), refracteds.len());
    if let Some(m) = mismatch {
        warn!("positions vs refracted directions: {m}");
    }

    let plane = ReceiverPlane::at(distance);
    let points: Vec<Point2> = positions
        .iter()
        .zip(refracteds)
        .map(|(p, d)| match plane.intersect(p, d) {
            Some(hit) => to_frame(&hit.point),
            None => SENTINEL,
        })
        .collect();

    debug!("projected {} points at z={distance}", points.len());
    Projection {
        distance,
        points,
        mismatch,
    }
}
