//! A running caustic simulation.
//!
//! Owns the loaded lens, the refracted directions (computed once) and the
//! current receiver-plane distance with its projection. Every distance
//! change replaces the projection wholesale.

use caustic_math::{LengthMismatch, Point3, Vec3};
use caustic_obj::{read_obj, LensGeometry, ObjError};
use caustic_optics::{compute_intersections, compute_refractions, count_total_internal, Projection};
use log::{info, warn};

use crate::config::{CausticConfig, DEFAULT_STEP};
use crate::error::Result;

/// Pipeline state for one lens.
#[derive(Debug, Clone)]
pub struct Session {
    geometry: LensGeometry,
    refracteds: Vec<Vec3>,
    eta: f64,
    step: f64,
    projection: Projection,
}

impl Session {
    /// Load the lens named by `config` and compute the first projection.
    ///
    /// Fails if the config is invalid or the source is unreadable or empty.
    pub fn open(config: &CausticConfig) -> Result<Self> {
        config.validate()?;
        let geometry = read_obj(&config.source)?;
        let session = Self::from_geometry(geometry, config.eta, config.distance)?
            .with_step(config.step);
        info!(
            "{}: {} samples, eta {}, distance {}",
            config.source.display(),
            session.sample_count(),
            session.eta,
            session.distance()
        );
        Ok(session)
    }

    /// Start a session from already-loaded geometry.
    pub fn from_geometry(geometry: LensGeometry, eta: f64, distance: f64) -> Result<Self> {
        if geometry.is_empty() {
            return Err(ObjError::EmptyGeometry {
                positions: geometry.positions.len(),
                normals: geometry.normals.len(),
            }
            .into());
        }
        if let Some(m) = geometry.length_mismatch() {
            warn!("positions vs normals: {m}");
        }

        let refracteds = compute_refractions(&geometry.normals, eta);
        let tir = count_total_internal(&geometry.normals, eta);
        if tir > 0 {
            info!("{tir} samples totally internally reflect");
        }
        let projection = compute_intersections(&geometry.positions, &refracteds, distance);
        Ok(Self {
            geometry,
            refracteds,
            eta,
            step: DEFAULT_STEP,
            projection,
        })
    }

    /// Override the distance step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Current receiver-plane distance.
    pub fn distance(&self) -> f64 {
        self.projection.distance
    }

    /// Move the receiver plane and recompute the projection.
    pub fn set_distance(&mut self, distance: f64) -> &Projection {
        self.projection =
            compute_intersections(&self.geometry.positions, &self.refracteds, distance);
        &self.projection
    }

    /// Move the plane one step away from the lens.
    pub fn step_farther(&mut self) -> &Projection {
        self.set_distance(self.distance() + self.step)
    }

    /// Move the plane one step toward the lens.
    pub fn step_closer(&mut self) -> &Projection {
        self.set_distance(self.distance() - self.step)
    }

    /// Projection at the current distance.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Lens sample positions.
    pub fn positions(&self) -> &[Point3] {
        &self.geometry.positions
    }

    /// Lens surface normals.
    pub fn normals(&self) -> &[Vec3] {
        &self.geometry.normals
    }

    /// Refracted direction per normal.
    pub fn refracteds(&self) -> &[Vec3] {
        &self.refracteds
    }

    /// Refractive index ratio in use.
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Distance change per step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Samples with both a position and a normal.
    pub fn sample_count(&self) -> usize {
        self.geometry.aligned_len()
    }

    /// Position/normal count difference, if any.
    pub fn length_mismatch(&self) -> Option<LengthMismatch> {
        self.geometry.length_mismatch()
    }

    /// Samples whose rays totally internally reflect.
    pub fn total_internal_count(&self) -> usize {
        count_total_internal(&self.geometry.normals, self.eta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use caustic_optics::TIR_DIRECTION;

    fn flat_lens() -> LensGeometry {
        LensGeometry::new(
            vec![Point3::new(-0.5, 0.0, 0.0), Point3::new(0.5, 0.0, 0.0)],
            vec![Vec3::z(), Vec3::z()],
        )
    }

    #[test]
    fn test_stepping() {
        let mut s = Session::from_geometry(flat_lens(), 1.457, 1.0).unwrap();
        s.step_farther();
        assert_relative_eq!(s.distance(), 1.1, epsilon = 1e-12);
        s.step_closer();
        s.step_closer();
        assert_relative_eq!(s.distance(), 0.9, epsilon = 1e-12);
        let s = s.with_step(0.5);
        assert_eq!(s.step(), 0.5);
    }

    #[test]
    fn test_set_distance_replaces_projection() {
        let mut s = Session::from_geometry(flat_lens(), 1.457, 1.0).unwrap();
        let before = s.projection().clone();
        let after = s.set_distance(3.0).clone();
        assert_eq!(after.distance, 3.0);
        assert_eq!(after.points.len(), before.points.len());
        // Axial flat lens: points do not move with distance.
        assert_eq!(after.points, before.points);
        assert_eq!(s.positions(), flat_lens().positions.as_slice());
    }

    #[test]
    fn test_empty_geometry_rejected() {
        let g = LensGeometry::new(vec![Point3::origin()], vec![]);
        let err = Session::from_geometry(g, 1.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("no usable geometry"));
    }

    #[test]
    fn test_mismatched_geometry_uses_shorter() {
        let g = LensGeometry::new(vec![Point3::origin(); 5], vec![Vec3::z(); 3]);
        let s = Session::from_geometry(g, 1.0, 1.0).unwrap();
        assert_eq!(s.refracteds().len(), 3);
        assert_eq!(s.projection().points.len(), 3);
        assert_eq!(s.length_mismatch(), Some(LengthMismatch { left: 5, right: 3 }));
        assert_eq!(s.projection().mismatch, s.length_mismatch());
    }

    #[test]
    fn test_tir_samples_land_off_frame() {
        let g = LensGeometry::new(
            vec![Point3::origin(), Point3::origin()],
            vec![Vec3::z(), Vec3::new(0.866_025_403_784_438_6, 0.0, 0.5)],
        );
        let s = Session::from_geometry(g, 1.457, 1.0).unwrap();
        assert_eq!(s.refracteds()[1], TIR_DIRECTION);
        assert_eq!(s.total_internal_count(), 1);
        assert_eq!(s.projection().in_frame_count(), 1);
        assert!(s.projection().points[1].x.is_finite());
    }
}
