//! Vector-form Snell refraction of axial rays.
//!
//! Every sample is lit by the same incident direction `(0, 0, 1)`, so the
//! refracted direction depends only on the surface normal and `eta`.

use caustic_math::Vec3;

/// Incident ray direction shared by every sample.
pub const INCIDENT: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Direction substituted for totally internally reflected rays.
///
/// Nearly horizontal with a small positive z, so the receiver-plane
/// intersection stays finite but lands far outside the nominal frame.
pub const TIR_DIRECTION: Vec3 = Vec3::new(0.9999, 0.0, 0.0141418);

/// Outcome of refracting one axial ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction {
    /// Transmitted direction (not normalized).
    Transmitted(Vec3),
    /// `sin²θt > 1`: no transmitted ray.
    TotalInternalReflection,
}

impl Refraction {
    /// Direction to trace, with [`TIR_DIRECTION`] standing in for TIR.
    pub fn direction(&self) -> Vec3 {
        match self {
            Refraction::Transmitted(d) => *d,
            Refraction::TotalInternalReflection => TIR_DIRECTION,
        }
    }

    /// True for total internal reflection.
    pub fn is_total_internal(&self) -> bool {
        matches!(self, Refraction::TotalInternalReflection)
    }
}

/// Refract the axial ray at a surface with normal `normal`.
///
/// `eta` is the index of the medium being left over the index of the
/// medium being entered. Computes `T = eta·I − (eta·cosI − √(1 − sin²T))·N`
/// with `cosI = N.z`.
pub fn refract(normal: &Vec3, eta: f64) -> Refraction {
    let cos_i = normal.z;
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return Refraction::TotalInternalReflection;
    }
    let sqrt_term = (1.0 - sin2_t).sqrt();
    Refraction::Transmitted(eta * INCIDENT - (eta * cos_i - sqrt_term) * normal)
}

/// Refracted direction for every normal, in order.
pub fn compute_refractions(normals: &[Vec3], eta: f64) -> Vec<Vec3> {
    normals.iter().map(|n| refract(n, eta).direction()).collect()
}

/// Number of normals that totally internally reflect at `eta`.
pub fn count_total_internal(normals: &[Vec3], eta: f64) -> usize {
    normals
        .iter()
        .filter(|n| refract(n, eta).is_total_internal())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matched_indices_pass_straight_through() {
        let normals = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.6, 0.0, 0.8),
            Vec3::new(0.0, -0.28, 0.96),
            Vec3::new(0.48, 0.6, 0.64),
        ];
        for d in compute_refractions(&normals, 1.0) {
            assert_relative_eq!(d, INCIDENT, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normal_incidence_closed_form() {
        let n = Vec3::z();
        for eta in [0.5, 1.0, 1.457, 2.0] {
            let d = refract(&n, eta).direction();
            let expected = eta * INCIDENT - (eta - 1.0) * n;
            assert_eq!(d, expected);
            assert_relative_eq!(d.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_oblique_refraction_obeys_snell() {
        // 30 degree incidence into a denser medium.
        let eta = 1.0 / 1.5;
        let angle = 30f64.to_radians();
        let n = Vec3::new(-angle.sin(), 0.0, angle.cos());
        let t = refract(&n, eta).direction().normalize();
        let sin_t = t.cross(&n).norm();
        assert_relative_eq!(sin_t, eta * angle.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_total_internal_reflection() {
        // sin2T = 1.457^2 * (1 - 0.5^2) > 1
        let n = Vec3::new(0.866_025_403_784_438_6, 0.0, 0.5);
        let r = refract(&n, 1.457);
        assert!(r.is_total_internal());
        assert_eq!(r.direction(), TIR_DIRECTION);
        let again = compute_refractions(&[n, n], 1.457);
        assert_eq!(again[0], TIR_DIRECTION);
        assert_eq!(again[1], TIR_DIRECTION);
        assert_eq!(count_total_internal(&[n, Vec3::z()], 1.457), 1);
    }

    #[test]
    fn test_critical_angle_transmits() {
        // sin2T == 1 exactly is still a refraction.
        let n = Vec3::new(1.0, 0.0, 0.0);
        let r = refract(&n, 1.0);
        assert!(!r.is_total_internal());
        assert_relative_eq!(r.direction(), INCIDENT, epsilon = 1e-12);
    }

    #[test]
    fn test_one_direction_per_normal() {
        let normals = vec![Vec3::z(); 7];
        assert_eq!(compute_refractions(&normals, 1.457).len(), 7);
        assert!(compute_refractions(&[], 1.457).is_empty());
    }
}
