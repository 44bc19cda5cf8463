//! The fixed nominal output frame.
//!
//! Projected points live in `[0, 256] × [0, 256]` regardless of any
//! display size. Lens-space coordinates in `[-1, 1]` map onto the frame
//! linearly; anything outside that range lands off-frame.

use caustic_math::{Bounds2, Point2};

/// Side length of the nominal frame.
pub const FRAME_SIZE: f64 = 256.0;

/// Lens units to frame units.
pub const FRAME_SCALE: f64 = 128.0;

/// Point emitted for rays that never cross the receiver plane.
pub const SENTINEL: Point2 = Point2::new(-9999.0, -9999.0);

/// Map a receiver-plane point (lens units) into the nominal frame.
#[inline]
pub fn to_frame(p: &Point2) -> Point2 {
    Point2::new(p.x * FRAME_SCALE + FRAME_SCALE, p.y * FRAME_SCALE + FRAME_SCALE)
}

/// Bounds of the nominal frame.
pub fn frame_bounds() -> Bounds2 {
    Bounds2::new(Point2::origin(), Point2::new(FRAME_SIZE, FRAME_SIZE))
}

/// True if `p` lies inside the nominal frame.
pub fn in_frame(p: &Point2) -> bool {
    frame_bounds().contains(p)
}

/// True if `p` is the degenerate-ray sentinel.
pub fn is_sentinel(p: &Point2) -> bool {
    *p == SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_frame() {
        assert_eq!(to_frame(&Point2::origin()), Point2::new(128.0, 128.0));
        assert_eq!(to_frame(&Point2::new(-1.0, 1.0)), Point2::new(0.0, 256.0));
        assert_eq!(to_frame(&Point2::new(0.5, -0.25)), Point2::new(192.0, 96.0));
    }

    #[test]
    fn test_sentinel_is_off_frame() {
        assert!(!in_frame(&SENTINEL));
        assert!(is_sentinel(&SENTINEL));
        assert!(in_frame(&Point2::new(0.0, 256.0)));
    }
}
