#![warn(missing_docs)]

//! Refraction and projection stages of the caustic pipeline.
//!
//! - [`refract`] - Snell refraction of the axial ray at each surface normal
//! - [`plane`] - ray/receiver-plane intersection
//! - [`frame`] - the fixed `[0, 256]²` output frame
//! - [`project`] - per-sample projection onto the receiver plane
//!
//! # Example
//!
//! ```
//! use caustic_math::{Point3, Vec3};
//! use caustic_optics::{compute_intersections, compute_refractions};
//!
//! let positions = [Point3::origin()];
//! let normals = [Vec3::z()];
//! let dirs = compute_refractions(&normals, 1.457);
//! let proj = compute_intersections(&positions, &dirs, 5.0);
//! assert_eq!(proj.points.len(), 1);
//! ```

pub mod frame;
pub mod plane;
pub mod project;
pub mod refract;

pub use frame::{to_frame, FRAME_SIZE, SENTINEL};
pub use plane::{intersect_receiver, PlaneHit, ReceiverPlane};
pub use project::{compute_intersections, Projection};
pub use refract::{
    compute_refractions, count_total_internal, refract, Refraction, INCIDENT, TIR_DIRECTION,
};
