#![warn(missing_docs)]

//! Discrete caustic simulation.
//!
//! Loads a lens surface (positions and normals) from an OBJ file, refracts
//! an axial ray at every sample and projects the refracted rays onto a
//! receiver plane at a movable distance. Output points are expressed in a
//! fixed `[0, 256]²` frame; mapping to pixels is up to the caller.
//!
//! # Example
//!
//! ```no_run
//! use caustic::{CausticConfig, Session};
//!
//! let config = CausticConfig::new("lens.obj", 5.0);
//! let mut session = Session::open(&config).unwrap();
//! session.step_farther();
//! for p in &session.projection().points {
//!     println!("{} {}", p.x, p.y);
//! }
//! ```

pub use caustic_math;
pub use caustic_obj;
pub use caustic_optics;

mod config;
mod error;
mod session;

pub use caustic_obj::{read_obj, LensGeometry, ObjError};
pub use caustic_optics::{compute_intersections, compute_refractions, Projection};
pub use config::{parse_distance, CausticConfig, DEFAULT_ETA, DEFAULT_STEP};
pub use error::{CausticError, Result};
pub use session::Session;
