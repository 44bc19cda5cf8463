#![warn(missing_docs)]

//! Lens geometry loader.
//!
//! Reads the `v` (position) and `vn` (normal) records of an OBJ file into
//! index-aligned arrays. Everything else in the file (faces, texture
//! coordinates, groups, materials) is ignored.
//!
//! # Example
//!
//! ```no_run
//! use caustic_obj::read_obj;
//!
//! let lens = read_obj("lens.obj").unwrap();
//! println!("{} samples", lens.aligned_len());
//! ```

mod error;
mod geometry;
mod reader;
pub mod record;

pub use error::ObjError;
pub use geometry::LensGeometry;
pub use reader::{parse_records, read_obj, read_obj_from_buffer, ParsedObj};
