//! Error types for lens geometry loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading lens geometry.
///
/// Malformed individual records are not errors; they are skipped and
/// counted (see [`ParsedObj::skipped`](crate::ParsedObj::skipped)).
#[derive(Error, Debug)]
pub enum ObjError {
    /// The geometry source could not be opened or read.
    #[error("cannot read geometry source {}: {source}", path.display())]
    SourceUnreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source was read but produced no positions or no normals.
    #[error("no usable geometry: {positions} positions, {normals} normals")]
    EmptyGeometry {
        /// Number of position records accepted.
        positions: usize,
        /// Number of normal records accepted.
        normals: usize,
    },
}

impl ObjError {
    /// Create an unreadable-source error.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// True if the error is the empty-geometry condition.
    pub fn is_empty_geometry(&self) -> bool {
        matches!(self, Self::EmptyGeometry { .. })
    }
}
