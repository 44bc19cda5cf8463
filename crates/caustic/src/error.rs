//! Error types for the caustic pipeline.

use caustic_obj::ObjError;
use thiserror::Error;

/// Errors surfaced to the host layer.
#[derive(Error, Debug)]
pub enum CausticError {
    /// Lens geometry could not be loaded.
    #[error(transparent)]
    Obj(#[from] ObjError),

    /// A plane distance argument is not a real number.
    #[error("invalid distance {0:?}: expected a real number")]
    InvalidDistance(String),

    /// Configuration values are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`CausticConfig`](crate::CausticConfig).
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for caustic operations.
pub type Result<T> = std::result::Result<T, CausticError>;
