//! Pipeline configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CausticError, Result};

/// Refractive index ratio of the lens material the reference lenses were
/// generated for.
pub const DEFAULT_ETA: f64 = 1.457;

/// Default distance increment for one step of the host's distance controls.
pub const DEFAULT_STEP: f64 = 0.1;

/// Everything needed to start a session.
///
/// Loadable from TOML; missing keys take their defaults.
///
/// ```toml
/// source = "lens.obj"
/// distance = 5.0
/// eta = 1.457
/// step = 0.1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausticConfig {
    /// Path to the lens OBJ file.
    pub source: PathBuf,
    /// Initial receiver-plane z coordinate.
    pub distance: f64,
    /// Refractive index ratio (leaving / entering).
    pub eta: f64,
    /// Distance change per step.
    pub step: f64,
}

impl Default for CausticConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("lens.obj"),
            distance: 1.0,
            eta: DEFAULT_ETA,
            step: DEFAULT_STEP,
        }
    }
}

impl CausticConfig {
    /// Config for `source` at `distance` with default optics.
    pub fn new(source: impl Into<PathBuf>, distance: f64) -> Self {
        Self {
            source: source.into(),
            distance,
            ..Self::default()
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    ///
    /// A relative `source` is resolved against the config file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        if config.source.is_relative() {
            if let Some(dir) = path.parent() {
                config.source = dir.join(&config.source);
            }
        }
        Ok(config)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() {
            return Err(CausticError::InvalidConfig(
                "distance must be finite".into(),
            ));
        }
        if !self.eta.is_finite() || self.eta <= 0.0 {
            return Err(CausticError::InvalidConfig(
                "eta must be a positive real number".into(),
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(CausticError::InvalidConfig(
                "step must be a positive real number".into(),
            ));
        }
        Ok(())
    }
}

/// Parse a receiver-plane distance supplied by the host.
///
/// Accepts any finite real number, with surrounding whitespace.
pub fn parse_distance(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| CausticError::InvalidDistance(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = CausticConfig::default();
        assert_eq!(c.eta, DEFAULT_ETA);
        assert_eq!(c.step, DEFAULT_STEP);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let c = CausticConfig::from_toml_str("source = \"glass.obj\"\ndistance = 5.0\n").unwrap();
        assert_eq!(c.source, PathBuf::from("glass.obj"));
        assert_eq!(c.distance, 5.0);
        assert_eq!(c.eta, DEFAULT_ETA);
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = CausticConfig::from_toml_str("distance = \"far\"").unwrap_err();
        assert!(matches!(err, CausticError::Config(_)));
    }

    #[test]
    fn test_validate() {
        let mut c = CausticConfig::new("lens.obj", 2.0);
        c.eta = 0.0;
        assert!(matches!(c.validate(), Err(CausticError::InvalidConfig(_))));
        c.eta = 1.2;
        c.step = -0.1;
        assert!(c.validate().is_err());
        c.step = 0.1;
        c.distance = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("5.0").unwrap(), 5.0);
        assert_eq!(parse_distance(" -0.25 ").unwrap(), -0.25);
        assert_eq!(parse_distance("1e1").unwrap(), 10.0);
        for bad in ["", "five", "5.0m", "nan", "inf"] {
            match parse_distance(bad) {
                Err(CausticError::InvalidDistance(s)) => assert_eq!(s, bad),
                other => panic!("{bad:?}: unexpected {other:?}"),
            }
        }
    }
}
