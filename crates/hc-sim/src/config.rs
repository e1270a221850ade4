//! Plant configuration loading.
//!
//! A single YAML file with one optional section per subsystem. Every field
//! has a documented default, so a partial file, an empty file, and no file
//! at all are all valid configurations: a missing file is logged as a
//! warning and resolved to full defaults, never treated as fatal.

use crate::runner::SimOptions;
use hc_plant::{BraytonConfig, HeatRejectionConfig, RankineConfig, ReactorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Aggregate plant configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PlantConfig {
    pub reactor: ReactorConfig,
    pub brayton: BraytonConfig,
    pub rankine: RankineConfig,
    pub heat_rejection: HeatRejectionConfig,
    pub simulation: SimOptions,
}

impl PlantConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file resolves to full defaults with a warning. Malformed
    /// YAML is an error: a file that exists but cannot be parsed should not
    /// be silently replaced by defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_resolves_to_defaults() {
        let cfg = PlantConfig::load(Path::new("/nonexistent/heliocycle.yaml")).unwrap();
        assert_eq!(cfg, PlantConfig::default());
    }

    #[test]
    fn empty_document_resolves_to_defaults() {
        let cfg: PlantConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, PlantConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = r#"
reactor:
  nominal_thermal_power_mw: 45.0
simulation:
  duration_s: 3600.0
"#;
        let cfg: PlantConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.reactor.nominal_thermal_power_mw, 45.0);
        assert_eq!(cfg.reactor.target_outlet_temp_c, 850.0);
        assert_eq!(cfg.simulation.duration_s, 3600.0);
        assert_eq!(cfg.simulation.dt_s, 1.0);
        assert_eq!(cfg.brayton.pressure_ratio, 2.5);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let result: Result<PlantConfig, _> = serde_yaml::from_str("reactor: [not, a, map]");
        assert!(result.is_err());
    }
}
