//! Water-independent heat rejection stage.
//!
//! Dry cooling: rejecting the condenser duty costs fan/pump electricity,
//! modeled as a fixed fraction of the heat being rejected.

use crate::error::PlantResult;
use hc_core::numeric::require_unit_interval;
use serde::{Deserialize, Serialize};

/// Heat rejection configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeatRejectionConfig {
    /// Parasitic electrical load as a fraction of rejected heat, in [0, 1]
    pub parasitic_fraction: f64,
}

impl Default for HeatRejectionConfig {
    fn default() -> Self {
        Self {
            parasitic_fraction: 0.01,
        }
    }
}

/// Heat rejection stage. Pure function of its configuration.
#[derive(Debug, Clone)]
pub struct HeatRejection {
    cfg: HeatRejectionConfig,
}

impl HeatRejection {
    /// Build the stage from configuration.
    ///
    /// # Errors
    /// Returns an error if the parasitic fraction is outside [0, 1].
    pub fn new(cfg: HeatRejectionConfig) -> PlantResult<Self> {
        require_unit_interval(
            cfg.parasitic_fraction,
            "parasitic fraction must be in [0,1]",
        )?;
        Ok(Self { cfg })
    }

    /// Electricity consumed to reject `waste_heat_mw` [MW].
    pub fn parasitic_load(&self, waste_heat_mw: f64) -> f64 {
        waste_heat_mw * self.cfg.parasitic_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_percent() {
        let stage = HeatRejection::new(HeatRejectionConfig::default()).unwrap();
        assert!((stage.parasitic_load(200.0) - 2.0).abs() < 1e-12);
        assert_eq!(stage.parasitic_load(0.0), 0.0);
    }

    #[test]
    fn rejects_fraction_above_one() {
        let cfg = HeatRejectionConfig {
            parasitic_fraction: 1.1,
        };
        assert!(HeatRejection::new(cfg).is_err());
    }
}
