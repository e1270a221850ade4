//! Closed-cycle gas turbine (Brayton) topping cycle.
//!
//! Ideal-gas cycle: thermal efficiency depends only on the pressure ratio
//! and the gas specific-heat ratio. Conversion enforces the first law
//! exactly: generator losses are still dissipated into the exhaust stream,
//! so `work + exhaust_heat == q_in` for any generator efficiency.

use crate::error::PlantResult;
use hc_core::numeric::{require_fraction, require_greater_than};
use serde::{Deserialize, Serialize};

/// Brayton cycle configuration.
///
/// Defaults describe a helium turbine at a modest 2.5 pressure ratio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BraytonConfig {
    /// Compressor/turbine design pressure ratio (> 1)
    pub pressure_ratio: f64,
    /// Specific heat ratio γ = cp/cv of the working gas
    pub gamma: f64,
    /// Generator (electrical) efficiency, in (0, 1]
    pub generator_efficiency: f64,
    /// Fraction of the ideal adiabatic temperature drop actually realized,
    /// in (0, 1]
    pub expansion_recovery_factor: f64,
}

impl Default for BraytonConfig {
    fn default() -> Self {
        Self {
            pressure_ratio: 2.5,
            gamma: 1.66,
            generator_efficiency: 0.98,
            expansion_recovery_factor: 0.90,
        }
    }
}

/// Result of converting reactor heat through the topping cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BraytonOutput {
    /// Electrical work produced [MW]
    pub work_mw: f64,
    /// Residual heat available to the bottoming cycle [MW]
    pub exhaust_heat_mw: f64,
}

/// Closed-cycle gas turbine model. No internal mutable state; purely
/// functional given configuration.
#[derive(Debug, Clone)]
pub struct BraytonCycle {
    cfg: BraytonConfig,
    thermal_efficiency: f64,
}

impl BraytonCycle {
    /// Build a cycle from configuration.
    ///
    /// # Errors
    /// Returns an error if parameters are out of physical bounds.
    pub fn new(cfg: BraytonConfig) -> PlantResult<Self> {
        require_greater_than(cfg.pressure_ratio, 1.0, "pressure ratio must exceed 1")?;
        require_greater_than(cfg.gamma, 1.0, "gamma must exceed 1")?;
        require_fraction(
            cfg.generator_efficiency,
            "generator efficiency must be in (0,1]",
        )?;
        require_fraction(
            cfg.expansion_recovery_factor,
            "expansion recovery factor must be in (0,1]",
        )?;

        // η = 1 − r^(−(γ−1)/γ)
        let exponent = (cfg.gamma - 1.0) / cfg.gamma;
        let thermal_efficiency = 1.0 - cfg.pressure_ratio.powf(-exponent);

        Ok(Self {
            cfg,
            thermal_efficiency,
        })
    }

    /// Ideal thermal efficiency at the configured pressure ratio.
    pub fn thermal_efficiency(&self) -> f64 {
        self.thermal_efficiency
    }

    /// Convert thermal input [MW] into electrical work and exhaust heat.
    ///
    /// Generator dissipation counts as exhaust heat, so the split conserves
    /// energy exactly.
    pub fn convert(&self, power_in_mw: f64) -> BraytonOutput {
        let work_mw = power_in_mw * self.thermal_efficiency * self.cfg.generator_efficiency;
        BraytonOutput {
            work_mw,
            exhaust_heat_mw: power_in_mw - work_mw,
        }
    }

    /// Exhaust temperature [°C] after non-ideal expansion from the turbine
    /// inlet temperature [°C].
    pub fn exhaust_temperature(&self, inlet_temp_c: f64) -> f64 {
        inlet_temp_c * (1.0 - self.thermal_efficiency * self.cfg.expansion_recovery_factor)
    }
}
