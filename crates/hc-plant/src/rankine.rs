//! Steam (Rankine) bottoming cycle.
//!
//! Converts Brayton exhaust heat into electrical work using real-fluid
//! properties from a [`SteamPropertyProvider`]. The converter never fails
//! mid-run: both the cold-exhaust guard and any property-lookup failure
//! degrade to a zero-generation pass-through, reported explicitly through
//! [`RankineOutcome`] so callers can tell the two apart.

use crate::error::PlantResult;
use hc_core::numeric::{require_fraction, require_non_negative, require_positive};
use hc_core::units::{Pressure, celsius, mpa};
use hc_steam::{SpecEnthalpy, StateInput, SteamError, SteamPropertyProvider};
use serde::{Deserialize, Serialize};

/// Material/design ceiling on live steam temperature [°C].
pub const MAX_STEAM_TEMP_C: f64 = 600.0;

/// Minimum gas-to-condenser temperature approach below which no useful
/// steam can be raised [°C].
pub const MIN_APPROACH_C: f64 = 20.0;

/// Rankine cycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankineConfig {
    /// Boiler (live steam) pressure [MPa]
    pub boiler_pressure_mpa: f64,
    /// Pinch-point temperature difference between the gas stream and the
    /// steam it raises [°C]
    pub pinch_point_delta_t_c: f64,
    /// Fixed condenser (bottom cycle) temperature [°C]
    pub condenser_temp_c: f64,
    /// Turbine isentropic efficiency, in (0, 1]
    pub turbine_efficiency: f64,
}

impl Default for RankineConfig {
    fn default() -> Self {
        Self {
            boiler_pressure_mpa: 10.0,
            pinch_point_delta_t_c: 30.0,
            condenser_temp_c: 50.0,
            turbine_efficiency: 0.85,
        }
    }
}

/// Why a conversion produced no power.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// Gas stream too cold to raise steam; expected during startup.
    ColdExhaust,
    /// Property resolution failed; unexpected outside the IF97 envelope.
    PropertyLookup(SteamError),
}

/// Result of a single Rankine conversion.
///
/// In both fallback modes all input heat passes through as waste and the
/// generated work is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub enum RankineOutcome {
    /// Normal generation.
    Generated {
        /// Electrical power produced [MW]
        power_mw: f64,
        /// Heat rejected to the condenser [MW]
        waste_heat_mw: f64,
    },
    /// Degraded pass-through.
    Fallback {
        reason: FallbackReason,
        /// Heat passed through unchanged [MW]
        waste_heat_mw: f64,
    },
}

impl RankineOutcome {
    /// Electrical power of this outcome [MW]; zero for fallbacks.
    pub fn power_mw(&self) -> f64 {
        match self {
            RankineOutcome::Generated { power_mw, .. } => *power_mw,
            RankineOutcome::Fallback { .. } => 0.0,
        }
    }

    /// Waste heat of this outcome [MW].
    pub fn waste_heat_mw(&self) -> f64 {
        match self {
            RankineOutcome::Generated { waste_heat_mw, .. }
            | RankineOutcome::Fallback { waste_heat_mw, .. } => *waste_heat_mw,
        }
    }

    /// True if this outcome is a degraded pass-through.
    pub fn is_fallback(&self) -> bool {
        matches!(self, RankineOutcome::Fallback { .. })
    }
}

/// Steam bottoming cycle model.
///
/// The condenser state (saturation pressure and saturated-liquid enthalpy at
/// the fixed bottom temperature) is resolved once at construction; per-call
/// lookups cover only the boiler and expansion states.
#[derive(Debug, Clone)]
pub struct RankineCycle {
    cfg: RankineConfig,
    p_condenser: Pressure,
    h_liquid: SpecEnthalpy,
}

impl RankineCycle {
    /// Build a cycle, resolving the condenser state through `provider`.
    ///
    /// # Errors
    /// Returns an error for out-of-bounds parameters or if the condenser
    /// state lies outside the provider's envelope.
    pub fn new(cfg: RankineConfig, provider: &dyn SteamPropertyProvider) -> PlantResult<Self> {
        require_positive(cfg.boiler_pressure_mpa, "boiler pressure must be positive")?;
        require_non_negative(
            cfg.pinch_point_delta_t_c,
            "pinch-point delta T must be non-negative",
        )?;
        require_fraction(cfg.turbine_efficiency, "turbine efficiency must be in (0,1]")?;

        let p_condenser = provider.saturation_pressure(celsius(cfg.condenser_temp_c))?;
        let h_liquid = provider
            .properties(StateInput::PX {
                p: p_condenser,
                x: 0.0,
            })?
            .h;

        Ok(Self {
            cfg,
            p_condenser,
            h_liquid,
        })
    }

    /// Condenser saturation pressure resolved at construction.
    pub fn condenser_pressure(&self) -> Pressure {
        self.p_condenser
    }

    /// Convert exhaust heat [MW] at the given gas temperature [°C].
    ///
    /// Never returns an error: guard conditions and lookup failures both
    /// degrade to `RankineOutcome::Fallback`.
    pub fn convert(
        &self,
        provider: &dyn SteamPropertyProvider,
        heat_input_mw: f64,
        gas_exhaust_temp_c: f64,
    ) -> RankineOutcome {
        if gas_exhaust_temp_c < self.cfg.condenser_temp_c + MIN_APPROACH_C {
            return RankineOutcome::Fallback {
                reason: FallbackReason::ColdExhaust,
                waste_heat_mw: heat_input_mw,
            };
        }

        match self.generate(provider, heat_input_mw, gas_exhaust_temp_c) {
            Ok(outcome) => outcome,
            Err(e) => RankineOutcome::Fallback {
                reason: FallbackReason::PropertyLookup(e),
                waste_heat_mw: heat_input_mw,
            },
        }
    }

    fn generate(
        &self,
        provider: &dyn SteamPropertyProvider,
        heat_input_mw: f64,
        gas_exhaust_temp_c: f64,
    ) -> Result<RankineOutcome, SteamError> {
        let p_boiler = mpa(self.cfg.boiler_pressure_mpa);

        // Boiler state: pinch-limited steam temperature, clamped to the
        // material ceiling
        let steam_temp_c =
            (gas_exhaust_temp_c - self.cfg.pinch_point_delta_t_c).min(MAX_STEAM_TEMP_C);
        let boiler = provider.properties(StateInput::PT {
            p: p_boiler,
            t: celsius(steam_temp_c),
        })?;

        // Isentropic expansion down to condenser pressure; the end state is
        // usually wet, which the P,s solve handles directly
        let ideal_exit = provider.properties(StateInput::PS {
            p: self.p_condenser,
            s: boiler.s,
        })?;

        let delta_h_real = (boiler.h - ideal_exit.h) * self.cfg.turbine_efficiency;

        // Boiler heat duty fixes the steam mass flow
        let energy_added_per_kg = boiler.h - self.h_liquid;
        if energy_added_per_kg <= 0.0 {
            return Err(SteamError::NonPhysical {
                what: "boiler enthalpy below condensate enthalpy",
            });
        }
        let mass_flow_kg_s = heat_input_mw * 1.0e6 / energy_added_per_kg;

        let power_mw = mass_flow_kg_s * delta_h_real / 1.0e6;
        let waste_heat_mw = heat_input_mw - power_mw;

        Ok(RankineOutcome::Generated {
            power_mw,
            waste_heat_mw,
        })
    }
}
