//! Thermodynamic state query definitions.

use hc_core::units::{Pressure, Temperature};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Input specification for a steam property query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    /// Pressure and temperature.
    PT { p: Pressure, t: Temperature },
    /// Pressure and quality (steam dryness fraction, 0 = saturated liquid).
    PX { p: Pressure, x: f64 },
    /// Pressure and specific entropy.
    PS { p: Pressure, s: SpecEntropy },
}

/// Resolved specific properties at a queried state.
///
/// This is the minimal property set the cycle models need; everything else
/// (density, internal energy, ...) stays behind the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamProperties {
    /// Specific enthalpy [J/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [J/(kg·K)]
    pub s: SpecEntropy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::units::{celsius, mpa};

    #[test]
    fn state_input_is_comparable() {
        let a = StateInput::PT {
            p: mpa(10.0),
            t: celsius(500.0),
        };
        let b = StateInput::PT {
            p: mpa(10.0),
            t: celsius(500.0),
        };
        assert_eq!(a, b);
    }
}
