//! Steam property provider trait and validation helpers.

use crate::error::{SteamError, SteamResult};
use crate::state::{StateInput, SteamProperties};
use hc_core::units::{Pressure, Temperature};

/// Property oracle for water/steam.
///
/// Implementations resolve specific enthalpy and entropy for the three query
/// modes in [`StateInput`]. All inputs and outputs are SI (Pa, K, J/kg,
/// J/(kg·K)); unit handling is the backend's concern.
///
/// Implementations must be pure: same input, same output, no hidden state.
pub trait SteamPropertyProvider {
    /// Resolve enthalpy and entropy at the given state.
    fn properties(&self, input: StateInput) -> SteamResult<SteamProperties>;

    /// Saturation pressure at the given temperature (Region 4 boundary).
    fn saturation_pressure(&self, t: Temperature) -> SteamResult<Pressure>;
}

/// Input validation shared by backends.
pub(crate) fn validate(input: &StateInput) -> SteamResult<()> {
    match input {
        StateInput::PT { p, t } => {
            check_pressure(*p)?;
            if !t.value.is_finite() || t.value <= 0.0 {
                return Err(SteamError::NonPhysical {
                    what: "temperature must be positive and finite",
                });
            }
        }
        StateInput::PX { p, x } => {
            check_pressure(*p)?;
            if !x.is_finite() || !(0.0..=1.0).contains(x) {
                return Err(SteamError::NonPhysical {
                    what: "quality must be in [0, 1]",
                });
            }
        }
        StateInput::PS { p, s } => {
            check_pressure(*p)?;
            if !s.is_finite() {
                return Err(SteamError::NonPhysical {
                    what: "entropy must be finite",
                });
            }
        }
    }
    Ok(())
}

fn check_pressure(p: Pressure) -> SteamResult<()> {
    if !p.value.is_finite() || p.value <= 0.0 {
        return Err(SteamError::NonPhysical {
            what: "pressure must be positive and finite",
        });
    }
    Ok(())
}
