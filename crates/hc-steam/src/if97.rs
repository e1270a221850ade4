//! IAPWS-IF97 backend delegating to the `seuif97` crate.
//!
//! `seuif97` works in engineering units (MPa, °C, kJ/kg, kJ/(kg·K)) and
//! signals an out-of-range or non-converged query by returning NaN. This
//! module converts to/from the SI quantities used by the rest of heliocycle
//! and maps NaN results to [`SteamError::OutOfRange`].
//!
//! Saturation pressure uses the IF97 Region 4 auxiliary equation directly;
//! it is short, closed-form, and keeps the temperature-input path
//! independent of the backend's solver.

use crate::error::{SteamError, SteamResult};
use crate::provider::{SteamPropertyProvider, validate};
use crate::state::{StateInput, SteamProperties};
use hc_core::units::{Pressure, Temperature, mpa};
use seuif97::{OH, OS, ps, pt, px};

// Region 4 (saturation) constants
const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const T_TRIPLE_K: f64 = 273.16;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

/// IAPWS-IF97 steam property model.
///
/// Stateless and cheap to construct; safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct If97Model;

impl If97Model {
    /// Create a new IF97 model.
    pub fn new() -> Self {
        Self
    }

    fn pack(h_kj: f64, s_kj: f64, what: &'static str) -> SteamResult<SteamProperties> {
        if h_kj.is_nan() || s_kj.is_nan() {
            return Err(SteamError::OutOfRange { what });
        }
        Ok(SteamProperties {
            h: h_kj * 1000.0,
            s: s_kj * 1000.0,
        })
    }
}

impl SteamPropertyProvider for If97Model {
    fn properties(&self, input: StateInput) -> SteamResult<SteamProperties> {
        validate(&input)?;
        match input {
            StateInput::PT { p, t } => {
                let p_mpa = p.value / 1.0e6;
                let t_c = t.value - 273.15;
                Self::pack(pt(p_mpa, t_c, OH), pt(p_mpa, t_c, OS), "P,T query")
            }
            StateInput::PX { p, x } => {
                let p_mpa = p.value / 1.0e6;
                Self::pack(px(p_mpa, x, OH), px(p_mpa, x, OS), "P,x query")
            }
            StateInput::PS { p, s } => {
                let p_mpa = p.value / 1.0e6;
                let s_kj = s / 1000.0;
                Self::pack(ps(p_mpa, s_kj, OH), ps(p_mpa, s_kj, OS), "P,s query")
            }
        }
    }

    /// Saturation pressure from the Region 4 auxiliary equation.
    ///
    /// Valid from the triple point up to the critical temperature.
    fn saturation_pressure(&self, t: Temperature) -> SteamResult<Pressure> {
        let t_k = t.value;
        if !t_k.is_finite() || t_k < T_TRIPLE_K || t_k > T4_STAR_K {
            return Err(SteamError::OutOfRange {
                what: "saturation temperature outside Region 4",
            });
        }
        let theta = 1.0 - t_k / T4_STAR_K;
        let exp_term = (T4_STAR_K / t_k)
            * (R4_N[0] * theta
                + R4_N[1] * theta.powf(1.5)
                + R4_N[2] * theta.powi(3)
                + R4_N[3] * theta.powf(3.5)
                + R4_N[4] * theta.powi(4)
                + R4_N[5] * theta.powf(7.5));
        Ok(mpa(P4_STAR_MPA * exp_term.exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::units::{celsius, mpa};

    #[test]
    fn out_of_range_maps_to_error() {
        let model = If97Model::new();
        // Far above the IF97 pressure envelope (100 GPa)
        let result = model.properties(StateInput::PT {
            p: mpa(1.0e5),
            t: celsius(500.0),
        });
        assert!(result.is_err());
    }

    #[test]
    fn saturation_pressure_known_points() {
        let model = If97Model::new();

        // 100°C: atmospheric boiling
        let p100 = model.saturation_pressure(celsius(100.0)).unwrap();
        assert!((p100.value - 101.3e3).abs() < 1.0e3, "P = {} Pa", p100.value);

        // 300°C: ≈ 8.588 MPa
        let p300 = model.saturation_pressure(celsius(300.0)).unwrap();
        assert!(
            (p300.value - 8.588e6).abs() < 0.05e6,
            "P = {} Pa",
            p300.value
        );
    }

    #[test]
    fn saturation_pressure_outside_region4_fails() {
        let model = If97Model::new();
        assert!(model.saturation_pressure(celsius(400.0)).is_err());
        assert!(model.saturation_pressure(celsius(-5.0)).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn saturation_pressure_is_monotonic(t_c in 1.0_f64..370.0, dt in 0.1_f64..3.0) {
                let model = If97Model::new();
                let p1 = model.saturation_pressure(celsius(t_c)).unwrap();
                let p2 = model.saturation_pressure(celsius(t_c + dt)).unwrap();
                prop_assert!(p2.value > p1.value);
            }
        }
    }
}
