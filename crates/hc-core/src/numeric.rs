//! Numeric ground rules shared by the plant crates.
//!
//! Two concerns live here: range checks applied to configuration values at
//! component construction, and the tolerance band used when checking that a
//! conversion stage splits its input energy without creating or losing any.

use crate::error::{HcError, HcResult};

/// Absolute-or-relative comparison tolerance.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// Band for per-stage energy-balance checks [MW]. The absolute part
    /// keeps the check meaningful when the input power is near zero.
    pub fn energy_balance() -> Self {
        Self {
            abs: 1e-5,
            rel: 1e-5,
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Compare two values under `tol`, passing on either the absolute or the
/// relative criterion.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// True when `parts_sum` accounts for all of `total` [MW] within the
/// energy-balance band.
pub fn energy_balanced(total: f64, parts_sum: f64) -> bool {
    nearly_equal(total, parts_sum, Tolerances::energy_balance())
}

/// Require a finite value.
pub fn require_finite(v: f64, what: &'static str) -> HcResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HcError::NonFinite { what, value: v })
    }
}

/// Require a finite value strictly greater than `min`.
pub fn require_greater_than(v: f64, min: f64, what: &'static str) -> HcResult<f64> {
    if require_finite(v, what)? > min {
        Ok(v)
    } else {
        Err(HcError::InvalidArg { what })
    }
}

/// Require a finite, strictly positive value.
pub fn require_positive(v: f64, what: &'static str) -> HcResult<f64> {
    require_greater_than(v, 0.0, what)
}

/// Require a finite, non-negative value.
pub fn require_non_negative(v: f64, what: &'static str) -> HcResult<f64> {
    if require_finite(v, what)? >= 0.0 {
        Ok(v)
    } else {
        Err(HcError::InvalidArg { what })
    }
}

/// Require an efficiency-like value in (0, 1].
pub fn require_fraction(v: f64, what: &'static str) -> HcResult<f64> {
    if require_finite(v, what)? > 0.0 && v <= 1.0 {
        Ok(v)
    } else {
        Err(HcError::InvalidArg { what })
    }
}

/// Require a share in [0, 1].
pub fn require_unit_interval(v: f64, what: &'static str) -> HcResult<f64> {
    if (0.0..=1.0).contains(&require_finite(v, what)?) {
        Ok(v)
    } else {
        Err(HcError::InvalidArg { what })
    }
}
