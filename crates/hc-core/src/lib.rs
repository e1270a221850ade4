//! hc-core: stable foundation for heliocycle.
//!
//! Contains:
//! - units (uom SI types + constructors for the steam-property boundary)
//! - numeric (range gates for configuration values + balance tolerances)
//! - error (the error type the numeric gates raise)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HcError, HcResult};
pub use numeric::*;
pub use units::*;
