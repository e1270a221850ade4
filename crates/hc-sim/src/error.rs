//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up a simulation.
///
/// Once `run` starts stepping, no fatal path exists: every in-loop hazard
/// (cold exhaust, property-lookup failure, zero reactor power) is handled
/// by guarded degradation inside the components.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Component error: {0}")]
    Component(#[from] hc_plant::PlantError),
}

pub type SimResult<T> = Result<T, SimError>;
