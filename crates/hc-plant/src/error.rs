//! Error types for plant component construction.

use hc_core::HcError;
use hc_steam::SteamError;
use thiserror::Error;

/// Errors that can occur while building plant components.
///
/// Components only fail at construction time (bad configuration, condenser
/// state outside the property envelope). Per-step operations are infallible
/// by design; the Rankine converter degrades through `RankineOutcome`
/// instead of erroring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlantError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Config(#[from] HcError),

    #[error("Steam property error: {0}")]
    Property(#[from] SteamError),
}

pub type PlantResult<T> = Result<T, PlantError>;
