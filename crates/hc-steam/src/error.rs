//! Steam property errors.

use thiserror::Error;

/// Result type for steam property operations.
pub type SteamResult<T> = Result<T, SteamError>;

/// Errors that can occur during steam property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteamError {
    /// Non-physical values (negative pressure, quality outside [0,1], etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// State outside the IF97 validity envelope (backend returned NaN).
    #[error("State out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
