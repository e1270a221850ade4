use thiserror::Error;

pub type HcResult<T> = Result<T, HcError>;

/// Errors raised by the shared numeric checks.
///
/// `Clone + PartialEq` so downstream error enums that wrap this one can
/// stay comparable in tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
