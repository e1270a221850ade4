//! hc-steam: water/steam property calculations for heliocycle.
//!
//! Provides:
//! - Thermodynamic state query descriptors (P,T / P,x / P,s)
//! - SteamPropertyProvider trait for enthalpy/entropy lookups
//! - IAPWS-IF97 backend via the `seuif97` crate
//!
//! # Architecture
//!
//! This crate defines a stable API (`SteamPropertyProvider` trait) that isolates
//! the rest of heliocycle from backend dependencies. Currently, IAPWS-IF97 (via
//! `seuif97`) is the only backend, but the architecture allows for future
//! additions such as lookup-table surrogates for faster sweeps.
//!
//! # Example
//!
//! ```no_run
//! use hc_steam::{If97Model, StateInput, SteamPropertyProvider};
//! use hc_core::units::{celsius, mpa};
//!
//! let model = If97Model::new();
//! let input = StateInput::PT {
//!     p: mpa(10.0),
//!     t: celsius(500.0),
//! };
//!
//! let props = model.properties(input).unwrap();
//! println!("h = {} J/kg, s = {} J/(kg·K)", props.h, props.s);
//! ```

pub mod error;
pub mod if97;
pub mod provider;
pub mod state;

// Re-exports for ergonomics
pub use error::{SteamError, SteamResult};
pub use if97::If97Model;
pub use provider::SteamPropertyProvider;
pub use state::{SpecEnthalpy, SpecEntropy, StateInput, SteamProperties};
