//! hc-sim: plant orchestration for heliocycle.
//!
//! Drives the fixed-step time loop over the subsystem chain
//! reactor → Brayton → Rankine → heat rejection, accumulating net energy
//! and emitting one [`PlantStepRecord`] per step.
//!
//! The loop is a pure sequential fold over time: each step depends only on
//! elapsed time and the reactor's own transient state, so a run is
//! single-threaded by design. Independent runs (parameter sweeps) are
//! embarrassingly parallel across whole simulation instances.

pub mod config;
pub mod error;
pub mod record;
pub mod runner;

// Re-exports for ergonomics
pub use config::{ConfigError, PlantConfig};
pub use error::{SimError, SimResult};
pub use record::{PlantStepRecord, RunSummary, RunTrace};
pub use runner::{PlantSimulation, SimOptions};
