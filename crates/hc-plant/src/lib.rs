//! hc-plant: subsystem models for the combined-cycle plant.
//!
//! Provides:
//! - `ReactorCore`: flow-driven HTGR startup/transient model
//! - `BraytonCycle`: closed-cycle gas turbine conversion
//! - `RankineCycle`: steam bottoming cycle over a property provider
//! - `HeatRejection`: parasitic load of the heat-rejection stage
//!
//! Each component carries a validated configuration struct with documented
//! defaults; construction can fail, operation during a run cannot. The
//! Rankine converter reports its degraded modes through [`RankineOutcome`]
//! instead of an error so the simulation loop never stops mid-run.

pub mod brayton;
pub mod error;
pub mod heat_rejection;
pub mod rankine;
pub mod reactor;

// Re-exports for ergonomics
pub use brayton::{BraytonConfig, BraytonCycle, BraytonOutput};
pub use error::{PlantError, PlantResult};
pub use heat_rejection::{HeatRejection, HeatRejectionConfig};
pub use rankine::{FallbackReason, RankineConfig, RankineCycle, RankineOutcome};
pub use reactor::{ReactorConfig, ReactorCore, ReactorState};
