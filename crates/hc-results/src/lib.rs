//! hc-results: run persistence for heliocycle.
//!
//! A completed run is stored as a directory named by a content hash of the
//! configuration: `manifest.json` with the headline numbers and
//! `trace.csv` with the per-second records for downstream reporting.

pub mod csv;
pub mod hash;
pub mod store;
pub mod types;

pub use csv::{write_trace, write_trace_file};
pub use hash::compute_run_id;
pub use store::RunStore;
pub use types::RunManifest;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },
}
