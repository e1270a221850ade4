//! Result data types.

use hc_sim::RunSummary;
use serde::{Deserialize, Serialize};

/// Metadata written next to every stored trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    /// Content hash of the configuration and engine version.
    pub run_id: String,
    /// UTC completion timestamp, RFC 3339.
    pub timestamp: String,
    /// Version of the simulation engine that produced the run.
    pub engine_version: String,
    /// Headline numbers of the run.
    pub summary: RunSummary,
}
