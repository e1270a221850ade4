//! Simulation trace and summary types.

use serde::{Deserialize, Serialize};

/// One row of the simulation trace; emitted once per step, append-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantStepRecord {
    /// Simulation time [s]
    pub time_s: f64,
    /// Reactor thermal power [MW]
    pub reactor_power_mw: f64,
    /// Reactor outlet temperature [°C]
    pub reactor_temp_c: f64,
    /// Brayton electrical output [MW]
    pub brayton_power_mw: f64,
    /// Rankine electrical output [MW]
    pub rankine_power_mw: f64,
    /// Heat-rejection parasitic load [MW]
    pub parasitic_load_mw: f64,
    /// Net electrical output [MW]
    pub net_power_mw: f64,
    /// Net power over reactor thermal power; 0 while the reactor is off
    pub system_efficiency: f64,
}

/// Full result of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTrace {
    /// Per-step records, time strictly increasing by `dt`.
    pub records: Vec<PlantStepRecord>,
    /// Cumulative net energy [MWh], left-rectangle integration.
    pub energy_mwh: f64,
    /// Steps where the Rankine stage sat out because the gas was too cold.
    pub cold_exhaust_steps: u64,
    /// Steps where a property lookup failed and heat passed through.
    pub lookup_failure_steps: u64,
}

impl RunTrace {
    /// Condense the trace into a reportable summary.
    pub fn summary(&self, dt_s: f64) -> RunSummary {
        let steps = self.records.len();
        let average_net_power_mw = if steps > 0 {
            self.records.iter().map(|r| r.net_power_mw).sum::<f64>() / steps as f64
        } else {
            0.0
        };
        RunSummary {
            steps,
            duration_s: steps as f64 * dt_s,
            dt_s,
            energy_mwh: self.energy_mwh,
            average_net_power_mw,
            cold_exhaust_steps: self.cold_exhaust_steps,
            lookup_failure_steps: self.lookup_failure_steps,
        }
    }
}

/// Headline numbers for a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: usize,
    pub duration_s: f64,
    pub dt_s: f64,
    pub energy_mwh: f64,
    pub average_net_power_mw: f64,
    pub cold_exhaust_steps: u64,
    pub lookup_failure_steps: u64,
}
