//! Plant simulation runner.

use crate::config::PlantConfig;
use crate::error::{SimError, SimResult};
use crate::record::{PlantStepRecord, RunTrace};
use hc_plant::{
    BraytonCycle, FallbackReason, HeatRejection, RankineCycle, RankineOutcome, ReactorCore,
};
use hc_steam::SteamPropertyProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Options for simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimOptions {
    /// Simulated observation window [s]
    pub duration_s: f64,
    /// Fixed time step [s]
    pub dt_s: f64,
    /// Seed for the reactor noise source
    pub seed: u64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            duration_s: 86_400.0,
            dt_s: 1.0,
            seed: 0,
        }
    }
}

/// Orchestrates one simulation run.
///
/// Wires the subsystem chain in causal order each step and owns all
/// cross-step state (the reactor transients and the energy accumulator).
/// The loop always runs the full configured window; it models a fixed
/// observation period, not a convergence-driven process.
pub struct PlantSimulation<P: SteamPropertyProvider> {
    provider: P,
    reactor: ReactorCore,
    brayton: BraytonCycle,
    rankine: RankineCycle,
    rejection: HeatRejection,
    opts: SimOptions,
}

impl<P: SteamPropertyProvider> PlantSimulation<P> {
    /// Build all subsystems from configuration.
    ///
    /// # Errors
    /// Returns an error if any component rejects its parameters or the
    /// condenser state cannot be resolved.
    pub fn new(cfg: &PlantConfig, provider: P) -> SimResult<Self> {
        let reactor = ReactorCore::new(cfg.reactor.clone(), cfg.simulation.seed)?;
        let brayton = BraytonCycle::new(cfg.brayton.clone())?;
        let rankine = RankineCycle::new(cfg.rankine.clone(), &provider)?;
        let rejection = HeatRejection::new(cfg.heat_rejection.clone())?;

        Ok(Self {
            provider,
            reactor,
            brayton,
            rankine,
            rejection,
            opts: cfg.simulation,
        })
    }

    /// Options this simulation was built with.
    pub fn options(&self) -> SimOptions {
        self.opts
    }

    /// Run the full observation window and return the trace.
    ///
    /// After the up-front option checks there is no fatal path: every
    /// in-loop hazard degrades locally and the loop runs exactly
    /// `floor(duration / dt)` steps.
    pub fn run(&mut self) -> SimResult<RunTrace> {
        if !(self.opts.dt_s > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !(self.opts.duration_s >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "duration must be non-negative",
            });
        }

        let dt = self.opts.dt_s;
        let n_steps = (self.opts.duration_s / dt).floor() as u64;
        info!(steps = n_steps, dt_s = dt, "starting transient simulation");

        let mut records = Vec::with_capacity(n_steps as usize);
        let mut energy_mwh = 0.0_f64;
        let mut cold_exhaust_steps = 0_u64;
        let mut lookup_failure_steps = 0_u64;

        for i in 0..n_steps {
            let time_s = i as f64 * dt;

            // Source: reactor thermal output
            let reactor = self.reactor.advance(time_s);

            // Topping cycle: work extraction and exhaust conditions
            let brayton = self.brayton.convert(reactor.power_mw);
            let exhaust_temp_c = self.brayton.exhaust_temperature(reactor.outlet_temp_c);

            // Bottoming cycle over the property provider
            let rankine =
                self.rankine
                    .convert(&self.provider, brayton.exhaust_heat_mw, exhaust_temp_c);
            match &rankine {
                RankineOutcome::Fallback {
                    reason: FallbackReason::ColdExhaust,
                    ..
                } => {
                    cold_exhaust_steps += 1;
                    debug!(time_s, exhaust_temp_c, "exhaust too cold for steam raising");
                }
                RankineOutcome::Fallback {
                    reason: FallbackReason::PropertyLookup(e),
                    ..
                } => {
                    lookup_failure_steps += 1;
                    warn!(time_s, error = %e, "rankine property lookup failed, passing heat through");
                }
                RankineOutcome::Generated { .. } => {}
            }

            // Sink: parasitic load against gross generation
            let parasitic_load_mw = self.rejection.parasitic_load(rankine.waste_heat_mw());

            let net_power_mw = brayton.work_mw + rankine.power_mw() - parasitic_load_mw;
            energy_mwh += net_power_mw * dt / 3600.0;

            let system_efficiency = if reactor.power_mw > 0.0 {
                net_power_mw / reactor.power_mw
            } else {
                0.0
            };

            records.push(PlantStepRecord {
                time_s,
                reactor_power_mw: reactor.power_mw,
                reactor_temp_c: reactor.outlet_temp_c,
                brayton_power_mw: brayton.work_mw,
                rankine_power_mw: rankine.power_mw(),
                parasitic_load_mw,
                net_power_mw,
                system_efficiency,
            });
        }

        info!(
            energy_mwh,
            cold_exhaust_steps, lookup_failure_steps, "simulation complete"
        );

        Ok(RunTrace {
            records,
            energy_mwh,
            cold_exhaust_steps,
            lookup_failure_steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_steam::If97Model;

    fn short_config(duration_s: f64) -> PlantConfig {
        PlantConfig {
            simulation: SimOptions {
                duration_s,
                dt_s: 1.0,
                seed: 0,
            },
            ..PlantConfig::default()
        }
    }

    #[test]
    fn rejects_nonpositive_dt() {
        let mut cfg = short_config(10.0);
        cfg.simulation.dt_s = 0.0;
        let mut sim = PlantSimulation::new(&cfg, If97Model::new()).unwrap();
        assert!(sim.run().is_err());
    }

    #[test]
    fn zero_duration_yields_empty_trace() {
        let cfg = short_config(0.0);
        let mut sim = PlantSimulation::new(&cfg, If97Model::new()).unwrap();
        let trace = sim.run().unwrap();
        assert!(trace.records.is_empty());
        assert_eq!(trace.energy_mwh, 0.0);
    }

    #[test]
    fn startup_steps_report_zero_efficiency() {
        // Entirely within the startup delay: reactor power is zero, so the
        // efficiency guard must hold at every step
        let cfg = short_config(300.0);
        let mut sim = PlantSimulation::new(&cfg, If97Model::new()).unwrap();
        let trace = sim.run().unwrap();
        assert_eq!(trace.records.len(), 300);
        for r in &trace.records {
            assert_eq!(r.reactor_power_mw, 0.0);
            assert_eq!(r.system_efficiency, 0.0);
        }
    }

    #[test]
    fn time_axis_is_strictly_increasing() {
        let cfg = short_config(50.0);
        let mut sim = PlantSimulation::new(&cfg, If97Model::new()).unwrap();
        let trace = sim.run().unwrap();
        for pair in trace.records.windows(2) {
            assert!(pair[1].time_s > pair[0].time_s);
            assert!((pair[1].time_s - pair[0].time_s - 1.0).abs() < 1e-12);
        }
    }
}
