//! CSV export of simulation traces.

use hc_sim::PlantStepRecord;
use std::io::{self, Write};
use std::path::Path;

/// Write trace data to CSV format.
///
/// Columns: Time, Reactor_Power_MW, Reactor_Temp_C, Brayton_Power_MW,
///          Rankine_Power_MW, Parasitic_Load_MW, Net_Power_MW,
///          System_Efficiency
pub fn write_trace<W: Write>(writer: &mut W, records: &[PlantStepRecord]) -> io::Result<()> {
    writeln!(
        writer,
        "Time,Reactor_Power_MW,Reactor_Temp_C,Brayton_Power_MW,\
         Rankine_Power_MW,Parasitic_Load_MW,Net_Power_MW,System_Efficiency"
    )?;

    for r in records {
        writeln!(
            writer,
            "{:.1},{:.4},{:.2},{:.4},{:.4},{:.4},{:.4},{:.6}",
            r.time_s,
            r.reactor_power_mw,
            r.reactor_temp_c,
            r.brayton_power_mw,
            r.rankine_power_mw,
            r.parasitic_load_mw,
            r.net_power_mw,
            r.system_efficiency,
        )?;
    }

    Ok(())
}

/// Write a trace to a CSV file at the given path.
pub fn write_trace_file(path: &Path, records: &[PlantStepRecord]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trace(&mut file, records)
}
