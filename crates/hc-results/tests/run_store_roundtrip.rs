use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use hc_results::{RunManifest, RunStore, compute_run_id, write_trace};
use hc_sim::{PlantConfig, PlantStepRecord, RunTrace};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn sample_trace() -> RunTrace {
    RunTrace {
        records: vec![
            PlantStepRecord {
                time_s: 0.0,
                reactor_power_mw: 0.0,
                reactor_temp_c: 395.0,
                brayton_power_mw: 0.0,
                rankine_power_mw: 0.0,
                parasitic_load_mw: 0.0,
                net_power_mw: 0.0,
                system_efficiency: 0.0,
            },
            PlantStepRecord {
                time_s: 1.0,
                reactor_power_mw: 0.1,
                reactor_temp_c: 396.2,
                brayton_power_mw: 0.03,
                rankine_power_mw: 0.01,
                parasitic_load_mw: 0.001,
                net_power_mw: 0.039,
                system_efficiency: 0.39,
            },
        ],
        energy_mwh: 0.039 / 3600.0,
        cold_exhaust_steps: 0,
        lookup_failure_steps: 0,
    }
}

#[test]
fn save_list_load_roundtrip() {
    let root = unique_temp_dir("hc_results_store");
    let store = RunStore::new(root).expect("failed to create run store");

    let cfg = PlantConfig::default();
    let trace = sample_trace();
    let manifest = RunManifest {
        run_id: compute_run_id(&cfg, "0.1.0"),
        timestamp: "2026-08-25T00:00:00Z".to_string(),
        engine_version: "0.1.0".to_string(),
        summary: trace.summary(1.0),
    };

    let run_dir = store
        .save_run(&manifest, &trace)
        .expect("failed to save run");
    assert!(run_dir.join("manifest.json").exists());
    assert!(run_dir.join("trace.csv").exists());
    assert!(store.has_run(&manifest.run_id));

    let loaded = store
        .load_manifest(&manifest.run_id)
        .expect("failed to load manifest");
    assert_eq!(loaded, manifest);

    let runs = store.list_runs().expect("failed to list runs");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].run_id, manifest.run_id);

    // The stored CSV matches a fresh in-memory export
    let stored = std::fs::read_to_string(store.trace_path(&manifest.run_id)).unwrap();
    let mut expected = Vec::new();
    write_trace(&mut expected, &trace.records).unwrap();
    assert_eq!(stored, String::from_utf8(expected).unwrap());
}

#[test]
fn missing_run_is_reported() {
    let root = unique_temp_dir("hc_results_missing");
    let store = RunStore::new(root).unwrap();
    assert!(!store.has_run("deadbeef"));
    assert!(store.load_manifest("deadbeef").is_err());
}
