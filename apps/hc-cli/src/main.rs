use clap::{Parser, Subcommand};
use hc_results::{RunManifest, RunStore, compute_run_id};
use hc_sim::{PlantConfig, PlantSimulation};
use hc_steam::If97Model;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "hc-cli")]
#[command(about = "heliocycle - combined-cycle HTGR plant simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a plant simulation
    Run {
        /// Path to the plant YAML config (defaults apply if absent)
        #[arg(long, default_value = "plant.yaml")]
        config: PathBuf,
        /// Override the simulated duration in seconds
        #[arg(long)]
        duration: Option<f64>,
        /// Override the time step in seconds
        #[arg(long)]
        dt: Option<f64>,
        /// Override the reactor noise seed
        #[arg(long)]
        seed: Option<u64>,
        /// Directory to persist the run into (manifest + CSV trace)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a plant config without running it
    Validate {
        /// Path to the plant YAML config
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            duration,
            dt,
            seed,
            output,
        } => cmd_run(&config, duration, dt, seed, output.as_deref()),
        Commands::Validate { config } => cmd_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &Path) -> Result<PlantConfig, String> {
    PlantConfig::load(path).map_err(|e| e.to_string())
}

fn cmd_validate(config_path: &Path) -> Result<(), String> {
    println!("Validating config: {}", config_path.display());
    let cfg = load_config(config_path)?;
    // Constructing the full plant exercises every component's validation
    PlantSimulation::new(&cfg, If97Model::new()).map_err(|e| e.to_string())?;
    println!("✓ Config is valid");
    Ok(())
}

fn cmd_run(
    config_path: &Path,
    duration: Option<f64>,
    dt: Option<f64>,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<(), String> {
    let mut cfg = load_config(config_path)?;
    if let Some(duration) = duration {
        cfg.simulation.duration_s = duration;
    }
    if let Some(dt) = dt {
        cfg.simulation.dt_s = dt;
    }
    if let Some(seed) = seed {
        cfg.simulation.seed = seed;
    }

    let mut sim = PlantSimulation::new(&cfg, If97Model::new()).map_err(|e| e.to_string())?;
    let trace = sim.run().map_err(|e| e.to_string())?;
    let summary = trace.summary(cfg.simulation.dt_s);

    println!("✓ Simulation completed: {} steps", summary.steps);
    println!("  Total energy generated: {:.2} MWh", summary.energy_mwh);
    println!(
        "  Average net power:      {:.2} MW",
        summary.average_net_power_mw
    );
    if summary.lookup_failure_steps > 0 {
        println!(
            "  Property-lookup fallbacks: {} steps",
            summary.lookup_failure_steps
        );
    }

    if let Some(output) = output {
        let store = RunStore::new(output.to_path_buf()).map_err(|e| e.to_string())?;
        let manifest = RunManifest {
            run_id: compute_run_id(&cfg, ENGINE_VERSION),
            timestamp: chrono::Utc::now().to_rfc3339(),
            engine_version: ENGINE_VERSION.to_string(),
            summary,
        };
        let run_dir = store
            .save_run(&manifest, &trace)
            .map_err(|e| e.to_string())?;
        println!("  Results saved to {}", run_dir.display());
    }

    Ok(())
}
