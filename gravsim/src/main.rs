use gravsim::{Dimension, Preset, Reporter, Scenario, ScenarioConfig, Snapshot};
use gravsim::run_batch;
use gravsim::{bench_gravity, bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use std::io;
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Bench {
    Gravity,
    Step,
    Curve,
}

#[derive(Parser, Debug)]
#[command(version, about = "Gravitational N-body integrator")]
struct Args {
    /// Scenario YAML; looked up in the crate's `scenarios/` directory if not found as given
    #[arg(short, long)]
    file_name: Option<String>,

    /// Built-in scenario, used when no file is given (default: cluster)
    #[arg(long, value_enum, conflicts_with = "file_name")]
    preset: Option<Preset>,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<usize>,

    /// Override the scenario's report interval
    #[arg(long)]
    report_every: Option<usize>,

    /// Run a timing harness instead of a scenario
    #[arg(long, value_enum)]
    bench: Option<Bench>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let Some(file_name) = &args.file_name else {
        return Ok(args.preset.unwrap_or(Preset::Cluster).config());
    };

    let mut config_path = PathBuf::from(file_name);
    if !config_path.exists() {
        config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    }
    ScenarioConfig::from_yaml_file(&config_path)
}

fn run_scenario<const D: usize>(cfg: ScenarioConfig, args: &Args) -> Result<()> {
    let steps = args.steps.unwrap_or(cfg.parameters.steps);
    let every = args.report_every.unwrap_or(cfg.parameters.report_every);
    let reporter = Reporter::new(every, 4)?;

    let mut scenario = Scenario::<D>::build_scenario(cfg).context("invalid scenario")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_batch(&mut scenario, steps, &reporter, &mut out)?;

    let snap = Snapshot::capture(scenario.steps_taken(), scenario.system(), scenario.forces());
    info!("finished '{}' after {} steps, t = {}, energy = {:e}", scenario.name, snap.step, snap.t, snap.energy);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(bench) = args.bench {
        match bench {
            Bench::Gravity => bench_gravity(),
            Bench::Step => bench_step(),
            Bench::Curve => bench_step_curve(),
        }
        return Ok(());
    }

    let cfg = load_scenario(&args)?;
    match cfg.engine.dimension {
        Dimension::Two => run_scenario::<2>(cfg, &args),
        Dimension::Three => run_scenario::<3>(cfg, &args),
    }
}
