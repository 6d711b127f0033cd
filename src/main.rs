use roomsim::simulation::diagnostics::{escaped_bodies, kinetic_energy, momentum};
use roomsim::{bench_step, bench_step_curve};
use roomsim::{InputQueue, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Bouncing bodies in a cubic room")]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is a path that exists
    #[arg(short, long, default_value = "room.yaml")]
    file_name: String,

    /// Ignore the file and use the built-in reference room
    #[arg(long)]
    default_room: bool,

    /// Override the placement seed
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to run headless
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Pace headless ticks at the engine's tick period
    #[arg(long)]
    realtime: bool,

    /// Log a summary every this many ticks
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Open the 3D viewer instead of running headless
    #[arg(long)]
    viewer: bool,

    /// Run the step benchmark and exit
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV curve instead of the summary table
    #[arg(long)]
    curve: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(scenario: &mut Scenario, ticks: u64, realtime: bool, report_every: u64) -> Result<()> {
    let mut inputs = InputQueue::new();
    let period = scenario.engine.tick_period;
    let started = Instant::now();

    info!(ticks, realtime, energy = kinetic_energy(&scenario.system), "headless run started");

    for _ in 0..ticks {
        let t0 = Instant::now();
        let report = scenario.tick(&mut inputs)?;

        if report_every > 0 && report.tick % report_every == 0 {
            let p = momentum(&scenario.system);
            info!(
                tick = report.tick,
                energy = kinetic_energy(&scenario.system),
                momentum = ?[p.x, p.y, p.z],
                contacts = report.pairs.contacts,
                "progress"
            );
        }

        if realtime {
            if let Some(rest) = period.checked_sub(t0.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    let escaped = escaped_bodies(&scenario.system, 1e-9);
    info!(
        ticks = scenario.system.tick,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        escaped = escaped.len(),
        "headless run finished"
    );

    for (i, b) in scenario.snapshot().iter().enumerate() {
        println!(
            "{i:2} {:<11?} x = [{:8.3} {:8.3} {:8.3}]",
            b.shape, b.position.x, b.position.y, b.position.z
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_step_curve();
        } else {
            bench_step();
        }
        return Ok(());
    }

    let mut scenario_cfg = if args.default_room {
        roomsim::default_room_config(42)
    } else {
        load_scenario_from_yaml(&args.file_name)?
    };
    if let Some(seed) = args.seed {
        scenario_cfg.engine.seed = seed;
    }

    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.viewer {
        #[cfg(feature = "viewer")]
        {
            roomsim::run_3d(scenario);
            return Ok(());
        }
        #[cfg(not(feature = "viewer"))]
        anyhow::bail!("built without the `viewer` feature");
    }

    run_headless(&mut scenario, args.ticks, args.realtime, args.report_every)
}
