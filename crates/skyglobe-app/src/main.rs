//! Skyglobe: a headless runner for the spherical flight core.
//!
//! Loads `config.ron`, replays a flight plan (or the built-in demo tour)
//! through the same keyboard -> key map -> input frame path a windowed host
//! would use, and logs the flight readout as it goes.
//!
//! Run with: `cargo run -p skyglobe-app -- --plan my_flight.ron`

mod bindings;
mod error;
mod plan;
mod platform;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skyglobe_config::{CliArgs, Config};
use skyglobe_sim::FlightSim;
use tracing::{error, info};

use crate::bindings::load_keymap;
use crate::error::AppError;
use crate::plan::FlightPlan;
use crate::platform::PlatformDirs;
use crate::runner::{RunSettings, fly};

#[derive(Parser, Debug)]
#[command(name = "skyglobe", about = "Fly a craft around a small spinning planet")]
struct AppArgs {
    #[command(flatten)]
    cli: CliArgs,

    /// RON flight plan to replay; bare names are looked up in the plans
    /// directory. Defaults to the demo tour.
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> ExitCode {
    let args = AppArgs::parse();

    let (dirs, config) = match setup(&args) {
        Ok(setup) => setup,
        Err(err) => {
            skyglobe_log::init_logging(None, false, None);
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let log_file =
        skyglobe_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    info!("Skyglobe flight runner");
    info!("Config: {}", Config::path_in(&dirs.config_dir).display());
    if let Some(path) = log_file {
        info!("Log file: {}", path.display());
    }

    match run(&args, &dirs, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve directories and build the effective config.
fn setup(args: &AppArgs) -> Result<(PlatformDirs, Config), AppError> {
    let dirs = match &args.cli.config {
        Some(root) => PlatformDirs::with_root(root),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_all()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(&args.cli);
    config.validate()?;
    Ok((dirs, config))
}

fn run(args: &AppArgs, dirs: &PlatformDirs, config: &Config) -> Result<(), AppError> {
    let plan = match &args.plan {
        Some(name) => {
            let path = dirs.plan_path(name);
            info!("Flight plan: {}", path.display());
            FlightPlan::load(&path)?
        }
        None => {
            info!("No flight plan given, flying the demo tour");
            FlightPlan::demo()
        }
    };

    let keymap = load_keymap(&dirs.config_dir, &config.input.keybindings)?;
    let settings = RunSettings {
        frame_rate: config.sim.frame_rate,
        readout_interval: config.sim.readout_interval,
        frame_limit: args.frames,
    };
    info!(
        "Planet: radius={:.0}, start={:.2},{:.2} alt={:.1} | {} segments, {} frames @ {} fps",
        config.flight.planet_radius,
        config.flight.start_latitude,
        config.flight.start_longitude,
        config.flight.start_altitude,
        plan.segments.len(),
        plan.total_frames(),
        settings.frame_rate,
    );

    let mut sim = FlightSim::from_config(config)?;
    let summary = fly(&mut sim, &plan, &keymap, &settings);

    info!("{}", sim.readout().text);
    info!(
        "Flew {} frames from {} to {} ({:.1} over the surface), camera {}, orbit {}",
        summary.frames,
        summary.start,
        summary.end.geo(),
        summary.surface_distance,
        summary.camera_mode,
        if summary.orbit_paused { "paused" } else { "running" },
    );
    Ok(())
}
