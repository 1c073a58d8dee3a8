//! Command-line overrides for `config.ron`.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Flags that override settings loaded from `config.ron`.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    /// Starting latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Starting longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Starting altitude above the surface.
    #[arg(long)]
    pub altitude: Option<f64>,

    /// Initial cruise speed.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Start in the cockpit camera.
    #[arg(long)]
    pub cockpit: bool,

    /// Start with the Sun/Earth/Moon revolution paused.
    #[arg(long)]
    pub paused: bool,

    /// Simulated frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(lat) = args.lat {
            self.flight.start_latitude = lat;
        }
        if let Some(lon) = args.lon {
            self.flight.start_longitude = lon;
        }
        if let Some(alt) = args.altitude {
            self.flight.start_altitude = alt;
        }
        if let Some(speed) = args.speed {
            self.flight.initial_speed = speed;
        }
        if args.cockpit {
            self.camera.start_in_cockpit = true;
        }
        if args.paused {
            self.celestial.start_paused = true;
        }
        if let Some(fps) = args.fps {
            self.sim.frame_rate = fps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
