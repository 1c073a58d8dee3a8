//! Configuration for the skyglobe flight runner.
//!
//! Settings persist to disk as `config.ron`. Every section is
//! `#[serde(default)]`, so older files missing newer fields still load, and
//! command-line flags override whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, CelestialConfig, Config, DebugConfig, FlightConfig,
    InputConfig, SimConfig,
};
pub use error::ConfigError;
