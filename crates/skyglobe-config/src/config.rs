//! Configuration sections with defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub flight: FlightConfig,
    pub camera: CameraConfig,
    pub celestial: CelestialConfig,
    pub input: InputConfig,
    pub sim: SimConfig,
    pub debug: DebugConfig,
}

/// Planet size, spawn point, and flight model tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlightConfig {
    pub planet_radius: f64,
    pub start_latitude: f64,
    pub start_longitude: f64,
    /// Above the surface, in km.
    pub start_altitude: f64,
    pub initial_speed: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Target-speed change per second while a speed key is held.
    pub acceleration: f64,
    /// Rate at which current speed converges on target speed, per second.
    pub speed_blend: f64,
    /// Yaw rate in radians per second.
    pub turn_rate: f64,
    /// Reverse thrust as a fraction of forward thrust.
    pub backward_factor: f64,
}

/// Orbit follow, zoom limits, cockpit eye point, and ground marker fade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Fraction of the gap to the craft the orbit target closes each tick.
    pub follow_lerp: f64,
    /// Pilot eye point in the craft frame (+Z forward, +Y up).
    pub cockpit_offset: (f64, f64, f64),
    pub initial_distance: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    /// Camera distance at which the ground marker is fully faded.
    pub marker_fade_distance: f64,
    pub start_in_cockpit: bool,
}

/// Sizes and per-tick angular speeds of the Sun/Earth/Moon system. The
/// Earth's radius is `flight.planet_radius`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CelestialConfig {
    pub sun_radius: f64,
    pub earth_orbit_radius: f64,
    pub moon_radius: f64,
    pub moon_orbit_radius: f64,
    pub earth_year_speed: f64,
    pub earth_day_speed: f64,
    pub moon_orbit_speed: f64,
    pub start_paused: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybinding overrides (action name -> key name), e.g.
    /// `"toggle_camera": "KeyV"`.
    pub keybindings: HashMap<String, String>,
}

/// Headless driver settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated frames per second.
    pub frame_rate: u32,
    /// Longest frame delta fed to the simulation, in seconds.
    pub max_frame_time: f64,
    /// Log the flight readout every this many frames; 0 disables it.
    pub readout_interval: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a JSON log file next to the config in debug builds.
    pub log_to_file: bool,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            planet_radius: 100.0,
            start_latitude: 48.85,
            start_longitude: 2.35,
            start_altitude: 3.0,
            initial_speed: 15.0,
            min_speed: 5.0,
            max_speed: 50.0,
            acceleration: 15.0,
            speed_blend: 5.0,
            turn_rate: 1.0,
            backward_factor: 0.5,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_lerp: 0.1,
            cockpit_offset: (0.0, 0.25, 1.0),
            initial_distance: 300.0,
            min_distance: 0.1,
            max_distance: 1500.0,
            marker_fade_distance: 300.0,
            start_in_cockpit: false,
        }
    }
}

impl Default for CelestialConfig {
    fn default() -> Self {
        Self {
            sun_radius: 15.0,
            earth_orbit_radius: 150.0,
            moon_radius: 1.0,
            moon_orbit_radius: 10.0,
            earth_year_speed: 0.001,
            earth_day_speed: 0.005,
            moon_orbit_speed: 0.01,
            start_paused: false,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            max_frame_time: 0.25,
            readout_interval: 60,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

impl Config {
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::path_in(config_dir);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = Self::path_in(config_dir);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&Self::path_in(config_dir))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject settings the flight model and clock cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.flight;
        let c = &self.celestial;
        let numbers = [
            ("flight.planet_radius", f.planet_radius),
            ("flight.start_latitude", f.start_latitude),
            ("flight.start_longitude", f.start_longitude),
            ("flight.start_altitude", f.start_altitude),
            ("flight.initial_speed", f.initial_speed),
            ("flight.min_speed", f.min_speed),
            ("flight.max_speed", f.max_speed),
            ("flight.acceleration", f.acceleration),
            ("flight.speed_blend", f.speed_blend),
            ("flight.turn_rate", f.turn_rate),
            ("flight.backward_factor", f.backward_factor),
            ("camera.follow_lerp", self.camera.follow_lerp),
            ("camera.initial_distance", self.camera.initial_distance),
            ("camera.marker_fade_distance", self.camera.marker_fade_distance),
            ("celestial.sun_radius", c.sun_radius),
            ("celestial.earth_orbit_radius", c.earth_orbit_radius),
            ("celestial.moon_radius", c.moon_radius),
            ("celestial.moon_orbit_radius", c.moon_orbit_radius),
            ("celestial.earth_year_speed", c.earth_year_speed),
            ("celestial.earth_day_speed", c.earth_day_speed),
            ("celestial.moon_orbit_speed", c.moon_orbit_speed),
        ];
        if let Some(&(field, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(field, "must be a finite number"));
        }
        let (ox, oy, oz) = self.camera.cockpit_offset;
        if !(ox.is_finite() && oy.is_finite() && oz.is_finite()) {
            return Err(invalid("camera.cockpit_offset", "must be finite"));
        }

        if !(f.planet_radius > 0.0) {
            return Err(invalid("flight.planet_radius", "must be positive"));
        }
        if !(f.min_speed <= f.max_speed) {
            return Err(invalid(
                "flight.min_speed",
                format!("{} exceeds max_speed {}", f.min_speed, f.max_speed),
            ));
        }
        if !(-90.0..=90.0).contains(&f.start_latitude) {
            return Err(invalid("flight.start_latitude", "must be within [-90, 90]"));
        }
        for (field, value) in [
            ("flight.acceleration", f.acceleration),
            ("flight.speed_blend", f.speed_blend),
            ("flight.backward_factor", f.backward_factor),
            ("camera.marker_fade_distance", self.camera.marker_fade_distance),
        ] {
            if value < 0.0 {
                return Err(invalid(field, "must not be negative"));
            }
        }
        let cam = &self.camera;
        if !(0.0..=1.0).contains(&cam.follow_lerp) {
            return Err(invalid("camera.follow_lerp", "must be within [0, 1]"));
        }
        if !(cam.min_distance > 0.0 && cam.min_distance <= cam.max_distance) {
            return Err(invalid(
                "camera.min_distance",
                "must be positive and at most max_distance",
            ));
        }
        if self.sim.frame_rate == 0 {
            return Err(invalid("sim.frame_rate", "must be at least 1"));
        }
        if !(self.sim.max_frame_time > 0.0) {
            return Err(invalid("sim.max_frame_time", "must be positive"));
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
