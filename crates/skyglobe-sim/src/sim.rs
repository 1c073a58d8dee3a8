use bevy_ecs::prelude::*;
use glam::DVec3;
use skyglobe_camera::{CameraPose, CameraRig, CockpitAnchor, OrbitControls};
use skyglobe_celestial::{CelestialClock, CelestialParams};
use skyglobe_config::{Config, ConfigError};
use skyglobe_input::InputFrame;
use skyglobe_nav::{CameraMode, FlightModel, Navigator, SpawnPoint, Telemetry};
use tracing::{info, warn};

use crate::resources::{
    CameraRigRes, CelestialRes, CraftWorldPose, FrameInput, FrameTime, NavigatorRes, ReadoutRes,
};
use crate::schedule::build_schedule;

/// Longest frame delta fed to a tick, in seconds.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Everything needed to build a [`FlightSim`].
#[derive(Clone, Debug)]
pub struct SimSettings {
    /// Speed band and turn/throttle rates.
    pub model: FlightModel,
    /// Where and how fast the craft starts.
    pub spawn: SpawnPoint,
    pub celestial: CelestialParams,
    /// Start with the Sun/Earth/Moon revolution frozen.
    pub start_paused: bool,
    pub start_mode: CameraMode,
    /// Fraction of the gap the orbit target closes each tick.
    pub follow_lerp: f64,
    pub controls: OrbitControls,
    pub cockpit: CockpitAnchor,
    /// Camera distance at which the ground marker is fully faded.
    pub marker_fade_distance: f64,
    /// Longest frame delta fed to a tick, in seconds.
    pub max_frame_time: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self::build(&Config::default())
    }
}

impl SimSettings {
    /// Validate `config` and map it onto the tick.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for settings the flight model or the
    /// clock cannot run with, such as `min_speed > max_speed` or a NaN rate.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &Config) -> Self {
        let f = &config.flight;
        let model = FlightModel {
            planet_radius: f.planet_radius,
            min_speed: f.min_speed,
            max_speed: f.max_speed,
            acceleration: f.acceleration,
            speed_blend: f.speed_blend,
            turn_rate: f.turn_rate,
            backward_factor: f.backward_factor,
        };
        let spawn = SpawnPoint {
            latitude: f.start_latitude,
            longitude: f.start_longitude,
            altitude: f.start_altitude,
            speed: f.initial_speed,
        };

        let c = &config.celestial;
        let celestial = CelestialParams {
            sun_radius: c.sun_radius,
            earth_orbit_radius: c.earth_orbit_radius,
            earth_radius: f.planet_radius,
            moon_radius: c.moon_radius,
            moon_orbit_radius: c.moon_orbit_radius,
            earth_year_speed: c.earth_year_speed,
            earth_day_speed: c.earth_day_speed,
            moon_orbit_speed: c.moon_orbit_speed,
        };

        let cam = &config.camera;
        let controls = OrbitControls {
            distance: cam.initial_distance.clamp(cam.min_distance, cam.max_distance),
            min_distance: cam.min_distance,
            max_distance: cam.max_distance,
            ..OrbitControls::default()
        };
        let (x, y, z) = cam.cockpit_offset;

        Self {
            model,
            spawn,
            celestial,
            start_paused: c.start_paused,
            start_mode: if cam.start_in_cockpit {
                CameraMode::Cockpit
            } else {
                CameraMode::Orbit
            },
            follow_lerp: cam.follow_lerp,
            controls,
            cockpit: CockpitAnchor::new(DVec3::new(x, y, z)),
            marker_fade_distance: cam.marker_fade_distance,
            max_frame_time: config.sim.max_frame_time,
        }
    }
}

/// The flight core: one navigator, one celestial clock, one camera rig.
pub struct FlightSim {
    world: World,
    schedule: Schedule,
    max_frame_time: f64,
}

impl FlightSim {
    /// Spawn the craft and set up the world. `settings` are trusted as given;
    /// go through [`from_config`](Self::from_config) for user input.
    pub fn new(settings: SimSettings) -> Self {
        let navigator = Navigator::spawn(settings.model, &settings.spawn)
            .with_camera_mode(settings.start_mode)
            .with_orbit_paused(settings.start_paused);

        let mut clock = CelestialClock::new(settings.celestial);
        clock.set_paused(settings.start_paused);

        let mut rig = CameraRig::new(clock.earth_position());
        rig.orbit.follow_lerp = settings.follow_lerp;
        rig.controls = settings.controls;
        rig.controls.enabled = settings.start_mode == CameraMode::Orbit;
        rig.cockpit = settings.cockpit;
        rig.marker.fade_distance = settings.marker_fade_distance;

        let mut world = World::new();
        world.insert_resource(FrameTime::default());
        world.insert_resource(FrameInput::default());
        world.insert_resource(ReadoutRes {
            telemetry: *navigator.telemetry(),
            orbit_paused: navigator.orbit_paused(),
            camera_mode: navigator.camera_mode(),
            text: String::new(),
        });
        world.insert_resource(NavigatorRes(navigator));
        world.insert_resource(CelestialRes(clock));
        world.insert_resource(CameraRigRes(rig));
        world.insert_resource(CraftWorldPose::default());

        info!(
            lat = settings.spawn.latitude,
            lon = settings.spawn.longitude,
            alt = settings.spawn.altitude,
            mode = %settings.start_mode,
            paused = settings.start_paused,
            "flight sim ready"
        );

        Self {
            world,
            schedule: build_schedule(),
            max_frame_time: settings.max_frame_time,
        }
    }

    /// Build from a user config, rejecting unusable settings.
    ///
    /// # Errors
    /// See [`SimSettings::from_config`].
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        SimSettings::from_config(config).map(Self::new)
    }

    /// Run exactly one tick with `frame_dt` seconds of elapsed time.
    ///
    /// Deltas above the configured maximum are clamped; negative or NaN
    /// deltas count as zero.
    pub fn step(&mut self, frame_dt: f64, input: InputFrame) -> Telemetry {
        let delta = self.clamp_frame_time(frame_dt);
        {
            let mut time = self.world.resource_mut::<FrameTime>();
            time.delta = delta;
            time.frame += 1;
            time.elapsed += delta;
        }
        self.world.resource_mut::<FrameInput>().0 = input;
        self.schedule.run(&mut self.world);
        self.world.resource::<ReadoutRes>().telemetry
    }

    fn clamp_frame_time(&self, frame_dt: f64) -> f64 {
        if frame_dt.is_nan() || frame_dt < 0.0 {
            warn!(frame_dt, "invalid frame time, using 0");
            return 0.0;
        }
        if frame_dt == 0.0 {
            return 0.0;
        }
        if frame_dt > self.max_frame_time {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_dt * 1000.0,
                self.max_frame_time * 1000.0
            );
            return self.max_frame_time;
        }
        frame_dt
    }

    /// The craft, camera mode and orbit flag as of the last tick.
    pub fn navigator(&self) -> &Navigator {
        &self.world.resource::<NavigatorRes>().0
    }

    pub fn clock(&self) -> &CelestialClock {
        &self.world.resource::<CelestialRes>().0
    }

    pub fn rig(&self) -> &CameraRig {
        &self.world.resource::<CameraRigRes>().0
    }

    /// Pointer drag in pixels. Ignored while the cockpit camera is active.
    pub fn drag_camera(&mut self, dx: f64, dy: f64) {
        self.world.resource_mut::<CameraRigRes>().0.controls.drag(dx, dy);
    }

    /// Positive steps zoom in. Ignored while the cockpit camera is active.
    pub fn zoom_camera(&mut self, steps: f64) {
        self.world.resource_mut::<CameraRigRes>().0.controls.zoom(steps);
    }

    /// World-space pose of the active camera.
    pub fn camera_pose(&self) -> CameraPose {
        *self.rig().pose()
    }

    pub fn craft_world_pose(&self) -> CraftWorldPose {
        *self.world.resource::<CraftWorldPose>()
    }

    pub fn readout(&self) -> &ReadoutRes {
        self.world.resource::<ReadoutRes>()
    }

    pub fn frame_time(&self) -> &FrameTime {
        self.world.resource::<FrameTime>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_follow_config() {
        let mut config = Config::default();
        config.flight.planet_radius = 50.0;
        config.flight.start_latitude = 10.0;
        config.camera.start_in_cockpit = true;
        config.camera.cockpit_offset = (0.0, 1.0, 2.0);
        config.celestial.start_paused = true;
        let settings = SimSettings::from_config(&config).unwrap();
        assert_eq!(settings.model.planet_radius, 50.0);
        assert_eq!(settings.celestial.earth_radius, 50.0);
        assert_eq!(settings.spawn.latitude, 10.0);
        assert_eq!(settings.start_mode, CameraMode::Cockpit);
        assert_eq!(settings.cockpit.offset, DVec3::new(0.0, 1.0, 2.0));
        assert!(settings.start_paused);
    }

    #[test]
    fn test_from_config_rejects_swapped_speed_band() {
        let mut config = Config::default();
        config.flight.min_speed = 60.0;
        let err = FlightSim::from_config(&config).err().unwrap();
        assert!(matches!(err, ConfigError::Invalid { field: "flight.min_speed", .. }));
    }

    #[test]
    fn test_from_config_rejects_nan_rates() {
        let mut config = Config::default();
        config.flight.turn_rate = f64::NAN;
        assert!(FlightSim::from_config(&config).is_err());

        let mut config = Config::default();
        config.celestial.moon_orbit_speed = f64::NAN;
        assert!(SimSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_default_flies() {
        let mut sim = FlightSim::from_config(&Config::default()).unwrap();
        let telemetry = sim.step(1.0 / 60.0, InputFrame::IDLE);
        assert!(telemetry.latitude_deg.is_finite());
    }

    #[test]
    fn test_step_clamps_long_frames() {
        let mut sim = FlightSim::new(SimSettings::default());
        sim.step(3.0, InputFrame::IDLE);
        assert_eq!(sim.frame_time().delta, MAX_FRAME_TIME);
        assert_eq!(sim.frame_time().frame, 1);
    }

    #[test]
    fn test_step_zeroes_invalid_frames() {
        let mut sim = FlightSim::new(SimSettings::default());
        for dt in [-0.5, f64::NAN, 0.0, -0.0] {
            sim.step(dt, InputFrame::IDLE);
            assert_eq!(sim.frame_time().delta, 0.0);
        }
        assert_eq!(sim.frame_time().frame, 4);
        assert_eq!(sim.frame_time().elapsed, 0.0);
        assert!(sim.navigator().craft().position.is_finite());
    }

    #[test]
    fn test_start_state_from_settings() {
        let settings = SimSettings {
            start_mode: CameraMode::Cockpit,
            start_paused: true,
            ..SimSettings::default()
        };
        let mut sim = FlightSim::new(settings);
        assert!(sim.clock().is_paused());
        sim.step(1.0 / 60.0, InputFrame::IDLE);
        assert_eq!(sim.readout().camera_mode, CameraMode::Cockpit);
        assert_eq!(sim.clock().earth_orbit, 0.0);
    }
}
