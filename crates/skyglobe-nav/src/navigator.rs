use std::fmt;

use skyglobe_input::InputFrame;
use tracing::debug;

use crate::craft::{CraftState, SpawnPoint};
use crate::model::FlightModel;
use crate::telemetry::Telemetry;

/// Which camera the renderer should drive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Free camera circling a smoothed target on the craft.
    #[default]
    Orbit,
    /// Pilot's eye, rigidly attached to the craft.
    Cockpit,
}

impl CameraMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Orbit => Self::Cockpit,
            Self::Cockpit => Self::Orbit,
        }
    }

    /// Upper-case name shown in the readout.
    pub fn label(self) -> &'static str {
        match self {
            Self::Orbit => "ORBIT",
            Self::Cockpit => "COCKPIT",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owns the craft and the two user-facing mode flags.
///
/// [`update`](Self::update) is the only way the craft moves. Toggle pulses
/// in the [`InputFrame`] flip the camera mode and the orbit-pause flag; the
/// pause flag is only reported here and acted on by the celestial clock.
#[derive(Clone, Debug)]
pub struct Navigator {
    model: FlightModel,
    craft: CraftState,
    camera_mode: CameraMode,
    orbit_paused: bool,
    telemetry: Telemetry,
}

impl Navigator {
    /// Wrap an existing craft. Starts in orbit view with the planets moving.
    pub fn new(model: FlightModel, craft: CraftState) -> Self {
        let telemetry = Telemetry::derive(&craft, model.planet_radius);
        Self {
            model,
            craft,
            camera_mode: CameraMode::default(),
            orbit_paused: false,
            telemetry,
        }
    }

    /// Spawn a craft at `spawn`, facing north.
    pub fn spawn(model: FlightModel, spawn: &SpawnPoint) -> Self {
        let craft = CraftState::spawn(spawn, model.planet_radius);
        debug!(
            lat = spawn.latitude,
            lon = spawn.longitude,
            alt = spawn.altitude,
            "craft spawned"
        );
        Self::new(model, craft)
    }

    /// Start in `mode` instead of orbit view.
    pub fn with_camera_mode(mut self, mode: CameraMode) -> Self {
        self.camera_mode = mode;
        self
    }

    /// Start with the orbit-pause flag set to `paused`.
    pub fn with_orbit_paused(mut self, paused: bool) -> Self {
        self.orbit_paused = paused;
        self
    }

    /// Run one tick and return the fresh telemetry.
    pub fn update(&mut self, input: &InputFrame, dt: f64) -> Telemetry {
        self.craft = self.model.advance(&self.craft, input, dt);

        if input.toggle_camera {
            self.camera_mode = self.camera_mode.toggled();
            debug!(mode = %self.camera_mode, "camera mode toggled");
        }
        if input.toggle_orbit {
            self.orbit_paused = !self.orbit_paused;
            debug!(paused = self.orbit_paused, "orbit pause toggled");
        }

        self.telemetry = Telemetry::derive(&self.craft, self.model.planet_radius);
        self.telemetry
    }

    /// Replace the craft state outright, e.g. when restarting a flight.
    pub fn place(&mut self, craft: CraftState) {
        self.craft = craft;
        self.telemetry = Telemetry::derive(&self.craft, self.model.planet_radius);
    }

    /// Craft state after the last tick.
    pub fn craft(&self) -> &CraftState {
        &self.craft
    }

    pub fn model(&self) -> &FlightModel {
        &self.model
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    /// Whether the Sun/Earth/Moon revolution should be frozen.
    pub fn orbit_paused(&self) -> bool {
        self.orbit_paused
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use skyglobe_input::FlightAction;

    const DT: f64 = 1.0 / 60.0;

    fn navigator() -> Navigator {
        Navigator::spawn(FlightModel::default(), &SpawnPoint::default())
    }

    #[test]
    fn test_starts_in_orbit_mode_unpaused() {
        let nav = navigator();
        assert_eq!(nav.camera_mode(), CameraMode::Orbit);
        assert!(!nav.orbit_paused());
        assert!((nav.telemetry().altitude_km - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_camera_toggle_pulse_flips_mode() {
        let mut nav = navigator();
        let pulse = InputFrame::IDLE.with(FlightAction::ToggleCamera);
        nav.update(&pulse, DT);
        assert_eq!(nav.camera_mode(), CameraMode::Cockpit);
        nav.update(&InputFrame::IDLE, DT);
        assert_eq!(nav.camera_mode(), CameraMode::Cockpit);
        nav.update(&pulse, DT);
        assert_eq!(nav.camera_mode(), CameraMode::Orbit);
    }

    #[test]
    fn test_orbit_toggle_leaves_craft_untouched() {
        let mut nav = navigator();
        let before = *nav.craft();
        nav.update(&InputFrame::IDLE.with(FlightAction::ToggleOrbit), DT);
        assert!(nav.orbit_paused());
        assert_eq!(*nav.craft(), before);
        assert_eq!(nav.camera_mode(), CameraMode::Orbit);
    }

    #[test]
    fn test_both_toggles_in_one_tick() {
        let mut nav = navigator().with_orbit_paused(true);
        let input = InputFrame::IDLE
            .with(FlightAction::ToggleCamera)
            .with(FlightAction::ToggleOrbit);
        nav.update(&input, DT);
        assert_eq!(nav.camera_mode(), CameraMode::Cockpit);
        assert!(!nav.orbit_paused());
    }

    #[test]
    fn test_paris_forward_one_second() {
        let mut nav = navigator();
        let start = *nav.craft();
        let forward = InputFrame::IDLE.with(FlightAction::Forward);
        for _ in 0..60 {
            let t = nav.update(&forward, DT);
            assert!((0.0..360.0).contains(&t.heading_deg));
        }
        let moved = nav.craft().position - start.position;
        assert!(moved.length() > 10.0, "moved only {}", moved.length());
        assert!(moved.normalize().dot(start.forward()) > 0.99);
        assert!(nav.telemetry().latitude_deg > 48.85, "northbound flight gains latitude");
        assert!((nav.telemetry().altitude_km - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_at_center_is_finite() {
        let mut nav = navigator();
        let mut craft = *nav.craft();
        craft.position = DVec3::ZERO;
        nav.place(craft);
        let t = nav.update(&InputFrame::IDLE.with(FlightAction::Forward), DT);
        assert!(nav.craft().position.is_finite());
        assert!(t.heading_deg.is_finite() && t.altitude_km.is_finite());
    }

    #[test]
    fn test_camera_mode_labels() {
        assert_eq!(CameraMode::Orbit.to_string(), "ORBIT");
        assert_eq!(CameraMode::Cockpit.toggled(), CameraMode::Orbit);
    }
}
