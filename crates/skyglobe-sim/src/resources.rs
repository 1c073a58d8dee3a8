use bevy_ecs::prelude::*;
use glam::{DQuat, DVec3};
use skyglobe_camera::CameraRig;
use skyglobe_celestial::CelestialClock;
use skyglobe_input::InputFrame;
use skyglobe_nav::{CameraMode, Navigator, Telemetry};

/// Delta for the tick in progress, already clamped.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameTime {
    pub delta: f64,
    /// Ticks run so far, including the current one.
    pub frame: u64,
    pub elapsed: f64,
}

/// Input for the tick in progress. Toggle pulses are true for this tick only.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FrameInput(pub InputFrame);

/// The craft and its mode flags. Written only by the navigation system.
#[derive(Resource, Debug, Clone)]
pub struct NavigatorRes(pub Navigator);

#[derive(Resource, Debug, Clone)]
pub struct CelestialRes(pub CelestialClock);

/// Orbit and cockpit cameras plus the ground marker.
#[derive(Resource, Debug, Clone)]
pub struct CameraRigRes(pub CameraRig);

/// The craft composed through the Earth frame into world space.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CraftWorldPose {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Default for CraftWorldPose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
        }
    }
}

/// What the on-screen panel shows, refreshed at the end of every tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct ReadoutRes {
    pub telemetry: Telemetry,
    pub orbit_paused: bool,
    pub camera_mode: CameraMode,
    pub text: String,
}
