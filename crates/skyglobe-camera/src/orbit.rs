//! Orbit observer: a smoothed look target plus yaw/pitch/distance controls.

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;

use crate::pose::CameraPose;

/// Per-tick interpolation factor toward the craft.
pub const DEFAULT_FOLLOW_LERP: f64 = 0.1;
pub const MIN_ORBIT_DISTANCE: f64 = 0.1;
pub const MAX_ORBIT_DISTANCE: f64 = 1500.0;

/// Look target that trails the craft's world position.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Smoothed world-space point the camera looks at.
    pub target: DVec3,
    /// Fraction of the remaining gap closed each tick, in `[0, 1]`.
    pub follow_lerp: f64,
}

impl OrbitCamera {
    /// Start looking at `target` with the default follow factor.
    pub fn new(target: DVec3) -> Self {
        Self {
            target,
            follow_lerp: DEFAULT_FOLLOW_LERP,
        }
    }

    /// Move the target a fixed fraction of the way toward `world_position`.
    pub fn follow(&mut self, world_position: DVec3) {
        self.target = self
            .target
            .lerp(world_position, self.follow_lerp.clamp(0.0, 1.0));
    }
}

/// Spherical camera placement around a target, driven by drag and zoom.
///
/// `yaw = 0, pitch = 0` puts the camera on the target's +Z side.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    /// Angle about world +Y, in radians.
    pub yaw: f64,
    /// Elevation above the target's horizontal plane, in radians.
    pub pitch: f64,
    /// Distance from the target.
    pub distance: f64,
    /// Closest zoom.
    pub min_distance: f64,
    /// Farthest zoom.
    pub max_distance: f64,
    /// `|pitch|` never exceeds this, which keeps the camera off the poles.
    pub pitch_limit: f64,
    /// Radians per pixel of drag.
    pub rotate_speed: f64,
    /// Distance scale per zoom step.
    pub zoom_scale: f64,
    /// Drag and zoom are ignored while disabled.
    pub enabled: bool,
}

impl Default for OrbitControls {
    /// Looks at the Earth from above its sunward-facing flank.
    fn default() -> Self {
        Self {
            yaw: std::f64::consts::FRAC_PI_4,
            pitch: (1.0_f64 / 3.0).asin(),
            distance: 300.0,
            min_distance: MIN_ORBIT_DISTANCE,
            max_distance: MAX_ORBIT_DISTANCE,
            pitch_limit: FRAC_PI_2 - 0.01,
            rotate_speed: 0.005,
            zoom_scale: 0.95,
            enabled: true,
        }
    }
}

impl OrbitControls {
    /// Rotate around the target by a pointer drag in pixels.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        if !self.enabled {
            return;
        }
        self.yaw -= dx * self.rotate_speed;
        self.pitch = (self.pitch + dy * self.rotate_speed).clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Positive steps zoom in, negative steps zoom out.
    pub fn zoom(&mut self, steps: f64) {
        if !self.enabled || steps == 0.0 {
            return;
        }
        self.distance = (self.distance * self.zoom_scale.powf(steps))
            .clamp(self.min_distance, self.max_distance);
    }

    /// Camera position relative to the target.
    pub fn offset(&self) -> DVec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        DVec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Camera placed at `target + offset()`, looking at `target`.
    pub fn pose(&self, target: DVec3) -> CameraPose {
        CameraPose::look_at(target + self.offset(), target)
    }
}
