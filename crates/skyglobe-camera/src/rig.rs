use glam::{DQuat, DVec3};
use skyglobe_nav::CameraMode;
use tracing::debug;

use crate::cockpit::CockpitAnchor;
use crate::marker::GroundMarker;
use crate::orbit::{OrbitCamera, OrbitControls};
use crate::pose::CameraPose;

/// Picks the camera strategy for the active [`CameraMode`] and produces the
/// render camera's pose each tick.
///
/// Switching modes is a hard cut. The orbit target only moves while the
/// orbit camera is active.
#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Smoothed look target used in orbit mode.
    pub orbit: OrbitCamera,
    /// User drag/zoom state; enabled only in orbit mode.
    pub controls: OrbitControls,
    /// Eye point used in cockpit mode.
    pub cockpit: CockpitAnchor,
    pub marker: GroundMarker,
    mode: CameraMode,
    pose: CameraPose,
}

impl CameraRig {
    /// Start in orbit mode looking at `initial_target`.
    pub fn new(initial_target: DVec3) -> Self {
        let orbit = OrbitCamera::new(initial_target);
        let controls = OrbitControls::default();
        let pose = controls.pose(orbit.target);
        Self {
            orbit,
            controls,
            cockpit: CockpitAnchor::default(),
            marker: GroundMarker::default(),
            mode: CameraMode::Orbit,
            pose,
        }
    }

    /// Compute this tick's camera pose from the craft's world-space pose.
    ///
    /// `craft_local_position` places the ground marker, which lives in the
    /// Earth frame like the craft.
    pub fn update(
        &mut self,
        mode: CameraMode,
        craft_world_position: DVec3,
        craft_world_orientation: DQuat,
        craft_local_position: DVec3,
    ) -> CameraPose {
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, "camera cut");
            self.mode = mode;
        }
        self.controls.enabled = mode == CameraMode::Orbit;

        self.pose = match mode {
            CameraMode::Orbit => {
                self.orbit.follow(craft_world_position);
                self.controls.pose(self.orbit.target)
            }
            CameraMode::Cockpit => self
                .cockpit
                .pose(craft_world_position, craft_world_orientation),
        };

        self.marker.update(
            craft_local_position,
            self.pose.position.distance(craft_world_position),
        );
        self.pose
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::marker_opacity;

    fn craft() -> (DVec3, DQuat) {
        (DVec3::new(150.0, 80.0, 60.0), DQuat::from_rotation_y(0.3))
    }

    #[test]
    fn test_orbit_mode_trails_the_craft() {
        let mut rig = CameraRig::new(DVec3::new(150.0, 0.0, 0.0));
        let (pos, rot) = craft();
        rig.update(CameraMode::Orbit, pos, rot, pos);
        let first = rig.orbit.target;
        assert!(first.distance(pos) < DVec3::new(150.0, 0.0, 0.0).distance(pos));
        assert!(first.distance(pos) > 1.0, "target should lag, not snap");
        assert!(rig.controls.enabled);
    }

    #[test]
    fn test_cockpit_mode_is_rigid_and_disables_controls() {
        let mut rig = CameraRig::new(DVec3::ZERO);
        let (pos, rot) = craft();
        let pose = rig.update(CameraMode::Cockpit, pos, rot, pos);
        assert_eq!(pose, rig.cockpit.pose(pos, rot));
        assert!(!rig.controls.enabled);
        assert_eq!(rig.mode(), CameraMode::Cockpit);
        // the orbit target does not move while in the cockpit
        assert_eq!(rig.orbit.target, DVec3::ZERO);
    }

    #[test]
    fn test_switch_back_to_orbit_is_a_hard_cut() {
        let mut rig = CameraRig::new(DVec3::ZERO);
        let (pos, rot) = craft();
        rig.update(CameraMode::Cockpit, pos, rot, pos);
        let pose = rig.update(CameraMode::Orbit, pos, rot, pos);
        assert_eq!(pose, rig.controls.pose(rig.orbit.target));
    }

    #[test]
    fn test_marker_opacity_tracks_camera_distance() {
        let mut rig = CameraRig::new(DVec3::ZERO);
        let (pos, rot) = craft();
        rig.update(CameraMode::Cockpit, pos, rot, pos);
        assert!(rig.marker.opacity > 0.79);
        rig.update(CameraMode::Orbit, pos, rot, pos);
        let distance = rig.pose().position.distance(pos);
        assert!(distance > 100.0);
        assert!((rig.marker.opacity - marker_opacity(distance, 300.0)).abs() < 1e-12);
    }
}
