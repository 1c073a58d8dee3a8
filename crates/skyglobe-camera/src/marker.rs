use glam::{DQuat, DVec3};

pub const MARKER_NEAR_OPACITY: f64 = 0.8;
pub const MARKER_FAR_OPACITY: f64 = 0.1;
pub const MARKER_FADE_DISTANCE: f64 = 300.0;

/// Opacity of the ground marker ring for a camera `distance` away from the
/// craft. Fades linearly from near to far over `fade_distance`.
pub fn marker_opacity(distance: f64, fade_distance: f64) -> f64 {
    let t = if fade_distance > 0.0 {
        (distance.max(0.0) / fade_distance).min(1.0)
    } else {
        1.0
    };
    MARKER_NEAR_OPACITY + (MARKER_FAR_OPACITY - MARKER_NEAR_OPACITY) * t
}

/// Ring drawn under the craft so it can be found from far away.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundMarker {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Camera distance at which the ring reaches its far opacity.
    pub fade_distance: f64,
    /// Earth-local placement, same as the craft.
    pub position: DVec3,
    /// Ring normal (+Z) points away from the planet center.
    pub orientation: DQuat,
    /// In `[MARKER_FAR_OPACITY, MARKER_NEAR_OPACITY]`.
    pub opacity: f64,
}

impl Default for GroundMarker {
    fn default() -> Self {
        Self {
            inner_radius: 4.0,
            outer_radius: 5.0,
            fade_distance: MARKER_FADE_DISTANCE,
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
            opacity: MARKER_NEAR_OPACITY,
        }
    }
}

impl GroundMarker {
    /// Place the ring at the craft and fade it for a camera `camera_distance`
    /// away. A craft at the planet center keeps the previous orientation.
    pub fn update(&mut self, craft_position: DVec3, camera_distance: f64) {
        self.position = craft_position;
        if let Some(outward) = craft_position.try_normalize() {
            self.orientation = DQuat::from_rotation_arc(DVec3::Z, outward);
        }
        self.opacity = marker_opacity(camera_distance, self.fade_distance);
    }
}
