use std::f64::consts::PI;

use glam::{DQuat, DVec3};

use crate::pose::CameraPose;

/// Pilot eye point in the craft's local frame.
///
/// The craft faces +Z while cameras look down -Z, so the anchor carries a
/// half turn about +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CockpitAnchor {
    /// Eye position relative to the craft, in craft axes.
    pub offset: DVec3,
    /// Camera rotation relative to the craft.
    pub rotation: DQuat,
}

impl Default for CockpitAnchor {
    /// At the nose tip, slightly raised.
    fn default() -> Self {
        Self::new(DVec3::new(0.0, 0.25, 1.0))
    }
}

impl CockpitAnchor {
    /// Eye at `offset`, facing the craft's forward.
    pub fn new(offset: DVec3) -> Self {
        Self {
            offset,
            rotation: DQuat::from_rotation_y(PI),
        }
    }

    /// Rigidly attached pose for a craft at `position` with `orientation`.
    pub fn pose(&self, position: DVec3, orientation: DQuat) -> CameraPose {
        CameraPose {
            position: position + orientation * self.offset,
            orientation: (orientation * self.rotation).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cockpit_looks_where_the_craft_flies() {
        let craft_rot = DQuat::from_rotation_x(0.4) * DQuat::from_rotation_y(1.1);
        let pose = CockpitAnchor::default().pose(DVec3::new(3.0, 2.0, 1.0), craft_rot);
        assert!(pose.forward().dot(craft_rot * DVec3::Z) > 1.0 - 1e-12);
        assert!(pose.up().dot(craft_rot * DVec3::Y) > 1.0 - 1e-12);
    }

    #[test]
    fn test_offset_is_in_craft_frame() {
        let anchor = CockpitAnchor::new(DVec3::new(0.0, 0.0, 2.0));
        let craft_rot = DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2);
        let pose = anchor.pose(DVec3::ZERO, craft_rot);
        assert!((pose.position - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-12);
    }
}
