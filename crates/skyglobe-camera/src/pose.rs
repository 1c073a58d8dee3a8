use glam::{DMat3, DQuat, DVec3};

/// A camera transform in world space. The camera looks down its local -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
        }
    }
}

impl CameraPose {
    /// Place a camera at `eye` looking at `target`, keeping world +Y up.
    ///
    /// Falls back to the identity orientation when `eye == target`, and to
    /// world +X as the right vector when looking straight up or down.
    pub fn look_at(eye: DVec3, target: DVec3) -> Self {
        let Some(back) = (eye - target).try_normalize() else {
            return Self {
                position: eye,
                orientation: DQuat::IDENTITY,
            };
        };
        let right = DVec3::Y.cross(back).try_normalize().unwrap_or(DVec3::X);
        let up = back.cross(right);
        Self {
            position: eye,
            orientation: DQuat::from_mat3(&DMat3::from_cols(right, up, back)).normalize(),
        }
    }

    /// Viewing direction.
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::NEG_Z
    }

    /// Local +Y in world space.
    pub fn up(&self) -> DVec3 {
        self.orientation * DVec3::Y
    }
}
