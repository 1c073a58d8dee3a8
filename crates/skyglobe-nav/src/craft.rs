use glam::{DMat3, DQuat, DVec3};
use skyglobe_geo::{north_tangent, to_cartesian};

/// Cross products shorter than this are treated as degenerate.
pub(crate) const DEGENERATE_EPSILON: f64 = 1e-9;

/// Where and how fast the craft starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPoint {
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, positive east.
    pub longitude: f64,
    /// Height above the planet surface, in km.
    pub altitude: f64,
    /// Initial current and target speed.
    pub speed: f64,
}

impl Default for SpawnPoint {
    /// Paris, 3 km up, cruising at the initial speed.
    fn default() -> Self {
        Self {
            latitude: 48.85,
            longitude: 2.35,
            altitude: 3.0,
            speed: crate::AIRPLANE_INITIAL_SPEED,
        }
    }
}

/// The craft's kinematic state in the planet-local frame.
///
/// The craft's local +Y is its up vector and local +Z its forward vector.
/// Between ticks `up()` stays parallel to `position.normalize()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraftState {
    /// Planet-local position; its length is planet radius plus altitude.
    pub position: DVec3,
    /// Rotation from craft-local axes to the planet frame.
    pub orientation: DQuat,
    /// Speed used for this tick's translation.
    pub current_speed: f64,
    /// Speed the throttle asks for; `current_speed` blends toward it.
    pub target_speed: f64,
}

impl CraftState {
    /// Place a craft at `spawn` over a planet of `planet_radius`, facing north.
    pub fn spawn(spawn: &SpawnPoint, planet_radius: f64) -> Self {
        let position = to_cartesian(
            spawn.latitude,
            spawn.longitude,
            planet_radius + spawn.altitude,
        );
        let orientation = tangent_frame(position, north_tangent(spawn.latitude, spawn.longitude))
            .unwrap_or(DQuat::IDENTITY);
        Self {
            position,
            orientation,
            current_speed: spawn.speed,
            target_speed: spawn.speed,
        }
    }

    /// Nose direction (local +Z).
    #[inline]
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }

    /// Local +Y, the outward surface normal under the craft.
    #[inline]
    pub fn up(&self) -> DVec3 {
        self.orientation * DVec3::Y
    }

    /// Local +X. With +Y up and +Z forward this points to the craft's left.
    #[inline]
    pub fn left(&self) -> DVec3 {
        self.orientation * DVec3::X
    }

    /// Distance from the planet center.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.position.length()
    }
}

/// Build an orientation whose up is `up_hint` and whose forward is
/// `forward_hint` projected onto the plane perpendicular to it.
///
/// Returns `None` when `up_hint` is zero or `forward_hint` has no tangential
/// component.
pub fn tangent_frame(up_hint: DVec3, forward_hint: DVec3) -> Option<DQuat> {
    let up = up_hint.try_normalize()?;
    let tangential = forward_hint - up * forward_hint.dot(up);
    if tangential.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        return None;
    }
    let forward = tangential.normalize();
    let left = up.cross(forward);
    Some(DQuat::from_mat3(&DMat3::from_cols(left, up, forward)).normalize())
}
