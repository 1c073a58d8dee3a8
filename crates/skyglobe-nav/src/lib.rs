//! Craft navigation over a spherical planet.
//!
//! [`FlightModel::advance`] integrates speed, yaw, and great-circle motion for
//! one tick as a pure function of the previous [`CraftState`]. [`Navigator`]
//! owns the single craft instance together with the camera mode and the
//! orbit-pause flag, and derives [`Telemetry`] after every update.
//!
//! All positions are in the planet's local frame: the planet is centered at
//! the origin with +Y as its rotation axis.

mod craft;
mod model;
mod navigator;
mod telemetry;

pub use craft::{CraftState, SpawnPoint, tangent_frame};
pub use model::{
    AIRPLANE_ACCELERATION, AIRPLANE_INITIAL_SPEED, AIRPLANE_MAX_SPEED, AIRPLANE_MIN_SPEED,
    AIRPLANE_TURN_RATE, BACKWARD_FACTOR, FlightModel, PLANET_RADIUS, SPEED_BLEND_RATE,
};
pub use navigator::{CameraMode, Navigator};
pub use telemetry::Telemetry;
