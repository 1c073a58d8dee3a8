//! Camera strategies: a smoothed orbit observer and a rigid cockpit view.

pub mod cockpit;
pub mod marker;
pub mod orbit;
pub mod pose;
pub mod rig;

pub use cockpit::CockpitAnchor;
pub use marker::{GroundMarker, marker_opacity};
pub use orbit::{OrbitCamera, OrbitControls};
pub use pose::CameraPose;
pub use rig::CameraRig;
