//! Per-frame driver tying navigation, the celestial clock, and the camera
//! rig together in a `bevy_ecs` world.
//!
//! [`FlightSim::step`] runs exactly one tick per call. Within a tick the
//! systems run in a fixed chain (see [`SimSet`]), so every reader sees the
//! state the navigator produced for that same tick.

mod readout;
mod resources;
mod schedule;
mod sim;


pub use readout::format_readout;
pub use resources::{
    CameraRigRes, CelestialRes, CraftWorldPose, FrameInput, FrameTime, NavigatorRes, ReadoutRes,
};
pub use schedule::{
    SimSet, build_schedule, camera_system, celestial_system, navigation_system, readout_system,
};
pub use sim::{FlightSim, MAX_FRAME_TIME, SimSettings};
