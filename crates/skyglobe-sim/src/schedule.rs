//! Tick systems and their fixed ordering.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;

use crate::readout::format_readout;
use crate::resources::{
    CameraRigRes, CelestialRes, CraftWorldPose, FrameInput, FrameTime, NavigatorRes, ReadoutRes,
};

/// Stages of one tick, run in declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Speed, yaw, great-circle motion, mode toggles.
    Navigation,
    /// Sun/Earth/Moon pivot angles.
    Celestial,
    /// Craft world pose and render camera.
    Camera,
    /// Telemetry snapshot and readout text.
    Readout,
}

/// Build the per-tick schedule. Runs single-threaded.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.configure_sets(
        (
            SimSet::Navigation,
            SimSet::Celestial,
            SimSet::Camera,
            SimSet::Readout,
        )
            .chain(),
    );
    schedule.add_systems((
        navigation_system.in_set(SimSet::Navigation),
        celestial_system.in_set(SimSet::Celestial),
        camera_system.in_set(SimSet::Camera),
        readout_system.in_set(SimSet::Readout),
    ));
    schedule
}

/// Applies the frame's input to the craft.
pub fn navigation_system(
    time: Res<'_, FrameTime>,
    input: Res<'_, FrameInput>,
    mut nav: ResMut<'_, NavigatorRes>,
) {
    nav.0.update(&input.0, time.delta);
}

/// Follows the navigator's pause flag, then advances one tick.
pub fn celestial_system(nav: Res<'_, NavigatorRes>, mut clock: ResMut<'_, CelestialRes>) {
    clock.0.set_paused(nav.0.orbit_paused());
    clock.0.tick();
}

/// Moves the craft into world space and updates the active camera.
pub fn camera_system(
    nav: Res<'_, NavigatorRes>,
    clock: Res<'_, CelestialRes>,
    mut rig: ResMut<'_, CameraRigRes>,
    mut pose: ResMut<'_, CraftWorldPose>,
) {
    let craft = nav.0.craft();
    let (position, orientation) = clock.0.craft_to_world(craft.position, craft.orientation);
    *pose = CraftWorldPose {
        position,
        orientation,
    };
    rig.0
        .update(nav.0.camera_mode(), position, orientation, craft.position);
}

pub fn readout_system(nav: Res<'_, NavigatorRes>, mut readout: ResMut<'_, ReadoutRes>) {
    let telemetry = *nav.0.telemetry();
    let orbit_paused = nav.0.orbit_paused();
    let camera_mode = nav.0.camera_mode();
    readout.text = format_readout(&telemetry, orbit_paused, camera_mode);
    readout.telemetry = telemetry;
    readout.orbit_paused = orbit_paused;
    readout.camera_mode = camera_mode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyglobe_camera::CameraRig;
    use skyglobe_celestial::CelestialClock;
    use skyglobe_input::{FlightAction, InputFrame};
    use skyglobe_nav::{CameraMode, FlightModel, Navigator, SpawnPoint};

    #[derive(Resource, Default)]
    struct ExecutionLog {
        stages: Vec<&'static str>,
    }

    fn log_system(stage: &'static str) -> impl Fn(ResMut<'_, ExecutionLog>) {
        move |mut log: ResMut<'_, ExecutionLog>| log.stages.push(stage)
    }

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(FrameTime {
            delta: 1.0 / 60.0,
            frame: 1,
            elapsed: 1.0 / 60.0,
        });
        world.insert_resource(FrameInput::default());
        world.insert_resource(NavigatorRes(Navigator::spawn(
            FlightModel::default(),
            &SpawnPoint::default(),
        )));
        let clock = CelestialClock::default();
        world.insert_resource(CameraRigRes(CameraRig::new(clock.earth_position())));
        world.insert_resource(CelestialRes(clock));
        world.insert_resource(CraftWorldPose::default());
        world.insert_resource(ReadoutRes::default());
        world
    }

    #[test]
    fn test_sets_run_in_order() {
        let mut world = world();
        world.insert_resource(ExecutionLog::default());
        let mut schedule = build_schedule();
        // registered in reverse to show the set chain decides the order
        schedule.add_systems((
            log_system("readout").in_set(SimSet::Readout),
            log_system("camera").in_set(SimSet::Camera),
            log_system("celestial").in_set(SimSet::Celestial),
            log_system("navigation").in_set(SimSet::Navigation),
        ));
        schedule.run(&mut world);
        assert_eq!(
            world.resource::<ExecutionLog>().stages,
            vec!["navigation", "celestial", "camera", "readout"]
        );
    }

    #[test]
    fn test_toggle_reaches_readout_in_the_same_tick() {
        let mut world = world();
        world.resource_mut::<FrameInput>().0 = InputFrame::IDLE
            .with(FlightAction::ToggleCamera)
            .with(FlightAction::ToggleOrbit);
        build_schedule().run(&mut world);

        let readout = world.resource::<ReadoutRes>();
        assert_eq!(readout.camera_mode, CameraMode::Cockpit);
        assert!(readout.orbit_paused);
        assert!(readout.text.ends_with("ORBIT: OFF | CAM: COCKPIT"));
        assert_eq!(world.resource::<CameraRigRes>().0.mode(), CameraMode::Cockpit);
        // paused before the clock ran, so nothing advanced
        assert_eq!(world.resource::<CelestialRes>().0.earth_orbit, 0.0);
    }

    #[test]
    fn test_craft_world_pose_includes_earth_offset() {
        let mut world = world();
        build_schedule().run(&mut world);
        let pose = *world.resource::<CraftWorldPose>();
        let earth = world.resource::<CelestialRes>().0.earth_position();
        assert!((pose.position.distance(earth) - 103.0).abs() < 1e-9);
    }
}
