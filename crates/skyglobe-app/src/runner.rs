//! Headless flight loop: plan -> keyboard -> input frame -> sim tick.

use skyglobe_geo::GeoCoord;
use skyglobe_input::{InputCollector, KeyMap, KeyboardState};
use skyglobe_nav::{CameraMode, Telemetry};
use skyglobe_sim::FlightSim;
use tracing::{debug, info};

use crate::plan::{FlightPlan, PlanPlayer};

/// Pace and length of a headless flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    /// Frames per simulated second; each frame is one tick of `1 / frame_rate`.
    pub frame_rate: u32,
    /// Log the readout every this many frames; 0 disables it.
    pub readout_interval: u32,
    /// Stop early after this many frames.
    pub frame_limit: Option<u64>,
}

/// Where a flight started and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub frames: u64,
    pub start: GeoCoord,
    pub end: Telemetry,
    /// Great-circle distance between start and end over the planet surface.
    pub surface_distance: f64,
    pub camera_mode: CameraMode,
    pub orbit_paused: bool,
}

/// Fly `plan` to completion (or `frame_limit`) at a fixed frame rate.
pub fn fly(
    sim: &mut FlightSim,
    plan: &FlightPlan,
    keymap: &KeyMap,
    settings: &RunSettings,
) -> FlightSummary {
    let dt = 1.0 / f64::from(settings.frame_rate.max(1));
    let collector = InputCollector::new(keymap.clone());
    let mut keyboard = KeyboardState::new();
    let mut player = PlanPlayer::new(plan, keymap);
    let start = sim.readout().telemetry.geo();
    let mut frames: u64 = 0;

    while settings.frame_limit.is_none_or(|limit| frames < limit) {
        let Some((segment, starts)) = player.advance(&mut keyboard) else {
            break;
        };
        if starts {
            info!(
                label = %segment.label,
                frames = segment.frames,
                hold = ?segment.hold,
                "segment"
            );
        }

        let input = collector.collect(&keyboard);
        sim.step(dt, input);
        keyboard.clear_transients();
        frames += 1;

        if settings.readout_interval > 0 && frames % u64::from(settings.readout_interval) == 0 {
            info!("{}", sim.readout().text);
        } else {
            debug!(frame = frames, "{}", sim.readout().text);
        }
    }

    let readout = sim.readout();
    let end = readout.telemetry;
    let planet_radius = sim.navigator().model().planet_radius;
    FlightSummary {
        frames,
        start,
        end,
        surface_distance: start.surface_distance_to(&end.geo(), planet_radius),
        camera_mode: readout.camera_mode,
        orbit_paused: readout.orbit_paused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyglobe_input::FlightAction;
    use skyglobe_sim::SimSettings;
    use winit::keyboard::KeyCode;

    use crate::plan::PlanSegment;

    fn settings() -> RunSettings {
        RunSettings {
            frame_rate: 60,
            readout_interval: 60,
            frame_limit: None,
        }
    }

    #[test]
    fn test_demo_flight_round_trips_toggles() {
        let mut sim = FlightSim::new(SimSettings::default());
        let plan = FlightPlan::demo();
        let summary = fly(&mut sim, &plan, &KeyMap::default(), &settings());
        assert_eq!(summary.frames, plan.total_frames());
        assert_eq!(summary.camera_mode, CameraMode::Orbit);
        assert!(!summary.orbit_paused);
        assert!(summary.surface_distance > 10.0);
        assert!((summary.end.altitude_km - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_limit_stops_early() {
        let mut sim = FlightSim::new(SimSettings::default());
        let run = RunSettings {
            frame_limit: Some(150),
            ..settings()
        };
        let summary = fly(&mut sim, &FlightPlan::demo(), &KeyMap::default(), &run);
        assert_eq!(summary.frames, 150);
        assert_eq!(sim.frame_time().frame, 150);
    }

    #[test]
    fn test_rebound_keys_drive_the_plan() {
        let mut keymap = KeyMap::default();
        keymap.bind(FlightAction::ToggleCamera, vec![KeyCode::KeyV]);
        let plan = FlightPlan {
            segments: vec![PlanSegment {
                frames: 10,
                hold: vec![FlightAction::ToggleCamera],
                label: "look".into(),
            }],
        };
        let mut sim = FlightSim::new(SimSettings::default());
        let summary = fly(&mut sim, &plan, &keymap, &settings());
        assert_eq!(summary.camera_mode, CameraMode::Cockpit);
        assert!(summary.surface_distance < 1e-9, "no movement keys held");
    }
}
