//! Scripted flights: a RON list of timed key holds.
//!
//! ```ron
//! (
//!     segments: [
//!         (frames: 120, hold: [Forward], label: "climb out"),
//!         (frames: 1, hold: [ToggleCamera], label: "cockpit"),
//!     ],
//! )
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skyglobe_input::{FlightAction, KeyMap, KeyboardState, RawKeyEvent};
use tracing::warn;
use winit::keyboard::KeyCode;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("failed to read flight plan {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse flight plan: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("flight plan has no frames to fly")]
    Empty,
}

/// Keys held for a number of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSegment {
    pub frames: u32,
    #[serde(default)]
    pub hold: Vec<FlightAction>,
    #[serde(default)]
    pub label: String,
}

/// Segments flown back to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub segments: Vec<PlanSegment>,
}

impl FlightPlan {
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&contents)
    }

    pub fn from_ron(s: &str) -> Result<Self, PlanError> {
        let plan: Self = ron::from_str(s).map_err(PlanError::Parse)?;
        if plan.total_frames() == 0 {
            return Err(PlanError::Empty);
        }
        Ok(plan)
    }

    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// A short tour: cruise north from the spawn point, speed up, bank
    /// around, look from the cockpit, pause the planets, and come back out.
    pub fn demo() -> Self {
        use FlightAction::*;
        let seg = |frames, hold: &[FlightAction], label: &str| PlanSegment {
            frames,
            hold: hold.to_vec(),
            label: label.to_string(),
        };
        Self {
            segments: vec![
                seg(120, &[Forward], "cruise north"),
                seg(90, &[Forward, IncreaseSpeed], "throttle up"),
                seg(180, &[Forward, Left], "bank left"),
                seg(1, &[ToggleCamera], "cockpit view"),
                seg(240, &[Forward], "cockpit cruise"),
                seg(1, &[ToggleOrbit], "pause planets"),
                seg(120, &[Forward, Right, DecreaseSpeed], "slow right turn"),
                seg(1, &[ToggleOrbit, ToggleCamera], "resume and orbit view"),
                seg(60, &[Backward], "back off"),
                seg(120, &[], "coast"),
            ],
        }
    }
}

/// Replays a [`FlightPlan`] as key presses on a [`KeyboardState`].
pub struct PlanPlayer<'a> {
    plan: &'a FlightPlan,
    keys: Vec<Vec<KeyCode>>,
    segment: usize,
    frame_in_segment: u32,
}

impl<'a> PlanPlayer<'a> {
    /// Resolves every held action to the first key bound to it.
    pub fn new(plan: &'a FlightPlan, keymap: &KeyMap) -> Self {
        let keys = plan
            .segments
            .iter()
            .map(|segment| {
                segment
                    .hold
                    .iter()
                    .filter_map(|action| {
                        let key = keymap.keys_for(*action).first().copied();
                        if key.is_none() {
                            warn!(action = action.name(), "no key bound, skipping in plan");
                        }
                        key
                    })
                    .collect()
            })
            .collect();
        Self {
            plan,
            keys,
            segment: 0,
            frame_in_segment: 0,
        }
    }

    /// Feed this frame's key transitions into `keyboard`.
    ///
    /// Returns the segment the frame belongs to and whether the frame starts
    /// it, or `None` once the plan is over (all keys released by then).
    pub fn advance(&mut self, keyboard: &mut KeyboardState) -> Option<(&'a PlanSegment, bool)> {
        let plan = self.plan;
        while let Some(segment) = plan.segments.get(self.segment) {
            if self.frame_in_segment < segment.frames {
                break;
            }
            self.release(keyboard);
            self.segment += 1;
            self.frame_in_segment = 0;
        }

        let segment = plan.segments.get(self.segment)?;
        let starts = self.frame_in_segment == 0;
        if starts {
            for key in &self.keys[self.segment] {
                keyboard.process_raw(RawKeyEvent::pressed(*key));
            }
        }
        self.frame_in_segment += 1;
        Some((segment, starts))
    }

    fn release(&self, keyboard: &mut KeyboardState) {
        if let Some(keys) = self.keys.get(self.segment) {
            for key in keys {
                keyboard.process_raw(RawKeyEvent::released(*key));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"(
        segments: [
            (frames: 3, hold: [Forward, IncreaseSpeed], label: "go"),
            (frames: 0, hold: [Left], label: "skipped"),
            (frames: 2, hold: [ToggleCamera]),
        ],
    )"#;

    #[test]
    fn test_parse_plan() {
        let plan = FlightPlan::from_ron(PLAN).unwrap();
        assert_eq!(plan.segments.len(), 3);
        assert_eq!(plan.total_frames(), 5);
        assert_eq!(plan.segments[2].label, "");
        assert_eq!(plan.segments[0].hold, vec![FlightAction::Forward, FlightAction::IncreaseSpeed]);
    }

    #[test]
    fn test_empty_plan_is_rejected() {
        assert!(matches!(
            FlightPlan::from_ron("(segments: [])"),
            Err(PlanError::Empty)
        ));
        assert!(matches!(
            FlightPlan::from_ron("(segments: [(frames: 0)])"),
            Err(PlanError::Empty)
        ));
    }

    #[test]
    fn test_bad_plan_is_a_parse_error() {
        assert!(matches!(
            FlightPlan::from_ron("(segments: [(frames: 3, hold: [Hover])])"),
            Err(PlanError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FlightPlan::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, PlanError::Read { .. }));
        assert!(err.to_string().contains("nope.ron"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.ron");
        std::fs::write(&path, PLAN).unwrap();
        assert_eq!(FlightPlan::load(&path).unwrap().total_frames(), 5);
    }

    #[test]
    fn test_player_presses_holds_and_releases() {
        let plan = FlightPlan::from_ron(PLAN).unwrap();
        let keymap = KeyMap::default();
        let mut player = PlanPlayer::new(&plan, &keymap);
        let mut keyboard = KeyboardState::new();

        let mut starts = Vec::new();
        for frame in 0..5 {
            let (segment, first) = player.advance(&mut keyboard).unwrap();
            if first {
                starts.push((frame, segment.label.clone()));
            }
            if frame < 3 {
                assert!(keyboard.is_pressed(KeyCode::ArrowUp));
                assert!(keyboard.is_pressed(KeyCode::KeyW));
                assert_eq!(keyboard.just_pressed(KeyCode::ArrowUp), frame == 0);
            } else {
                assert!(!keyboard.is_pressed(KeyCode::ArrowUp));
                assert!(!keyboard.is_pressed(KeyCode::ArrowLeft));
                assert!(keyboard.is_pressed(KeyCode::KeyC));
                assert_eq!(keyboard.just_pressed(KeyCode::KeyC), frame == 3);
            }
            keyboard.clear_transients();
        }
        assert_eq!(starts, vec![(0, "go".to_string()), (3, String::new())]);

        assert!(player.advance(&mut keyboard).is_none());
        assert!(!keyboard.is_pressed(KeyCode::KeyC));
        assert!(player.advance(&mut keyboard).is_none());
    }

    #[test]
    fn test_shipped_atlantic_plan_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/atlantic_crossing.ron");
        let plan = FlightPlan::load(&path).unwrap();
        assert_eq!(plan.total_frames(), 992);
        assert_eq!(plan.segments.first().map(|s| s.label.as_str()), Some("depart"));
        let toggles = plan
            .segments
            .iter()
            .filter(|s| s.hold.contains(&FlightAction::ToggleCamera))
            .count();
        assert_eq!(toggles, 2);
    }

    #[test]
    fn test_demo_plan_is_valid() {
        let demo = FlightPlan::demo();
        let text = ron::to_string(&demo).unwrap();
        assert_eq!(FlightPlan::from_ron(&text).unwrap(), demo);
        assert!(demo.total_frames() > 0);
    }
}
