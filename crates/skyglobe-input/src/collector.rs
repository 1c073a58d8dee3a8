//! Per-tick input snapshot handed to the navigation core.

use crate::keyboard::KeyboardState;
use crate::keymap::{FlightAction, KeyMap};

/// The pilot's intent for one simulation tick.
///
/// Held flags are `true` for as long as the key is down. The two toggle flags
/// are pulses: the producer guarantees each is `true` for exactly one tick per
/// physical press, however long the key stays down. Consumers never debounce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub increase_speed: bool,
    pub decrease_speed: bool,
    /// Pulse: flip between orbit and cockpit camera.
    pub toggle_camera: bool,
    /// Pulse: pause or resume the celestial orbits.
    pub toggle_orbit: bool,
}

impl InputFrame {
    /// A frame with nothing pressed.
    pub const IDLE: InputFrame = InputFrame {
        forward: false,
        backward: false,
        left: false,
        right: false,
        increase_speed: false,
        decrease_speed: false,
        toggle_camera: false,
        toggle_orbit: false,
    };

    /// Whether `action` is set in this frame.
    pub fn get(&self, action: FlightAction) -> bool {
        match action {
            FlightAction::Forward => self.forward,
            FlightAction::Backward => self.backward,
            FlightAction::Left => self.left,
            FlightAction::Right => self.right,
            FlightAction::IncreaseSpeed => self.increase_speed,
            FlightAction::DecreaseSpeed => self.decrease_speed,
            FlightAction::ToggleCamera => self.toggle_camera,
            FlightAction::ToggleOrbit => self.toggle_orbit,
        }
    }

    /// Set `action` in this frame.
    pub fn set(&mut self, action: FlightAction, value: bool) {
        let slot = match action {
            FlightAction::Forward => &mut self.forward,
            FlightAction::Backward => &mut self.backward,
            FlightAction::Left => &mut self.left,
            FlightAction::Right => &mut self.right,
            FlightAction::IncreaseSpeed => &mut self.increase_speed,
            FlightAction::DecreaseSpeed => &mut self.decrease_speed,
            FlightAction::ToggleCamera => &mut self.toggle_camera,
            FlightAction::ToggleOrbit => &mut self.toggle_orbit,
        };
        *slot = value;
    }

    /// Builder form of [`set`](Self::set), handy in tests and flight plans.
    #[must_use]
    pub fn with(mut self, action: FlightAction) -> Self {
        self.set(action, true);
        self
    }
}

/// Turns keyboard state into [`InputFrame`]s through a [`KeyMap`].
///
/// Toggle actions read `just_pressed`, so a press produces one pulse as long
/// as the caller clears the keyboard's transients after every tick.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    keymap: KeyMap,
}

impl InputCollector {
    /// Collector using the given bindings.
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    /// The active bindings.
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Snapshot the current keyboard state.
    pub fn collect(&self, keyboard: &KeyboardState) -> InputFrame {
        let mut frame = InputFrame::IDLE;
        for action in FlightAction::ALL {
            let active = if action.is_toggle() {
                self.keymap.just_pressed(action, keyboard)
            } else {
                self.keymap.is_held(action, keyboard)
            };
            frame.set(action, active);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_idle_keyboard_gives_idle_frame() {
        let collector = InputCollector::default();
        assert_eq!(collector.collect(&KeyboardState::new()), InputFrame::IDLE);
    }

    #[test]
    fn test_held_keys_map_to_flags() {
        let collector = InputCollector::default();
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::pressed(KeyCode::ArrowUp));
        kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyW));
        kb.clear_transients();

        let frame = collector.collect(&kb);
        assert!(frame.forward);
        assert!(frame.increase_speed);
        assert!(!frame.backward);
        assert!(!frame.toggle_camera);
    }

    #[test]
    fn test_toggle_pulses_once_per_press() {
        let collector = InputCollector::default();
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyC));

        let mut pulses = 0;
        for _ in 0..30 {
            if collector.collect(&kb).toggle_camera {
                pulses += 1;
            }
            kb.clear_transients();
        }
        assert_eq!(pulses, 1);

        kb.process_raw(RawKeyEvent::released(KeyCode::KeyC));
        kb.clear_transients();
        kb.process_raw(RawKeyEvent::pressed(KeyCode::KeyC));
        assert!(collector.collect(&kb).toggle_camera);
    }

    #[test]
    fn test_frame_get_set_agree() {
        for action in FlightAction::ALL {
            let frame = InputFrame::IDLE.with(action);
            assert!(frame.get(action));
            let others = FlightAction::ALL
                .into_iter()
                .filter(|a| *a != action)
                .all(|a| !frame.get(a));
            assert!(others, "{action:?} leaked into another flag");
        }
    }
}
