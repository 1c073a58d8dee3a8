//! Flight actions and their keyboard bindings.
//!
//! [`KeyMap`] binds each [`FlightAction`] to one or more physical keys. It is
//! serializable to RON with keys written as their `KeyCode` names
//! (`"ArrowUp"`, `"KeyW"`), and can be patched from the plain
//! `action name -> key name` table in the user config.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;
use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// Everything the pilot can ask of the craft and the scene.
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum FlightAction {
    /// Move along the forward great circle (held).
    Forward,
    /// Move backward at reduced rate (held).
    Backward,
    /// Yaw left (held).
    Left,
    /// Yaw right (held).
    Right,
    /// Raise the target speed (held).
    IncreaseSpeed,
    /// Lower the target speed (held).
    DecreaseSpeed,
    /// Switch between orbit and cockpit camera (pulse).
    ToggleCamera,
    /// Pause or resume the Sun/Earth/Moon revolution (pulse).
    ToggleOrbit,
}

impl FlightAction {
    /// All actions, in display order.
    pub const ALL: [FlightAction; 8] = [
        FlightAction::Forward,
        FlightAction::Backward,
        FlightAction::Left,
        FlightAction::Right,
        FlightAction::IncreaseSpeed,
        FlightAction::DecreaseSpeed,
        FlightAction::ToggleCamera,
        FlightAction::ToggleOrbit,
    ];

    /// Config-file name of the action.
    pub fn name(self) -> &'static str {
        match self {
            FlightAction::Forward => "forward",
            FlightAction::Backward => "backward",
            FlightAction::Left => "left",
            FlightAction::Right => "right",
            FlightAction::IncreaseSpeed => "increase_speed",
            FlightAction::DecreaseSpeed => "decrease_speed",
            FlightAction::ToggleCamera => "toggle_camera",
            FlightAction::ToggleOrbit => "toggle_orbit",
        }
    }

    /// Inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Pulse actions fire once per press instead of while held.
    pub fn is_toggle(self) -> bool {
        matches!(self, FlightAction::ToggleCamera | FlightAction::ToggleOrbit)
    }
}

/// Parse a `KeyCode` from its `Debug` name.
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    Some(match name {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "AltLeft" => KeyCode::AltLeft,
        "AltRight" => KeyCode::AltRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        _ => return None,
    })
}

/// Serde helper: bindings are written as key names since `KeyCode` has no
/// serde support here.
mod bindings_serde {
    use std::collections::{BTreeMap, HashMap};

    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    use super::{FlightAction, key_from_name};

    pub fn serialize<S: Serializer>(
        bindings: &HashMap<FlightAction, Vec<KeyCode>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        let named: BTreeMap<FlightAction, Vec<String>> = bindings
            .iter()
            .map(|(action, keys)| (*action, keys.iter().map(|k| format!("{k:?}")).collect()))
            .collect();
        named.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<HashMap<FlightAction, Vec<KeyCode>>, D::Error> {
        let named = BTreeMap::<FlightAction, Vec<String>>::deserialize(d)?;
        let mut bindings = HashMap::with_capacity(named.len());
        for (action, names) in named {
            let keys = names
                .iter()
                .map(|name| {
                    key_from_name(name)
                        .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            bindings.insert(action, keys);
        }
        Ok(bindings)
    }
}

/// Maps [`FlightAction`]s to physical keys. Any bound key triggers the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMap {
    /// The binding table.
    #[serde(with = "bindings_serde")]
    pub bindings: HashMap<FlightAction, Vec<KeyCode>>,
}

impl Default for KeyMap {
    /// Arrow keys steer, W/S change speed, C switches camera, P pauses orbits.
    fn default() -> Self {
        let bindings = HashMap::from([
            (FlightAction::Forward, vec![KeyCode::ArrowUp]),
            (FlightAction::Backward, vec![KeyCode::ArrowDown]),
            (FlightAction::Left, vec![KeyCode::ArrowLeft]),
            (FlightAction::Right, vec![KeyCode::ArrowRight]),
            (FlightAction::IncreaseSpeed, vec![KeyCode::KeyW]),
            (FlightAction::DecreaseSpeed, vec![KeyCode::KeyS]),
            (FlightAction::ToggleCamera, vec![KeyCode::KeyC]),
            (FlightAction::ToggleOrbit, vec![KeyCode::KeyP]),
        ]);
        Self { bindings }
    }
}

impl KeyMap {
    /// Keys bound to `action`.
    #[must_use]
    pub fn keys_for(&self, action: FlightAction) -> &[KeyCode] {
        self.bindings.get(&action).map_or(&[], |v| v.as_slice())
    }

    /// Replace the bindings for `action`.
    pub fn bind(&mut self, action: FlightAction, keys: Vec<KeyCode>) {
        self.bindings.insert(action, keys);
    }

    /// Apply `action name -> key name` overrides from the user config.
    ///
    /// Each override replaces all bindings of its action with the single
    /// named key. Unknown action or key names are logged and skipped.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        // Sorted so the log output is stable.
        let sorted: BTreeMap<&String, &String> = overrides.iter().collect();
        for (action_name, key_name) in sorted {
            let Some(action) = FlightAction::from_name(action_name) else {
                warn!("ignoring key binding for unknown action '{action_name}'");
                continue;
            };
            let Some(key) = key_from_name(key_name) else {
                warn!("ignoring unknown key '{key_name}' for action '{action_name}'");
                continue;
            };
            self.bind(action, vec![key]);
        }
        self
    }

    /// Whether any key bound to `action` is held.
    #[must_use]
    pub fn is_held(&self, action: FlightAction, keyboard: &KeyboardState) -> bool {
        self.keys_for(action).iter().any(|k| keyboard.is_pressed(*k))
    }

    /// Whether any key bound to `action` went down this frame.
    #[must_use]
    pub fn just_pressed(&self, action: FlightAction, keyboard: &KeyboardState) -> bool {
        self.keys_for(action).iter().any(|k| keyboard.just_pressed(*k))
    }

    /// Serialize to a RON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from a RON string.
    ///
    /// # Errors
    /// Returns an error if the string is malformed or names an unknown key.
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }
}
