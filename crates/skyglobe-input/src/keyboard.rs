//! Frame-coherent keyboard state.
//!
//! [`KeyboardState`] accumulates key events during a frame and answers, per
//! physical key code: is it held, did it go down this frame, did it come up
//! this frame. Keys are tracked by [`KeyCode`] so bindings do not depend on
//! the active keyboard layout.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: KeyCode,
    /// Whether the key went down or up.
    pub state: ElementState,
    /// OS auto-repeat while held.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A non-repeat press of `key`.
    pub fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A release of `key`.
    pub fn released(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Released,
            repeat: false,
        }
    }

    /// Build from the parts of a winit [`KeyEvent`]. `None` for keys the
    /// platform could not identify.
    pub fn from_physical(
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<Self> {
        match physical_key {
            PhysicalKey::Code(key) => Some(Self { key, state, repeat }),
            PhysicalKey::Unidentified(_) => None,
        }
    }
}

/// Held / just-pressed / just-released key sets for the current frame.
///
/// Feed events with [`process_event`](Self::process_event) or
/// [`process_raw`](Self::process_raw), query, then call
/// [`clear_transients`](Self::clear_transients) once the frame's tick ran.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
    just_released: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Creates a `KeyboardState` with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`]. Unidentified keys are dropped.
    pub fn process_event(&mut self, event: &KeyEvent) {
        if let Some(raw) = RawKeyEvent::from_physical(event.physical_key, event.state, event.repeat)
        {
            self.process_raw(raw);
        }
    }

    /// Processes a [`RawKeyEvent`].
    ///
    /// Repeats are ignored, and so is a press of a key that is already held,
    /// which keeps `just_pressed` to one frame per physical press.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                if self.pressed.insert(event.key) {
                    self.just_pressed.insert(event.key);
                }
            }
            ElementState::Released => {
                if self.pressed.remove(&event.key) {
                    self.just_released.insert(event.key);
                }
            }
        }
    }

    /// `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// `true` only during the frame the key went down.
    #[must_use]
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// `true` only during the frame the key came up.
    #[must_use]
    pub fn just_released(&self, key: KeyCode) -> bool {
        self.just_released.contains(&key)
    }

    /// Releases every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.just_released.extend(self.pressed.drain());
    }

    /// Clears the per-frame transition sets. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
