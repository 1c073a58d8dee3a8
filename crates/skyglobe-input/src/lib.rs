//! Flight input: keyboard state tracking, action key map, and the per-tick
//! [`InputFrame`] consumed by the navigation core.

pub mod collector;
pub mod keyboard;
pub mod keymap;

pub use collector::{InputCollector, InputFrame};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use keymap::{FlightAction, KeyMap};
