//! Input boundary: five logical buttons and their held state.
//!
//! Direction buttons are level-triggered: the movement integrator reads the
//! held set every tick. Fire is edge-triggered: only a release-to-press
//! transition produces a fire request, and holding the button (or key
//! auto-repeat) does nothing further.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A logical button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Climb (+y)
    Up,
    /// Dive (-y)
    Down,
    /// Bank left (-x)
    Left,
    /// Bank right (+x)
    Right,
    /// Fire a volley
    Fire,
}

bitflags! {
    /// Set of currently held buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Buttons: u8 {
        /// Up is held
        const UP = 1 << 0;
        /// Down is held
        const DOWN = 1 << 1;
        /// Left is held
        const LEFT = 1 << 2;
        /// Right is held
        const RIGHT = 1 << 3;
        /// Fire is held
        const FIRE = 1 << 4;
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        match button {
            Button::Up => Self::UP,
            Button::Down => Self::DOWN,
            Button::Left => Self::LEFT,
            Button::Right => Self::RIGHT,
            Button::Fire => Self::FIRE,
        }
    }
}

/// A discrete key-down or key-up event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Button went down
    Pressed(Button),
    /// Button went up
    Released(Button),
}

/// Held-button state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputState {
    held: Buttons,
}

impl InputState {
    /// Creates a state with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an event. Returns true if it was a fresh fire press.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Pressed(button) => {
                let flag = Buttons::from(button);
                let fresh = !self.held.contains(flag);
                self.held.insert(flag);
                fresh && button == Button::Fire
            }
            InputEvent::Released(button) => {
                self.held.remove(Buttons::from(button));
                false
            }
        }
    }

    /// Returns true if `button` is held.
    #[must_use]
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(Buttons::from(button))
    }

    /// Returns the raw held set.
    #[must_use]
    pub const fn held(&self) -> Buttons {
        self.held
    }
}
