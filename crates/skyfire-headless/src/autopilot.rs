//! Scripted pilot for unattended runs.
//!
//! Weaves across the lane, changes altitude on a slower cycle and taps fire
//! at a fixed cadence. The script depends only on the frame number, so a
//! headless run stays reproducible for a given seed.

use skyfire_core::{Button, InputEvent};

/// Frames between direction changes.
const WEAVE_FRAMES: u64 = 120;
/// Frames in one climb/dive cycle.
const ALTITUDE_FRAMES: u64 = 400;
/// Frames between fire taps. Slower than the volley cooldown at 60 FPS.
const FIRE_FRAMES: u64 = 20;

/// Deterministic weave-and-fire input script.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    frame: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs to deliver before the next step.
    pub fn next_inputs(&mut self) -> Vec<InputEvent> {
        let frame = self.frame;
        self.frame += 1;

        let mut events = Vec::new();
        match frame % (2 * WEAVE_FRAMES) {
            0 => {
                events.push(InputEvent::Released(Button::Right));
                events.push(InputEvent::Pressed(Button::Left));
            }
            f if f == WEAVE_FRAMES => {
                events.push(InputEvent::Released(Button::Left));
                events.push(InputEvent::Pressed(Button::Right));
            }
            _ => {}
        }

        let quarter = ALTITUDE_FRAMES / 4;
        match frame % ALTITUDE_FRAMES {
            f if f == 0 => events.push(InputEvent::Pressed(Button::Up)),
            f if f == quarter => events.push(InputEvent::Released(Button::Up)),
            f if f == 2 * quarter => events.push(InputEvent::Pressed(Button::Down)),
            f if f == 3 * quarter => events.push(InputEvent::Released(Button::Down)),
            _ => {}
        }

        match frame % FIRE_FRAMES {
            0 => events.push(InputEvent::Pressed(Button::Fire)),
            1 => events.push(InputEvent::Released(Button::Fire)),
            _ => {}
        }
        events
    }

    /// Restarts the script from its first frame.
    pub fn reset(&mut self) {
        self.frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_presses_left_up_and_fire() {
        let mut pilot = Autopilot::new();
        let events = pilot.next_inputs();
        assert!(events.contains(&InputEvent::Pressed(Button::Left)));
        assert!(events.contains(&InputEvent::Pressed(Button::Up)));
        assert!(events.contains(&InputEvent::Pressed(Button::Fire)));
    }

    #[test]
    fn fire_is_tapped_not_held() {
        let mut pilot = Autopilot::new();
        let frames: Vec<_> = (0..FIRE_FRAMES * 3).map(|_| pilot.next_inputs()).collect();
        let presses = frames
            .iter()
            .flatten()
            .filter(|e| **e == InputEvent::Pressed(Button::Fire))
            .count();
        let releases = frames
            .iter()
            .flatten()
            .filter(|e| **e == InputEvent::Released(Button::Fire))
            .count();
        assert_eq!(presses, 3);
        assert_eq!(releases, 3);
    }

    #[test]
    fn weave_switches_direction() {
        let mut pilot = Autopilot::new();
        let events: Vec<_> = (0..=WEAVE_FRAMES).flat_map(|_| pilot.next_inputs()).collect();
        assert!(events.contains(&InputEvent::Pressed(Button::Right)));
        assert!(events.contains(&InputEvent::Released(Button::Left)));
    }

    #[test]
    fn reset_replays_the_script() {
        let mut pilot = Autopilot::new();
        let first: Vec<_> = (0..50).map(|_| pilot.next_inputs()).collect();
        pilot.reset();
        let second: Vec<_> = (0..50).map(|_| pilot.next_inputs()).collect();
        assert_eq!(first, second);
    }
}
