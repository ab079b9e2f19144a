use crate::core::flight::FlightControlsSnapshot;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Held arrow keys, sampled once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlightInputState {
    up_held: bool,
    down_held: bool,
    left_held: bool,
    right_held: bool,
}

impl FlightInputState {
    /// Returns `true` if the key is one of the flight controls.
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            _ => return false,
        }

        true
    }

    /// Neutral controls while egui owns the keyboard.
    #[must_use]
    pub fn snapshot(&self, text_editing: bool) -> FlightControlsSnapshot {
        if text_editing {
            return FlightControlsSnapshot::default();
        }

        FlightControlsSnapshot {
            throttle_up: self.up_held,
            throttle_down: self.down_held,
            rudder_left: self.left_held,
            rudder_right: self.right_held,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
