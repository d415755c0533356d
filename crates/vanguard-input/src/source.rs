//! A hand-driven [`DeviceSource`] for tests and headless harnesses.

use crate::control::GamepadButton;
use crate::snapshot::{DeviceSource, GamepadSnapshot, KeyboardSnapshot, PointerSnapshot};
use glam::Vec2;
use winit::keyboard::KeyCode;

/// A device source whose state is staged explicitly by the caller.
///
/// Each poll clones the staged state, so mutations between frames behave
/// exactly like a real device changing between polls:
///
/// ```
/// use vanguard_input::{DeviceStateBuffer, ManualSource};
/// use winit::keyboard::KeyCode;
///
/// let mut source = ManualSource::new();
/// let mut buffer = DeviceStateBuffer::new();
/// buffer.update(&mut source);
///
/// source.press_key(KeyCode::Space);
/// buffer.update(&mut source);
/// assert!(buffer.is_key_triggered(KeyCode::Space));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualSource {
    keyboard: KeyboardSnapshot,
    pointer: PointerSnapshot,
    gamepad: GamepadSnapshot,
}

impl ManualSource {
    /// Creates a source with nothing held and no gamepad attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a key as held.
    pub fn press_key(&mut self, key: KeyCode) {
        self.keyboard.press(key);
    }

    /// Stages a key as released.
    pub fn release_key(&mut self, key: KeyCode) {
        self.keyboard.release(key);
    }

    /// Adds to the cumulative wheel value (positive = up).
    pub fn scroll(&mut self, delta: f32) {
        self.pointer.wheel += delta;
    }

    /// Stages the gamepad as attached.
    pub fn connect_gamepad(&mut self) {
        self.gamepad.connected = true;
    }

    /// Stages the gamepad as detached, clearing its held state.
    pub fn disconnect_gamepad(&mut self) {
        self.gamepad = GamepadSnapshot::new();
    }

    /// Stages a gamepad button as held.
    pub fn press_button(&mut self, button: GamepadButton) {
        self.gamepad.press(button);
    }

    /// Stages a gamepad button as released.
    pub fn release_button(&mut self, button: GamepadButton) {
        self.gamepad.release(button);
    }

    /// Stages the left stick position.
    pub fn set_left_stick(&mut self, stick: Vec2) {
        self.gamepad.left_stick = stick;
    }

    /// Direct access to the staged keyboard state.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardSnapshot {
        &mut self.keyboard
    }

    /// Direct access to the staged pointer state.
    pub fn pointer_mut(&mut self) -> &mut PointerSnapshot {
        &mut self.pointer
    }

    /// Direct access to the staged gamepad state.
    pub fn gamepad_mut(&mut self) -> &mut GamepadSnapshot {
        &mut self.gamepad
    }
}

impl DeviceSource for ManualSource {
    fn poll_keyboard(&mut self) -> KeyboardSnapshot {
        self.keyboard.clone()
    }

    fn poll_pointer(&mut self) -> PointerSnapshot {
        self.pointer
    }

    fn poll_gamepad(&mut self) -> GamepadSnapshot {
        self.gamepad.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polls_reflect_staged_state() {
        let mut source = ManualSource::new();
        source.press_key(KeyCode::KeyW);
        source.pointer_mut().right = true;
        source.connect_gamepad();
        source.press_button(GamepadButton::Start);
        source.set_left_stick(Vec2::new(0.0, 1.0));

        assert!(source.poll_keyboard().is_down(KeyCode::KeyW));
        assert!(source.poll_pointer().right);
        let pad = source.poll_gamepad();
        assert!(pad.connected);
        assert!(pad.is_button_down(GamepadButton::Start));
        assert_eq!(pad.left_stick.y, 1.0);
    }

    #[test]
    fn test_disconnect_clears_pad_state() {
        let mut source = ManualSource::new();
        source.connect_gamepad();
        source.press_button(GamepadButton::A);
        source.gamepad_mut().left_trigger = 1.0;

        source.disconnect_gamepad();
        let pad = source.poll_gamepad();
        assert!(!pad.connected);
        assert!(!pad.is_button_down(GamepadButton::A));
        assert_eq!(pad.left_trigger, 0.0);
    }

    #[test]
    fn test_poll_is_a_point_in_time_capture() {
        let mut source = ManualSource::new();
        source.press_key(KeyCode::KeyA);
        let first = source.poll_keyboard();
        source.release_key(KeyCode::KeyA);
        let second = source.poll_keyboard();

        assert!(first.is_down(KeyCode::KeyA));
        assert!(!second.is_down(KeyCode::KeyA));
    }
}
