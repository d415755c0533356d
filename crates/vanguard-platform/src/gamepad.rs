//! Gamepad polling wrapping [`gilrs`].
//!
//! [`GamepadPoller`] drains gilrs events each poll, normalises stick axes
//! through a configurable deadzone, and exposes the state of one pad slot as
//! a [`GamepadSnapshot`]. Hot-plug is handled transparently: a pad that
//! unplugs reads as disconnected from the next poll onwards.

use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};
use glam::Vec2;
use std::collections::HashMap;
use tracing::debug;
use vanguard_input::{GamepadButton, GamepadSnapshot};

/// Last-known state of a single pad.
#[derive(Debug, Clone, Default)]
struct PadState {
    connected: bool,
    left_stick: Vec2,
    right_stick: Vec2,
    left_trigger: f32,
    right_trigger: f32,
    buttons: Vec<GamepadButton>,
}

impl PadState {
    fn press(&mut self, button: GamepadButton) {
        if !self.buttons.contains(&button) {
            self.buttons.push(button);
        }
    }

    fn release(&mut self, button: GamepadButton) {
        self.buttons.retain(|&b| b != button);
    }

    fn snapshot(&self) -> GamepadSnapshot {
        let mut snap = GamepadSnapshot::new();
        snap.connected = self.connected;
        snap.left_stick = self.left_stick;
        snap.right_stick = self.right_stick;
        snap.left_trigger = self.left_trigger;
        snap.right_trigger = self.right_trigger;
        for &button in &self.buttons {
            snap.press(button);
        }
        snap
    }
}

fn map_button(button: Button) -> Option<GamepadButton> {
    match button {
        Button::South => Some(GamepadButton::A),
        Button::East => Some(GamepadButton::B),
        Button::West => Some(GamepadButton::X),
        Button::North => Some(GamepadButton::Y),
        Button::DPadUp => Some(GamepadButton::DPadUp),
        Button::DPadDown => Some(GamepadButton::DPadDown),
        Button::DPadLeft => Some(GamepadButton::DPadLeft),
        Button::DPadRight => Some(GamepadButton::DPadRight),
        Button::LeftTrigger => Some(GamepadButton::LeftShoulder),
        Button::RightTrigger => Some(GamepadButton::RightShoulder),
        Button::Start => Some(GamepadButton::Start),
        Button::Select => Some(GamepadButton::Back),
        _ => None,
    }
}

/// Apply deadzone filtering with rescaling.
///
/// If `|raw| < deadzone`, returns `0.0`. Otherwise rescales from
/// `[deadzone, 1.0]` to `[0.0, 1.0]`, preserving sign.
pub(crate) fn apply_deadzone(raw: f32, deadzone: f32) -> f32 {
    let abs = raw.abs();
    if abs < deadzone {
        return 0.0;
    }
    let scale = 1.0 / (1.0 - deadzone);
    let rescaled = (abs - deadzone) * scale;
    rescaled.min(1.0).copysign(raw)
}

/// Polls gilrs and exposes one pad slot as snapshots.
pub struct GamepadPoller {
    gilrs: Gilrs,
    pads: HashMap<GamepadId, PadState>,
    /// Pad ids in the order first seen; gives slots a stable meaning.
    order: Vec<GamepadId>,
    /// Which connected pad to expose (0 = first seen).
    slot: usize,
    /// Deadzone threshold for analog sticks (default 0.15).
    deadzone: f32,
}

impl GamepadPoller {
    /// Creates a poller for the given pad slot.
    ///
    /// # Panics
    /// Panics if gilrs cannot initialise (missing platform backend).
    #[must_use]
    pub fn new(slot: usize) -> Self {
        let gilrs = Gilrs::new().expect("Failed to initialise gilrs");
        let mut poller = Self {
            gilrs,
            pads: HashMap::new(),
            order: Vec::new(),
            slot,
            deadzone: 0.15,
        };
        let ids: Vec<_> = poller
            .gilrs
            .gamepads()
            .filter(|(_, g)| g.is_connected())
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            poller.order.push(id);
            poller.pads.insert(
                id,
                PadState {
                    connected: true,
                    ..PadState::default()
                },
            );
        }
        poller
    }

    /// Set the analog stick deadzone. Values below this threshold read as
    /// zero and the remaining range is rescaled to `[0.0, 1.0]`.
    pub fn set_deadzone(&mut self, value: f32) {
        self.deadzone = value.clamp(0.0, 0.99);
    }

    /// Current deadzone threshold.
    #[must_use]
    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    /// Drains pending gilrs events and captures the slot's state. Called
    /// once per frame by the device source.
    pub fn poll(&mut self) -> GamepadSnapshot {
        while let Some(event) = self.gilrs.next_event() {
            let id = event.id;
            match event.event {
                EventType::Connected => {
                    debug!(name = self.gilrs.gamepad(id).name(), "gamepad connected");
                    if !self.order.contains(&id) {
                        self.order.push(id);
                    }
                    let state = self.pads.entry(id).or_default();
                    state.connected = true;
                }
                EventType::Disconnected => {
                    debug!("gamepad disconnected");
                    // Drop stale held state so a replug starts clean.
                    if let Some(state) = self.pads.get_mut(&id) {
                        *state = PadState::default();
                    }
                }
                EventType::AxisChanged(axis, raw_value, _) => {
                    if let Some(state) = self.pads.get_mut(&id) {
                        let value = apply_deadzone(raw_value, self.deadzone);
                        match axis {
                            Axis::LeftStickX => state.left_stick.x = value,
                            Axis::LeftStickY => state.left_stick.y = value,
                            Axis::RightStickX => state.right_stick.x = value,
                            Axis::RightStickY => state.right_stick.y = value,
                            Axis::LeftZ => state.left_trigger = value.max(0.0),
                            Axis::RightZ => state.right_trigger = value.max(0.0),
                            _ => {}
                        }
                    }
                }
                EventType::ButtonPressed(button, _) => {
                    if let Some(mapped) = map_button(button)
                        && let Some(state) = self.pads.get_mut(&id)
                    {
                        state.press(mapped);
                    }
                }
                EventType::ButtonReleased(button, _) => {
                    if let Some(mapped) = map_button(button)
                        && let Some(state) = self.pads.get_mut(&id)
                    {
                        state.release(mapped);
                    }
                }
                _ => {}
            }
        }

        self.slot_state()
            .map_or_else(GamepadSnapshot::new, PadState::snapshot)
    }

    /// The state for the configured slot: the nth connected pad in
    /// first-seen order.
    fn slot_state(&self) -> Option<&PadState> {
        self.order
            .iter()
            .filter_map(|id| self.pads.get(id))
            .filter(|s| s.connected)
            .nth(self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_filters_small_values() {
        assert_eq!(apply_deadzone(0.10, 0.15), 0.0);
        assert_eq!(apply_deadzone(-0.14, 0.15), 0.0);
    }

    #[test]
    fn test_deadzone_rescales_above_threshold() {
        // (0.575 - 0.15) / (1.0 - 0.15) = 0.5
        let rescaled = apply_deadzone(0.575, 0.15);
        assert!((rescaled - 0.5).abs() < 0.01, "got {rescaled}");
    }

    #[test]
    fn test_deadzone_preserves_sign_and_clamps() {
        assert!(apply_deadzone(-0.575, 0.15) < 0.0);
        assert!((apply_deadzone(1.0, 0.15) - 1.0).abs() < f32::EPSILON);
        assert!((apply_deadzone(-1.0, 0.15) + 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_deadzone_is_identity() {
        for &v in &[-1.0_f32, -0.3, 0.0, 0.7, 1.0] {
            assert!((apply_deadzone(v, 0.0) - v).abs() < 1e-6);
        }
    }

    #[test]
    fn test_button_mapping_covers_bindable_set() {
        assert_eq!(map_button(Button::South), Some(GamepadButton::A));
        assert_eq!(map_button(Button::North), Some(GamepadButton::Y));
        assert_eq!(map_button(Button::Select), Some(GamepadButton::Back));
        assert_eq!(map_button(Button::LeftTrigger), Some(GamepadButton::LeftShoulder));
        // Analog trigger stages arrive as axis events, not buttons.
        assert_eq!(map_button(Button::LeftTrigger2), None);
    }

    #[test]
    fn test_pad_state_snapshot_roundtrip() {
        let mut state = PadState {
            connected: true,
            ..PadState::default()
        };
        state.press(GamepadButton::A);
        state.press(GamepadButton::DPadUp);
        state.release(GamepadButton::A);
        state.left_trigger = 0.7;

        let snap = state.snapshot();
        assert!(snap.connected);
        assert!(!snap.is_button_down(GamepadButton::A));
        assert!(snap.is_button_down(GamepadButton::DPadUp));
        assert_eq!(snap.left_trigger, 0.7);
    }

    #[test]
    fn test_disconnect_resets_state() {
        let mut state = PadState {
            connected: true,
            ..PadState::default()
        };
        state.press(GamepadButton::Start);
        state = PadState::default();
        let snap = state.snapshot();
        assert!(!snap.connected);
        assert!(!snap.is_button_down(GamepadButton::Start));
    }
}
