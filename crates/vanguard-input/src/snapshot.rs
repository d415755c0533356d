//! Immutable per-frame device state captures and the polling boundary.
//!
//! A snapshot is a full capture of one device's state for one frame. The
//! host platform produces one snapshot per device class per frame through a
//! [`DeviceSource`]; the core only ever reads them.

use crate::control::GamepadButton;
use glam::Vec2;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Full keyboard state for one frame: the set of held physical keys.
///
/// Physical key codes are used throughout so bindings work identically
/// regardless of the user's keyboard layout.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSnapshot {
    pressed: HashSet<KeyCode>,
}

impl KeyboardSnapshot {
    /// Creates a snapshot with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from an iterator of held keys.
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
        }
    }

    /// Marks `key` as held.
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    /// Marks `key` as released.
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    /// Whether `key` is held in this snapshot.
    #[must_use]
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// Full pointer state for one frame.
///
/// `wheel` is a cumulative total, not a per-frame delta: scroll direction is
/// recovered by comparing the wheel values of two consecutive snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    /// Cursor position in window-logical coordinates.
    pub position: Vec2,
    /// Left button held.
    pub left: bool,
    /// Right button held.
    pub right: bool,
    /// Middle button held.
    pub middle: bool,
    /// Cumulative scroll wheel value (positive = up).
    pub wheel: f32,
}

impl PointerSnapshot {
    /// Creates a snapshot with the cursor at the origin and nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Full gamepad state for one frame.
///
/// The default snapshot reads as disconnected: an absent pad contributes
/// nothing to any action.
#[derive(Debug, Clone, Default)]
pub struct GamepadSnapshot {
    /// Whether a pad is attached in this frame.
    pub connected: bool,
    /// Left stick, each axis in `[-1, 1]`, Y up positive.
    pub left_stick: Vec2,
    /// Right stick, each axis in `[-1, 1]`, Y up positive.
    pub right_stick: Vec2,
    /// Left analog trigger in `[0, 1]`.
    pub left_trigger: f32,
    /// Right analog trigger in `[0, 1]`.
    pub right_trigger: f32,
    buttons: HashSet<GamepadButton>,
}

impl GamepadSnapshot {
    /// Creates a disconnected snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a connected snapshot with everything at rest.
    #[must_use]
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// Marks `button` as held.
    pub fn press(&mut self, button: GamepadButton) {
        self.buttons.insert(button);
    }

    /// Marks `button` as released.
    pub fn release(&mut self, button: GamepadButton) {
        self.buttons.remove(&button);
    }

    /// Whether `button` is held in this snapshot. Connectivity is not
    /// consulted here; disconnected short-circuiting happens in the control
    /// predicates.
    #[must_use]
    pub fn is_button_down(&self, button: GamepadButton) -> bool {
        self.buttons.contains(&button)
    }
}

/// The host-platform polling boundary.
///
/// One implementation samples real devices (winit events plus gilrs); the
/// [`ManualSource`](crate::source::ManualSource) stages state by hand for
/// tests and headless harnesses. All three polls are synchronous and
/// non-blocking, and each is called exactly once per
/// [`DeviceStateBuffer::update`](crate::buffer::DeviceStateBuffer::update).
pub trait DeviceSource {
    /// Sample the current keyboard state.
    fn poll_keyboard(&mut self) -> KeyboardSnapshot;

    /// Sample the current pointer state.
    fn poll_pointer(&mut self) -> PointerSnapshot;

    /// Sample the current gamepad state.
    fn poll_gamepad(&mut self) -> GamepadSnapshot;
}
