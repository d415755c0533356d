//! Double-buffered device state and the raw-control predicates.
//!
//! [`DeviceStateBuffer`] retains exactly two snapshots per device class:
//! `current` and `previous`. Each [`update`](DeviceStateBuffer::update)
//! rotates previous ← current and fills current from the source. That is the
//! entire history — enough to answer "is X pressed now" and "did X just
//! transition to pressed", and nothing more.

use crate::control::{GamepadControl, PhysicalControl, PointerControl};
use crate::snapshot::{DeviceSource, GamepadSnapshot, KeyboardSnapshot, PointerSnapshot};
use winit::keyboard::KeyCode;

/// A two-slot frame buffer. `advance` swaps which slot is current by index
/// and overwrites the stale one; the retained snapshot is never copied.
#[derive(Debug, Clone, Default)]
pub struct Frames<T> {
    slots: [T; 2],
    current: usize,
}

impl<T: Default> Frames<T> {
    /// Creates a buffer with both slots at their default value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Frames<T> {
    /// Rotates: the current slot becomes previous, and `next` becomes current.
    pub fn advance(&mut self, next: T) {
        self.current ^= 1;
        self.slots[self.current] = next;
    }

    /// The current-frame value.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.slots[self.current]
    }

    /// The previous-frame value.
    #[must_use]
    pub fn previous(&self) -> &T {
        &self.slots[self.current ^ 1]
    }
}

/// Current and previous snapshots for all three device classes.
#[derive(Debug, Clone, Default)]
pub struct DeviceStateBuffer {
    keyboard: Frames<KeyboardSnapshot>,
    pointer: Frames<PointerSnapshot>,
    gamepad: Frames<GamepadSnapshot>,
}

impl DeviceStateBuffer {
    /// Creates a buffer with empty (everything-inactive, pad-disconnected)
    /// snapshots in both slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one frame: for each device class, previous ← current,
    /// current ← poll.
    ///
    /// Call exactly once per logical frame. Calling it more than once per
    /// frame silently loses one frame's transition information.
    pub fn update<S: DeviceSource>(&mut self, source: &mut S) {
        self.keyboard.advance(source.poll_keyboard());
        self.pointer.advance(source.poll_pointer());
        self.gamepad.advance(source.poll_gamepad());
    }

    // ── Raw predicates ──────────────────────────────────────────────

    /// Whether `key` is held this frame.
    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.current().is_down(key)
    }

    /// Whether `key` went down between the previous and current frame.
    #[must_use]
    pub fn is_key_triggered(&self, key: KeyCode) -> bool {
        self.keyboard.current().is_down(key) && !self.keyboard.previous().is_down(key)
    }

    /// Whether a pointer control reads active this frame.
    #[must_use]
    pub fn is_pointer_pressed(&self, control: PointerControl) -> bool {
        control.is_pressed(self.pointer.previous(), self.pointer.current())
    }

    /// Whether a pointer control fired its rising edge this frame.
    #[must_use]
    pub fn is_pointer_triggered(&self, control: PointerControl) -> bool {
        control.is_triggered(self.pointer.previous(), self.pointer.current())
    }

    /// Whether a gamepad control reads active this frame. Always `false`
    /// while the pad is disconnected.
    #[must_use]
    pub fn is_gamepad_pressed(&self, control: GamepadControl) -> bool {
        control.is_pressed(self.gamepad.current())
    }

    /// Whether a gamepad control fired its rising edge this frame. Always
    /// `false` while the pad is disconnected.
    #[must_use]
    pub fn is_gamepad_triggered(&self, control: GamepadControl) -> bool {
        control.is_triggered(self.gamepad.previous(), self.gamepad.current())
    }

    /// Uniform pressed predicate over any [`PhysicalControl`].
    #[must_use]
    pub fn is_pressed(&self, control: PhysicalControl) -> bool {
        match control {
            PhysicalControl::Key(key) => self.is_key_pressed(key),
            PhysicalControl::Pointer(c) => self.is_pointer_pressed(c),
            PhysicalControl::Gamepad(c) => self.is_gamepad_pressed(c),
        }
    }

    /// Uniform triggered predicate over any [`PhysicalControl`].
    #[must_use]
    pub fn is_triggered(&self, control: PhysicalControl) -> bool {
        match control {
            PhysicalControl::Key(key) => self.is_key_triggered(key),
            PhysicalControl::Pointer(c) => self.is_pointer_triggered(c),
            PhysicalControl::Gamepad(c) => self.is_gamepad_triggered(c),
        }
    }

    // ── Raw snapshot access ─────────────────────────────────────────

    /// Current keyboard snapshot.
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardSnapshot {
        self.keyboard.current()
    }

    /// Previous keyboard snapshot.
    #[must_use]
    pub fn keyboard_previous(&self) -> &KeyboardSnapshot {
        self.keyboard.previous()
    }

    /// Current pointer snapshot (e.g. for free camera pan from raw deltas).
    #[must_use]
    pub fn pointer(&self) -> &PointerSnapshot {
        self.pointer.current()
    }

    /// Previous pointer snapshot.
    #[must_use]
    pub fn pointer_previous(&self) -> &PointerSnapshot {
        self.pointer.previous()
    }

    /// Current gamepad snapshot.
    #[must_use]
    pub fn gamepad(&self) -> &GamepadSnapshot {
        self.gamepad.current()
    }

    /// Previous gamepad snapshot.
    #[must_use]
    pub fn gamepad_previous(&self) -> &GamepadSnapshot {
        self.gamepad.previous()
    }
}
