//! Winit keyboard event collector.
//!
//! Accumulates key events between frames into a held-key set, which is
//! captured as a [`KeyboardSnapshot`] at poll time. Physical key codes are
//! used throughout so bindings work identically on any keyboard layout.

use std::collections::HashSet;
use vanguard_input::KeyboardSnapshot;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is a repeat event.
    pub repeat: bool,
}

/// Tracks which physical keys are held, fed by winit events.
#[derive(Debug, Clone, Default)]
pub struct KeyboardCollector {
    held: HashSet<KeyCode>,
}

impl KeyboardCollector {
    /// Creates a collector with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`].
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Processes a [`RawKeyEvent`] (platform-independent, test-friendly).
    ///
    /// Repeat events and keys winit cannot identify are ignored.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.key else {
            return;
        };
        match event.state {
            ElementState::Pressed => {
                self.held.insert(code);
            }
            ElementState::Released => {
                self.held.remove(&code);
            }
        }
    }

    /// Drops all held keys, e.g. when the window loses focus and release
    /// events will never arrive.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Captures the current held set as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot::from_keys(self.held.iter().copied())
    }
}
