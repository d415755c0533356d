//! Host-platform device sampling: winit event collectors for keyboard and
//! pointer, plus a gilrs-backed gamepad poller, composed into the
//! [`DeviceSource`] the input core polls once per frame.

pub mod gamepad;
pub mod keyboard;
pub mod pointer;

pub use gamepad::GamepadPoller;
pub use keyboard::{KeyboardCollector, RawKeyEvent};
pub use pointer::PointerCollector;

use vanguard_input::{DeviceSource, GamepadSnapshot, KeyboardSnapshot, PointerSnapshot};
use winit::event::WindowEvent;

/// The production [`DeviceSource`]: winit events in, snapshots out.
///
/// Forward every window event through
/// [`process_window_event`](Self::process_window_event) as it arrives; the
/// input manager polls the accumulated state once per frame.
pub struct WinitGilrsSource {
    keyboard: KeyboardCollector,
    pointer: PointerCollector,
    gamepad: GamepadPoller,
}

impl WinitGilrsSource {
    /// Creates a source reading gamepad slot 0.
    ///
    /// # Panics
    /// Panics if the gamepad backend cannot initialise.
    #[must_use]
    pub fn new() -> Self {
        Self::with_gamepad_slot(0)
    }

    /// Creates a source reading the given gamepad slot.
    ///
    /// # Panics
    /// Panics if the gamepad backend cannot initialise.
    #[must_use]
    pub fn with_gamepad_slot(slot: usize) -> Self {
        Self {
            keyboard: KeyboardCollector::new(),
            pointer: PointerCollector::new(),
            gamepad: GamepadPoller::new(slot),
        }
    }

    /// Routes a winit window event to the right collector. Unrelated events
    /// are ignored.
    pub fn process_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer.on_button(*button, *state);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.pointer.on_scroll(*delta);
            }
            WindowEvent::Focused(false) => {
                // Release events won't arrive while unfocused; drop held
                // state rather than leave keys stuck down.
                self.keyboard.clear();
                self.pointer.clear_buttons();
            }
            _ => {}
        }
    }

    /// The gamepad poller, e.g. to adjust the deadzone from config.
    pub fn gamepad_mut(&mut self) -> &mut GamepadPoller {
        &mut self.gamepad
    }
}

impl Default for WinitGilrsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSource for WinitGilrsSource {
    fn poll_keyboard(&mut self) -> KeyboardSnapshot {
        self.keyboard.snapshot()
    }

    fn poll_pointer(&mut self) -> PointerSnapshot {
        self.pointer.snapshot()
    }

    fn poll_gamepad(&mut self) -> GamepadSnapshot {
        self.gamepad.poll()
    }
}
