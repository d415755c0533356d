//! Winit pointer event collector.
//!
//! Tracks cursor position, button state, and a cumulative wheel total. The
//! wheel never resets: the core recovers scroll direction by comparing the
//! totals of two consecutive snapshots.

use glam::Vec2;
use vanguard_input::PointerSnapshot;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixel-delta scrolls are normalised to lines at this rate.
const PIXELS_PER_LINE: f64 = 40.0;

/// Tracks pointer state, fed by winit events.
#[derive(Debug, Clone, Default)]
pub struct PointerCollector {
    position: Vec2,
    left: bool,
    right: bool,
    middle: bool,
    wheel: f32,
}

impl PointerCollector {
    /// Creates a collector with the cursor at the origin and nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a `CursorMoved` event.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x as f32, y as f32);
    }

    /// Processes a `MouseInput` event. Buttons beyond left/right/middle are
    /// ignored.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        let down = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.left = down,
            MouseButton::Right => self.right = down,
            MouseButton::Middle => self.middle = down,
            _ => {}
        }
    }

    /// Processes a `MouseWheel` event, accumulating into the running total
    /// (positive = up).
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_x, y) => {
                self.wheel += y;
            }
            MouseScrollDelta::PixelDelta(pos) => {
                self.wheel += (pos.y / PIXELS_PER_LINE) as f32;
            }
        }
    }

    /// Drops held buttons, e.g. on focus loss.
    pub fn clear_buttons(&mut self) {
        self.left = false;
        self.right = false;
        self.middle = false;
    }

    /// Captures the current state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            position: self.position,
            left: self.left,
            right: self.right,
            middle: self.middle,
            wheel: self.wheel,
        }
    }
}
