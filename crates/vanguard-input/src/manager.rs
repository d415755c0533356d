//! The input façade: one value owning the binding table, the device state
//! buffer, and the device source.
//!
//! There is deliberately no process-wide instance. A manager is an
//! explicitly constructed value, so several can coexist (split-screen,
//! test harnesses), each with its own bindings and source. It is a pure
//! sampling/query layer: queries are idempotent within a frame, nothing is
//! consumed, and there is no event queue.

use crate::action::Action;
use crate::action_map::ActionMapTable;
use crate::buffer::DeviceStateBuffer;
use crate::snapshot::DeviceSource;
use tracing::debug;

/// Samples devices once per frame and answers action-level queries.
///
/// Lifecycle: construct once, call [`update`](Self::update) once per frame,
/// query any number of times between updates.
#[derive(Debug)]
pub struct InputManager<S> {
    table: ActionMapTable,
    buffer: DeviceStateBuffer,
    source: S,
}

impl<S: DeviceSource> InputManager<S> {
    /// Creates a manager with an explicit binding table.
    pub fn new(table: ActionMapTable, source: S) -> Self {
        Self {
            table,
            buffer: DeviceStateBuffer::new(),
            source,
        }
    }

    /// Creates a manager with the fixed default bindings.
    pub fn with_default_bindings(source: S) -> Self {
        debug!(actions = Action::COUNT, "built default action bindings");
        Self::new(ActionMapTable::default_bindings(), source)
    }

    /// Advances one frame: rotates previous ← current and polls the source
    /// for fresh snapshots. Call exactly once per logical frame.
    pub fn update(&mut self) {
        self.buffer.update(&mut self.source);
    }

    /// Whether ANY control bound to `action` reads active this frame.
    ///
    /// Collections are checked keyboard, then pointer, then gamepad, with a
    /// short-circuit on the first hit; the order does not affect the result
    /// of the OR.
    #[must_use]
    pub fn is_action_pressed(&self, action: Action) -> bool {
        let map = self.table.map(action);
        map.keys().iter().any(|&k| self.buffer.is_key_pressed(k))
            || map
                .pointer_controls()
                .iter()
                .any(|&c| self.buffer.is_pointer_pressed(c))
            || map
                .gamepad_controls()
                .iter()
                .any(|&c| self.buffer.is_gamepad_pressed(c))
    }

    /// Whether ANY control bound to `action` fired its rising edge this
    /// frame.
    #[must_use]
    pub fn is_action_triggered(&self, action: Action) -> bool {
        let map = self.table.map(action);
        map.keys().iter().any(|&k| self.buffer.is_key_triggered(k))
            || map
                .pointer_controls()
                .iter()
                .any(|&c| self.buffer.is_pointer_triggered(c))
            || map
                .gamepad_controls()
                .iter()
                .any(|&c| self.buffer.is_gamepad_triggered(c))
    }

    /// The display name for `action`.
    #[must_use]
    pub fn action_name(&self, action: Action) -> &'static str {
        action.name()
    }

    /// The binding table.
    #[must_use]
    pub fn bindings(&self) -> &ActionMapTable {
        &self.table
    }

    /// Read-only access to current/previous raw snapshots and the raw
    /// predicates, for queries not expressed as actions.
    #[must_use]
    pub fn buffer(&self) -> &DeviceStateBuffer {
        &self.buffer
    }

    /// The device source, e.g. to feed it platform events between frames.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_map::ActionMap;
    use crate::control::GamepadButton;
    use crate::source::ManualSource;
    use winit::keyboard::KeyCode;

    fn manager() -> InputManager<ManualSource> {
        InputManager::with_default_bindings(ManualSource::new())
    }

    #[test]
    fn test_or_composition_keyboard_or_gamepad() {
        // Retreat is bound to KeyR and LeftShoulder.
        let mut mgr = manager();
        mgr.update();
        assert!(!mgr.is_action_pressed(Action::Retreat));

        // Keyboard only.
        mgr.source_mut().press_key(KeyCode::KeyR);
        mgr.update();
        assert!(mgr.is_action_pressed(Action::Retreat));

        // Both.
        mgr.source_mut().connect_gamepad();
        mgr.source_mut().press_button(GamepadButton::LeftShoulder);
        mgr.update();
        assert!(mgr.is_action_pressed(Action::Retreat));

        // Gamepad only.
        mgr.source_mut().release_key(KeyCode::KeyR);
        mgr.update();
        assert!(mgr.is_action_pressed(Action::Retreat));

        // Neither.
        mgr.source_mut().release_button(GamepadButton::LeftShoulder);
        mgr.update();
        assert!(!mgr.is_action_pressed(Action::Retreat));
    }

    #[test]
    fn test_key_press_scenario_across_three_frames() {
        let mut mgr = manager();

        // Frame 1: nothing held.
        mgr.update();
        assert!(!mgr.is_action_pressed(Action::Advance));

        // Frame 2: key goes down.
        mgr.source_mut().press_key(KeyCode::KeyF);
        mgr.update();
        assert!(mgr.is_action_pressed(Action::Advance));
        assert!(mgr.is_action_triggered(Action::Advance));

        // Frame 3: key still down.
        mgr.update();
        assert!(mgr.is_action_pressed(Action::Advance));
        assert!(!mgr.is_action_triggered(Action::Advance));
    }

    #[test]
    fn test_queries_are_idempotent_within_a_frame() {
        let mut mgr = manager();
        mgr.source_mut().press_key(KeyCode::Digit2);
        mgr.update();

        let first = mgr.is_action_pressed(Action::SelectUnit2);
        let second = mgr.is_action_pressed(Action::SelectUnit2);
        assert_eq!(first, second);
        assert!(first);

        let t1 = mgr.is_action_triggered(Action::SelectUnit2);
        let t2 = mgr.is_action_triggered(Action::SelectUnit2);
        assert_eq!(t1, t2);
        assert!(t1);
    }

    #[test]
    fn test_disconnected_pad_contributes_nothing_to_actions() {
        let mut mgr = manager();
        // Held A on a detached pad would otherwise press SelectAtCursor.
        mgr.source_mut().gamepad_mut().press(GamepadButton::A);
        mgr.update();
        assert!(!mgr.is_action_pressed(Action::SelectAtCursor));

        // Keyboard and pointer keep working alongside the dead pad.
        mgr.source_mut().pointer_mut().left = true;
        mgr.update();
        assert!(mgr.is_action_pressed(Action::SelectAtCursor));
    }

    #[test]
    fn test_scroll_bound_action_fires_on_wheel_delta() {
        let mut mgr = manager();
        mgr.source_mut().scroll(100.0);
        mgr.update();
        mgr.source_mut().scroll(-20.0);
        mgr.update();

        assert!(mgr.is_action_triggered(Action::StatusNext));
        assert!(!mgr.is_action_triggered(Action::StatusPrev));
    }

    #[test]
    fn test_view_actions_follow_stick_and_pad() {
        let mut mgr = manager();
        mgr.source_mut().connect_gamepad();
        mgr.update();

        mgr.source_mut().set_left_stick(glam::Vec2::new(0.0, 0.8));
        mgr.update();
        assert!(mgr.is_action_triggered(Action::ViewUp));
        assert!(!mgr.is_action_triggered(Action::ViewDown));

        mgr.source_mut().set_left_stick(glam::Vec2::new(-0.9, 0.0));
        mgr.update();
        assert!(mgr.is_action_pressed(Action::ViewLeft));
        assert!(!mgr.is_action_pressed(Action::ViewUp));
    }

    #[test]
    fn test_empty_map_never_fires() {
        let mut table = ActionMapTable::empty();
        *table.map_mut(Action::Chat) = ActionMap::new();
        let mut mgr = InputManager::new(table, ManualSource::new());

        // Press everything plausible.
        mgr.source_mut().press_key(KeyCode::KeyT);
        mgr.source_mut().connect_gamepad();
        mgr.source_mut().press_button(GamepadButton::Start);
        mgr.update();

        assert!(!mgr.is_action_pressed(Action::Chat));
        assert!(!mgr.is_action_triggered(Action::Chat));
    }

    #[test]
    fn test_action_name_passthrough() {
        let mgr = manager();
        assert_eq!(mgr.action_name(Action::ExitGame), "Exit Game");
    }

    #[test]
    fn test_raw_snapshot_access_for_unmapped_queries() {
        let mut mgr = manager();
        mgr.source_mut().pointer_mut().position = glam::Vec2::new(10.0, 0.0);
        mgr.update();
        mgr.source_mut().pointer_mut().position = glam::Vec2::new(25.0, 5.0);
        mgr.update();

        // Free camera pan style: raw pointer delta between frames.
        let delta = mgr.buffer().pointer().position - mgr.buffer().pointer_previous().position;
        assert_eq!(delta, glam::Vec2::new(15.0, 5.0));
    }
}
