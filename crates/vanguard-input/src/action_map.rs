//! Static binding table from logical actions to physical controls.
//!
//! Each [`Action`] owns one [`ActionMap`]: three unordered collections of
//! keyboard keys, pointer controls, and gamepad controls. The OR of every
//! control across the three collections defines pressed/triggered for the
//! action; an empty map means the action never fires. The table is built
//! once by [`ActionMapTable::default_bindings`] and read-only thereafter.

use crate::action::Action;
use crate::control::{GamepadControl, PhysicalControl, PointerControl};
use winit::keyboard::KeyCode;

/// The physical controls bound to a single action.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    keys: Vec<KeyCode>,
    pointer: Vec<PointerControl>,
    gamepad: Vec<GamepadControl>,
}

impl ActionMap {
    /// Creates an empty map. An action with an empty map never fires.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a control to the collection for its device class.
    pub fn bind(&mut self, control: impl Into<PhysicalControl>) {
        match control.into() {
            PhysicalControl::Key(key) => self.keys.push(key),
            PhysicalControl::Pointer(c) => self.pointer.push(c),
            PhysicalControl::Gamepad(c) => self.gamepad.push(c),
        }
    }

    /// Bound keyboard keys.
    #[must_use]
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Bound pointer controls.
    #[must_use]
    pub fn pointer_controls(&self) -> &[PointerControl] {
        &self.pointer
    }

    /// Bound gamepad controls.
    #[must_use]
    pub fn gamepad_controls(&self) -> &[GamepadControl] {
        &self.gamepad
    }

    /// Whether no controls are bound at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.pointer.is_empty() && self.gamepad.is_empty()
    }
}

/// One [`ActionMap`] per [`Action`], indexed by the action's position in the
/// closed enumeration. Lookup is O(1) and infallible: an `Action` value is
/// always in range.
#[derive(Debug, Clone)]
pub struct ActionMapTable {
    maps: [ActionMap; Action::COUNT],
}

impl Default for ActionMapTable {
    fn default() -> Self {
        Self::default_bindings()
    }
}

impl ActionMapTable {
    /// Creates a table where every action has an empty map.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            maps: std::array::from_fn(|_| ActionMap::new()),
        }
    }

    /// Builds the fixed default bindings. Deterministic, no I/O, no failure
    /// path; every action receives a map.
    #[must_use]
    pub fn default_bindings() -> Self {
        let mut table = Self::empty();

        let m = table.map_mut(Action::ExitGame);
        m.bind(KeyCode::Escape);
        m.bind(GamepadControl::Back);

        table.map_mut(Action::SelectUnit1).bind(KeyCode::Digit1);
        table.map_mut(Action::SelectUnit2).bind(KeyCode::Digit2);
        table.map_mut(Action::SelectUnit3).bind(KeyCode::Digit3);
        table.map_mut(Action::SelectUnit4).bind(KeyCode::Digit4);

        let m = table.map_mut(Action::SelectAtCursor);
        m.bind(PointerControl::LeftButton);
        m.bind(GamepadControl::A);

        let m = table.map_mut(Action::MoveTo);
        m.bind(PointerControl::RightButton);
        m.bind(GamepadControl::B);

        let m = table.map_mut(Action::ActionAt);
        m.bind(PointerControl::MiddleButton);
        m.bind(GamepadControl::X);

        let m = table.map_mut(Action::Retreat);
        m.bind(KeyCode::KeyR);
        m.bind(GamepadControl::LeftShoulder);

        let m = table.map_mut(Action::Advance);
        m.bind(KeyCode::KeyF);
        m.bind(GamepadControl::RightShoulder);

        let m = table.map_mut(Action::StatusNext);
        m.bind(KeyCode::BracketRight);
        m.bind(PointerControl::ScrollDown);
        m.bind(GamepadControl::Y);

        let m = table.map_mut(Action::StatusPrev);
        m.bind(KeyCode::BracketLeft);
        m.bind(PointerControl::ScrollUp);

        let m = table.map_mut(Action::Chat);
        m.bind(KeyCode::KeyT);
        m.bind(GamepadControl::Start);

        let m = table.map_mut(Action::ViewLeft);
        m.bind(KeyCode::ArrowLeft);
        m.bind(GamepadControl::Left);

        let m = table.map_mut(Action::ViewRight);
        m.bind(KeyCode::ArrowRight);
        m.bind(GamepadControl::Right);

        let m = table.map_mut(Action::ViewUp);
        m.bind(KeyCode::ArrowUp);
        m.bind(GamepadControl::Up);

        let m = table.map_mut(Action::ViewDown);
        m.bind(KeyCode::ArrowDown);
        m.bind(GamepadControl::Down);

        let m = table.map_mut(Action::ZoomOut);
        m.bind(KeyCode::PageDown);
        m.bind(GamepadControl::LeftTrigger);

        let m = table.map_mut(Action::ZoomIn);
        m.bind(KeyCode::PageUp);
        m.bind(GamepadControl::RightTrigger);

        table
    }

    /// The map for `action`.
    #[must_use]
    pub fn map(&self, action: Action) -> &ActionMap {
        &self.maps[action as usize]
    }

    /// Mutable access, for building custom tables (split-screen contexts,
    /// test harnesses).
    pub fn map_mut(&mut self, action: Action) -> &mut ActionMap {
        &mut self.maps[action as usize]
    }
}
