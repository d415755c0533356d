//! Physical input controls and their pressed / rising-edge predicates.
//!
//! [`PhysicalControl`] is a tagged union over the three device classes. Each
//! variant kind knows how to evaluate itself against a pair of snapshots
//! (previous and current frame), so callers never branch on device kind
//! themselves.
//!
//! *Pressed* means the control reads active in the current snapshot.
//! *Triggered* means it transitioned from inactive to active between the
//! previous and current snapshot — the rising edge only; falling edges are
//! not exposed.

use crate::snapshot::{GamepadSnapshot, PointerSnapshot};
use winit::keyboard::KeyCode;

/// Activation threshold for analog sticks and triggers, on the normalized
/// `[-1, 1]` / `[0, 1]` scale. The test is instantaneous (no hysteresis), so
/// an axis hovering at the boundary can fire on consecutive frames from
/// sampling noise.
pub const ANALOG_THRESHOLD: f32 = 0.5;

fn axis_active(value: f32) -> bool {
    value >= ANALOG_THRESHOLD
}

fn axis_rising(prev: f32, curr: f32) -> bool {
    axis_active(curr) && !axis_active(prev)
}

/// A pointer control: a button, or a scroll-wheel edge.
///
/// The scroll variants are edge-only controls. They have no persistent held
/// state; "pressed" and "triggered" coincide and both mean "the wheel moved
/// in that direction since the previous frame".
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum PointerControl {
    /// Left pointer button.
    LeftButton,
    /// Right pointer button.
    RightButton,
    /// Middle pointer button.
    MiddleButton,
    /// Wheel scrolled up since the previous frame.
    ScrollUp,
    /// Wheel scrolled down since the previous frame.
    ScrollDown,
}

impl PointerControl {
    /// Whether the control reads active in `curr`.
    #[must_use]
    pub fn is_pressed(self, prev: &PointerSnapshot, curr: &PointerSnapshot) -> bool {
        match self {
            Self::LeftButton => curr.left,
            Self::RightButton => curr.right,
            Self::MiddleButton => curr.middle,
            Self::ScrollUp => curr.wheel > prev.wheel,
            Self::ScrollDown => curr.wheel < prev.wheel,
        }
    }

    /// Whether the control transitioned to active between `prev` and `curr`.
    #[must_use]
    pub fn is_triggered(self, prev: &PointerSnapshot, curr: &PointerSnapshot) -> bool {
        match self {
            Self::LeftButton => curr.left && !prev.left,
            Self::RightButton => curr.right && !prev.right,
            Self::MiddleButton => curr.middle && !prev.middle,
            Self::ScrollUp | Self::ScrollDown => self.is_pressed(prev, curr),
        }
    }
}

/// A digital gamepad button as reported by the pad itself.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum GamepadButton {
    /// Start button.
    Start,
    /// Back / Select button.
    Back,
    /// Bottom face button (A / Cross).
    A,
    /// Right face button (B / Circle).
    B,
    /// Left face button (X / Square).
    X,
    /// Top face button (Y / Triangle).
    Y,
    /// Left bumper.
    LeftShoulder,
    /// Right bumper.
    RightShoulder,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// A bindable gamepad control.
///
/// `Up`/`Down`/`Left`/`Right` are *virtual*: each is satisfied by EITHER the
/// D-pad direction OR the left analog stick crossing [`ANALOG_THRESHOLD`]
/// (sign-inverted for the negative directions). `LeftTrigger`/`RightTrigger`
/// are threshold tests on the analog trigger axes. The rest are plain
/// digital buttons.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum GamepadControl {
    Start,
    Back,
    A,
    B,
    X,
    Y,
    /// D-pad up or left stick pushed up.
    Up,
    /// D-pad down or left stick pushed down.
    Down,
    /// D-pad left or left stick pushed left.
    Left,
    /// D-pad right or left stick pushed right.
    Right,
    LeftShoulder,
    RightShoulder,
    /// Left analog trigger past the threshold.
    LeftTrigger,
    /// Right analog trigger past the threshold.
    RightTrigger,
}

impl GamepadControl {
    /// The plain digital button backing this control, if it is one.
    fn button(self) -> Option<GamepadButton> {
        match self {
            Self::Start => Some(GamepadButton::Start),
            Self::Back => Some(GamepadButton::Back),
            Self::A => Some(GamepadButton::A),
            Self::B => Some(GamepadButton::B),
            Self::X => Some(GamepadButton::X),
            Self::Y => Some(GamepadButton::Y),
            Self::LeftShoulder => Some(GamepadButton::LeftShoulder),
            Self::RightShoulder => Some(GamepadButton::RightShoulder),
            _ => None,
        }
    }

    /// For the virtual directions: the D-pad button and the signed left-stick
    /// axis reading that satisfy the direction.
    fn direction(self, pad: &GamepadSnapshot) -> Option<(GamepadButton, f32)> {
        match self {
            Self::Up => Some((GamepadButton::DPadUp, pad.left_stick.y)),
            Self::Down => Some((GamepadButton::DPadDown, -pad.left_stick.y)),
            Self::Left => Some((GamepadButton::DPadLeft, -pad.left_stick.x)),
            Self::Right => Some((GamepadButton::DPadRight, pad.left_stick.x)),
            _ => None,
        }
    }

    /// Whether the control reads active in `curr`.
    ///
    /// Always `false` while the current snapshot reports no pad attached.
    #[must_use]
    pub fn is_pressed(self, curr: &GamepadSnapshot) -> bool {
        if !curr.connected {
            return false;
        }
        if let Some(button) = self.button() {
            return curr.is_button_down(button);
        }
        if let Some((pad_button, axis)) = self.direction(curr) {
            return curr.is_button_down(pad_button) || axis_active(axis);
        }
        match self {
            Self::LeftTrigger => axis_active(curr.left_trigger),
            Self::RightTrigger => axis_active(curr.right_trigger),
            _ => unreachable!("all non-axis controls handled above"),
        }
    }

    /// Whether the control transitioned to active between `prev` and `curr`.
    ///
    /// Always `false` while the current snapshot reports no pad attached,
    /// even if a previous connected-state snapshot would otherwise satisfy
    /// the edge. For the virtual directions this is the OR of the two edges:
    /// the D-pad press edge and the stick threshold crossing.
    #[must_use]
    pub fn is_triggered(self, prev: &GamepadSnapshot, curr: &GamepadSnapshot) -> bool {
        if !curr.connected {
            return false;
        }
        if let Some(button) = self.button() {
            return curr.is_button_down(button) && !prev.is_button_down(button);
        }
        if let (Some((button, curr_axis)), Some((_, prev_axis))) =
            (self.direction(curr), self.direction(prev))
        {
            let pad_edge = curr.is_button_down(button) && !prev.is_button_down(button);
            return pad_edge || axis_rising(prev_axis, curr_axis);
        }
        match self {
            Self::LeftTrigger => axis_rising(prev.left_trigger, curr.left_trigger),
            Self::RightTrigger => axis_rising(prev.right_trigger, curr.right_trigger),
            _ => unreachable!("all non-axis controls handled above"),
        }
    }
}

/// A physical input source on any device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicalControl {
    /// A keyboard key (physical scan code).
    Key(KeyCode),
    /// A pointer button or scroll edge.
    Pointer(PointerControl),
    /// A gamepad button, direction, or trigger.
    Gamepad(GamepadControl),
}

impl From<KeyCode> for PhysicalControl {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

impl From<PointerControl> for PhysicalControl {
    fn from(control: PointerControl) -> Self {
        Self::Pointer(control)
    }
}

impl From<GamepadControl> for PhysicalControl {
    fn from(control: GamepadControl) -> Self {
        Self::Gamepad(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{GamepadSnapshot, PointerSnapshot};

    fn pointer_with_wheel(wheel: f32) -> PointerSnapshot {
        PointerSnapshot {
            wheel,
            ..PointerSnapshot::new()
        }
    }

    #[test]
    fn test_pointer_button_edge() {
        let up = PointerSnapshot::new();
        let down = PointerSnapshot {
            left: true,
            ..PointerSnapshot::new()
        };

        assert!(PointerControl::LeftButton.is_pressed(&up, &down));
        assert!(PointerControl::LeftButton.is_triggered(&up, &down));
        // Held across both frames: pressed but no longer triggered.
        assert!(PointerControl::LeftButton.is_pressed(&down, &down));
        assert!(!PointerControl::LeftButton.is_triggered(&down, &down));
    }

    #[test]
    fn test_scroll_direction_from_wheel_delta() {
        let prev = pointer_with_wheel(100.0);
        let curr = pointer_with_wheel(80.0);

        assert!(PointerControl::ScrollDown.is_triggered(&prev, &curr));
        assert!(!PointerControl::ScrollUp.is_triggered(&prev, &curr));

        // Unchanged wheel fires neither direction.
        assert!(!PointerControl::ScrollDown.is_triggered(&curr, &curr));
        assert!(!PointerControl::ScrollUp.is_triggered(&curr, &curr));
    }

    #[test]
    fn test_gamepad_button_edge() {
        let rest = GamepadSnapshot::connected();
        let mut held = GamepadSnapshot::connected();
        held.press(GamepadButton::A);

        assert!(GamepadControl::A.is_pressed(&held));
        assert!(GamepadControl::A.is_triggered(&rest, &held));
        assert!(!GamepadControl::A.is_triggered(&held, &held));
    }

    #[test]
    fn test_trigger_axis_threshold_crossing() {
        let mut prev = GamepadSnapshot::connected();
        prev.left_trigger = 0.3;
        let mut curr = GamepadSnapshot::connected();
        curr.left_trigger = 0.7;

        assert!(GamepadControl::LeftTrigger.is_triggered(&prev, &curr));
        assert!(GamepadControl::LeftTrigger.is_pressed(&curr));
        // Already past the threshold: pressed, not triggered.
        assert!(!GamepadControl::LeftTrigger.is_triggered(&curr, &curr));
    }

    #[test]
    fn test_directional_or_of_pad_and_stick() {
        let rest = GamepadSnapshot::connected();

        let mut pad_only = GamepadSnapshot::connected();
        pad_only.press(GamepadButton::DPadUp);

        let mut stick_only = GamepadSnapshot::connected();
        stick_only.left_stick.y = 0.8;

        let mut both = GamepadSnapshot::connected();
        both.press(GamepadButton::DPadUp);
        both.left_stick.y = 0.8;

        assert!(!GamepadControl::Up.is_triggered(&rest, &rest));
        assert!(GamepadControl::Up.is_triggered(&rest, &pad_only));
        assert!(GamepadControl::Up.is_triggered(&rest, &stick_only));
        assert!(GamepadControl::Up.is_triggered(&rest, &both));
    }

    #[test]
    fn test_negative_direction_inverts_axis() {
        let rest = GamepadSnapshot::connected();
        let mut stick_down = GamepadSnapshot::connected();
        stick_down.left_stick.y = -0.8;

        assert!(GamepadControl::Down.is_pressed(&stick_down));
        assert!(GamepadControl::Down.is_triggered(&rest, &stick_down));
        assert!(!GamepadControl::Up.is_pressed(&stick_down));

        let mut stick_left = GamepadSnapshot::connected();
        stick_left.left_stick.x = -0.6;
        assert!(GamepadControl::Left.is_pressed(&stick_left));
        assert!(!GamepadControl::Right.is_pressed(&stick_left));
    }

    #[test]
    fn test_stick_below_threshold_inactive() {
        let rest = GamepadSnapshot::connected();
        let mut nudged = GamepadSnapshot::connected();
        nudged.left_stick.y = 0.49;
        assert!(!GamepadControl::Up.is_pressed(&nudged));

        nudged.left_stick.y = 0.5;
        assert!(GamepadControl::Up.is_pressed(&nudged));
    }

    #[test]
    fn test_disconnected_pad_reads_nothing() {
        let mut prev = GamepadSnapshot::connected();
        prev.left_trigger = 0.0;

        // Everything that would satisfy pressed/triggered, but disconnected.
        let mut curr = GamepadSnapshot::new();
        curr.press(GamepadButton::A);
        curr.press(GamepadButton::DPadUp);
        curr.left_stick.y = 1.0;
        curr.left_trigger = 1.0;

        assert!(!GamepadControl::A.is_pressed(&curr));
        assert!(!GamepadControl::A.is_triggered(&prev, &curr));
        assert!(!GamepadControl::Up.is_pressed(&curr));
        assert!(!GamepadControl::Up.is_triggered(&prev, &curr));
        assert!(!GamepadControl::LeftTrigger.is_pressed(&curr));
        assert!(!GamepadControl::LeftTrigger.is_triggered(&prev, &curr));
    }

    #[test]
    fn test_physical_control_from_impls() {
        let key: PhysicalControl = KeyCode::Escape.into();
        let pointer: PhysicalControl = PointerControl::LeftButton.into();
        let pad: PhysicalControl = GamepadControl::Start.into();

        assert_eq!(key, PhysicalControl::Key(KeyCode::Escape));
        assert_eq!(pointer, PhysicalControl::Pointer(PointerControl::LeftButton));
        assert_eq!(pad, PhysicalControl::Gamepad(GamepadControl::Start));
    }
}
