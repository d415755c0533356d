//! The closed set of logical game actions.
//!
//! Every [`Action`] is device-independent: game code asks "was Advance
//! triggered" and never touches a key code or gamepad button directly. The
//! enumeration is fixed at compile time, so there is no invalid-index failure
//! path — an `Action` value is always a valid table index.

/// Semantic game actions that can be bound to physical inputs.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Action {
    /// Leave the game session.
    ExitGame,
    /// Select unit group 1.
    SelectUnit1,
    /// Select unit group 2.
    SelectUnit2,
    /// Select unit group 3.
    SelectUnit3,
    /// Select unit group 4.
    SelectUnit4,
    /// Select whatever is under the cursor.
    SelectAtCursor,
    /// Order the selection to move to the cursor position.
    MoveTo,
    /// Order the selection to act on the cursor position.
    ActionAt,
    /// Order the selection to retreat.
    Retreat,
    /// Order the selection to advance.
    Advance,
    /// Cycle the status display to the next item.
    StatusNext,
    /// Cycle the status display to the previous item.
    StatusPrev,
    /// Open the chat entry field.
    Chat,
    /// Pan the view left.
    ViewLeft,
    /// Pan the view right.
    ViewRight,
    /// Pan the view up.
    ViewUp,
    /// Pan the view down.
    ViewDown,
    /// Zoom the view out.
    ZoomOut,
    /// Zoom the view in.
    ZoomIn,
}

impl Action {
    /// Number of actions in the enumeration.
    pub const COUNT: usize = 19;

    /// All actions, in declaration order. The position of each action in this
    /// array equals `action as usize`.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ExitGame,
        Self::SelectUnit1,
        Self::SelectUnit2,
        Self::SelectUnit3,
        Self::SelectUnit4,
        Self::SelectAtCursor,
        Self::MoveTo,
        Self::ActionAt,
        Self::Retreat,
        Self::Advance,
        Self::StatusNext,
        Self::StatusPrev,
        Self::Chat,
        Self::ViewLeft,
        Self::ViewRight,
        Self::ViewUp,
        Self::ViewDown,
        Self::ZoomOut,
        Self::ZoomIn,
    ];

    /// Human-readable display name, e.g. for a controls screen.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ExitGame => "Exit Game",
            Self::SelectUnit1 => "Select Unit 1",
            Self::SelectUnit2 => "Select Unit 2",
            Self::SelectUnit3 => "Select Unit 3",
            Self::SelectUnit4 => "Select Unit 4",
            Self::SelectAtCursor => "Select at Cursor",
            Self::MoveTo => "Move To",
            Self::ActionAt => "Action At",
            Self::Retreat => "Retreat",
            Self::Advance => "Advance",
            Self::StatusNext => "Next Status Item",
            Self::StatusPrev => "Previous Status Item",
            Self::Chat => "Chat",
            Self::ViewLeft => "View Left",
            Self::ViewRight => "View Right",
            Self::ViewUp => "View Up",
            Self::ViewDown => "View Down",
            Self::ZoomOut => "Zoom Out",
            Self::ZoomIn => "Zoom In",
        }
    }
}
