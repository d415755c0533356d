//! Input abstraction: keyboard, pointer, and gamepad sampled once per frame
//! and exposed as logical game actions through a static binding table.

pub mod action;
pub mod action_map;
pub mod buffer;
pub mod control;
pub mod manager;
pub mod snapshot;
pub mod source;

pub use action::Action;
pub use action_map::{ActionMap, ActionMapTable};
pub use buffer::{DeviceStateBuffer, Frames};
pub use control::{GamepadButton, GamepadControl, PhysicalControl, PointerControl};
pub use manager::InputManager;
pub use snapshot::{DeviceSource, GamepadSnapshot, KeyboardSnapshot, PointerSnapshot};
pub use source::ManualSource;
