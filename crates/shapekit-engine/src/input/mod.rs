//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events into `InputEvent`s for the runtime.

mod bindings;
mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use bindings::{Direction, KeyBindings, MoveCommand, DEFAULT_STEP};
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
