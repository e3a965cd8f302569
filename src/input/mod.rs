//! Input handling: event types, key actions, and the input processor
//! that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Cursor and mouse button tracking.
pub mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use mouse::MouseState;
pub use processor::InputProcessor;
