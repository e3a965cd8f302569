/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(&InputEvent::CursorMoved {
///     x: 100.0,
///     y: 200.0,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed (or auto-repeated).
    KeyPressed {
        /// Key string in `winit::keyboard::KeyCode` debug format.
        key: String,
    },
    /// Physical key released.
    KeyReleased {
        /// Key string in `winit::keyboard::KeyCode` debug format.
        key: String,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// The window lost keyboard/mouse focus.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
