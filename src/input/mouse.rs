use glam::Vec2;

use super::event::MouseButton;

/// Tracks the cursor and which buttons are held.
///
/// The first sample after construction or [`forget`](Self::forget) only
/// records the position, so entering the window does not jerk the view.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    last: Option<Vec2>,
    left: bool,
    right: bool,
    middle: bool,
}

impl MouseState {
    /// Record a new cursor position and return the screen-space delta
    /// (x right, y down) since the previous sample.
    pub fn moved_to(&mut self, x: f32, y: f32) -> Vec2 {
        let position = Vec2::new(x, y);
        let delta = self.last.map_or(Vec2::ZERO, |last| position - last);
        self.last = Some(position);
        delta
    }

    /// Update a button's held state.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle => self.middle = pressed,
        }
    }

    /// Whether a button is held.
    #[must_use]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Drop the cursor sample and release all buttons.
    pub fn forget(&mut self) {
        *self = Self::default();
    }
}
