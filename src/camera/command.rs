//! The camera's interactive vocabulary.
//!
//! Every camera operation, whether triggered by a key press, mouse gesture,
//! UI control or script, is a [`CameraCommand`] passed to
//! [`Camera::execute`].

use glam::Vec2;

use super::controller::Camera;
use super::mode::{CameraMode, CameraMovement};

/// A discrete or parameterized camera operation.
///
/// ```ignore
/// camera.execute(CameraCommand::CycleMode);
/// camera.execute(CameraCommand::Scroll { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate for one frame.
    Move {
        /// Direction of travel.
        direction: CameraMovement,
        /// Frame time in seconds.
        delta_time: f32,
    },

    /// Rotate by a mouse delta (x right, y up), pitch-constrained.
    Look {
        /// Horizontal and vertical look delta.
        delta: Vec2,
    },

    /// Zoom in (positive) or out (negative).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },

    /// Switch to a specific mode.
    SetMode(CameraMode),

    /// Advance to the next mode.
    CycleMode,

    /// Toggle orbit auto-rotation.
    ToggleAutoRotate,

    /// Return to the home pose.
    Reset,
}

impl Camera {
    /// Apply a command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Move {
                direction,
                delta_time,
            } => self.process_keyboard(direction, delta_time),
            CameraCommand::Look { delta } => {
                self.process_mouse_movement(delta.x, delta.y);
            }
            CameraCommand::Scroll { delta } => self.process_mouse_scroll(delta),
            CameraCommand::SetMode(mode) => self.set_mode(mode),
            CameraCommand::CycleMode => self.cycle_mode(),
            CameraCommand::ToggleAutoRotate => self.toggle_auto_rotate(),
            CameraCommand::Reset => self.reset(),
        }
    }
}
