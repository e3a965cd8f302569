use serde::{Deserialize, Serialize};

use crate::camera::{CameraCommand, CameraMode, CameraMovement};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// cycle_camera_mode = "Tab"
/// move_forward = "KeyW"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Held: move along the view direction.
    MoveForward,
    /// Held: move against the view direction.
    MoveBackward,
    /// Held: strafe left.
    MoveLeft,
    /// Held: strafe right.
    MoveRight,
    /// Held: rise.
    MoveUp,
    /// Held: sink.
    MoveDown,
    /// Advance to the next camera mode.
    CycleCameraMode,
    /// Toggle orbit auto-rotation.
    ToggleAutoRotate,
    /// Return the camera to its home pose.
    ResetCamera,
    /// Switch to first-person mode.
    FirstPerson,
    /// Switch to third-person mode.
    ThirdPerson,
    /// Switch to free-flight mode.
    FreeFlight,
    /// Switch to orbit mode.
    Orbit,
}

impl KeyAction {
    /// Continuous actions in the order their moves are emitted each frame.
    pub const MOVEMENT: [Self; 6] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
    ];

    /// Movement direction for continuous (held) actions.
    #[must_use]
    pub const fn movement(self) -> Option<CameraMovement> {
        match self {
            Self::MoveForward => Some(CameraMovement::Forward),
            Self::MoveBackward => Some(CameraMovement::Backward),
            Self::MoveLeft => Some(CameraMovement::Left),
            Self::MoveRight => Some(CameraMovement::Right),
            Self::MoveUp => Some(CameraMovement::Up),
            Self::MoveDown => Some(CameraMovement::Down),
            _ => None,
        }
    }

    /// Command fired once on press for discrete actions.
    #[must_use]
    pub const fn command(self) -> Option<CameraCommand> {
        match self {
            Self::CycleCameraMode => Some(CameraCommand::CycleMode),
            Self::ToggleAutoRotate => Some(CameraCommand::ToggleAutoRotate),
            Self::ResetCamera => Some(CameraCommand::Reset),
            Self::FirstPerson => {
                Some(CameraCommand::SetMode(CameraMode::FirstPerson))
            }
            Self::ThirdPerson => {
                Some(CameraCommand::SetMode(CameraMode::ThirdPerson))
            }
            Self::FreeFlight => {
                Some(CameraCommand::SetMode(CameraMode::FreeFlight))
            }
            Self::Orbit => Some(CameraCommand::SetMode(CameraMode::Orbit)),
            _ => None,
        }
    }
}
