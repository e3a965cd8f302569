use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera interaction mode.
///
/// First-person and free-flight steer with yaw/pitch ("Euler-angle"
/// modes); third-person and orbit derive the position from a target point
/// and spherical coordinates ("orbit-style" modes).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Walk along the view direction, vertical moves along world up.
    #[default]
    FirstPerson,
    /// Follow a target point from behind.
    ThirdPerson,
    /// Full six degrees of freedom along the local basis.
    FreeFlight,
    /// Circle a target point, optionally auto-rotating.
    Orbit,
}

impl CameraMode {
    /// All modes in cycle order.
    pub const ALL: [Self; 4] = [
        Self::FirstPerson,
        Self::ThirdPerson,
        Self::FreeFlight,
        Self::Orbit,
    ];

    /// Stable human-readable name for UI display.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FirstPerson => "First Person",
            Self::ThirdPerson => "Third Person",
            Self::FreeFlight => "Free Flight",
            Self::Orbit => "Orbit",
        }
    }

    /// Next mode in cycle order, wrapping Orbit back to FirstPerson.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::FirstPerson => Self::ThirdPerson,
            Self::ThirdPerson => Self::FreeFlight,
            Self::FreeFlight => Self::Orbit,
            Self::Orbit => Self::FirstPerson,
        }
    }

    /// Whether the position is derived from target + spherical coordinates.
    #[must_use]
    pub const fn is_orbit_style(self) -> bool {
        matches!(self, Self::ThirdPerson | Self::Orbit)
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Direction of a keyboard-driven translation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMovement {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
    /// Along world up (local up in free flight).
    Up,
    /// Against world up (local up in free flight).
    Down,
}
