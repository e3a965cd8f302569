use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Mode the camera starts in.
    #[schemars(title = "Initial Mode")]
    pub mode: CameraMode,
    /// Vertical field of view in degrees (the camera's zoom).
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Translation speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Degrees of rotation per unit of mouse movement.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Distance from the target in orbit-style modes.
    #[schemars(title = "Orbit Distance", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub orbit_distance: f32,
    /// Whether orbit mode starts auto-rotating.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotation speed in degrees per second.
    #[schemars(title = "Auto Rotate Speed", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub auto_rotate_speed: f32,
    /// Flip vertical mouse look.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
    /// Only look around while the right mouse button is held.
    #[schemars(skip)]
    pub look_requires_button: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mode: CameraMode::FirstPerson,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            orbit_distance: 5.0,
            auto_rotate: false,
            auto_rotate_speed: 30.0,
            invert_y: false,
            look_requires_button: false,
        }
    }
}
