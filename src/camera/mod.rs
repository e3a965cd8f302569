//! Camera system for 3D scene viewing.
//!
//! A single [`Camera`] with four interaction modes, a command vocabulary for
//! input layers, and frustum extraction for culling.

/// Command vocabulary dispatched by [`Camera::execute`].
pub mod command;
/// Camera state, per-mode input handling and matrices.
pub mod controller;
/// View frustum extraction and intersection tests.
pub mod frustum;
mod mode;

pub use command::CameraCommand;
pub use controller::Camera;
pub use frustum::{Frustum, Plane};
pub use mode::{CameraMode, CameraMovement};
