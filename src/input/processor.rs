//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (held keys, cursor
//! tracking, mouse buttons) and the key-binding map. It is the only thing
//! that sits between raw window events and
//! [`Camera::execute`](crate::camera::Camera::execute).

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::MouseState;
use crate::camera::CameraCommand;
use crate::options::{CameraOptions, KeybindingOptions, Options};

/// Converts raw window events into [`CameraCommand`]s.
///
/// Discrete actions (mode switches, toggles) and mouse gestures produce a
/// command straight from [`handle_event`](Self::handle_event). Movement
/// keys are held state; [`frame_commands`](Self::frame_commands) turns them
/// into per-frame moves.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     camera.execute(cmd);
/// }
///
/// // Once per frame:
/// for cmd in input_processor.frame_commands(dt) {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Cursor and button tracking.
    mouse: MouseState,
    /// Movement actions whose key is currently down.
    held: FxHashSet<KeyAction>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Flip vertical look.
    invert_y: bool,
    /// Only look while the right button is held.
    look_requires_button: bool,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            mouse: MouseState::default(),
            held: FxHashSet::default(),
            key_bindings,
            invert_y: false,
            look_requires_button: false,
        }
    }

    /// Create a processor from the key-binding and camera sections.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let mut processor =
            Self::with_key_bindings(options.keybindings.clone());
        processor.apply_camera_options(&options.camera);
        processor
    }

    /// Pick up look settings from camera options.
    pub fn apply_camera_options(&mut self, camera: &CameraOptions) {
        self.invert_y = camera.invert_y;
        self.look_requires_button = camera.look_requires_button;
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Whether a movement action's key is currently held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::KeyPressed { key } => self.handle_key_press(key),
            InputEvent::KeyReleased { key } => {
                if let Some(action) = self.key_bindings.lookup(key) {
                    let _ = self.held.remove(&action);
                }
                None
            }
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(*x, *y)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.mouse.set_button(*button, *pressed);
                None
            }
            InputEvent::Scroll { delta } => {
                Some(CameraCommand::Scroll { delta: *delta })
            }
            InputEvent::FocusLost => {
                self.held.clear();
                self.mouse.forget();
                None
            }
        }
    }

    /// One `Move` per held movement key, scaled by the frame time.
    #[must_use]
    pub fn frame_commands(&self, delta_time: f32) -> Vec<CameraCommand> {
        KeyAction::MOVEMENT
            .into_iter()
            .filter(|action| self.held.contains(action))
            .filter_map(KeyAction::movement)
            .map(|direction| CameraCommand::Move {
                direction,
                delta_time,
            })
            .collect()
    }

    /// Key press: movement keys become held, discrete keys fire once.
    fn handle_key_press(&mut self, key: &str) -> Option<CameraCommand> {
        let Some(action) = self.key_bindings.lookup(key) else {
            log::trace!("unbound key {key}");
            return None;
        };
        if action.movement().is_some() {
            let _ = self.held.insert(action);
            return None;
        }
        action.command()
    }

    /// Cursor moved: compute delta, produce a look command when allowed.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
    ) -> Option<CameraCommand> {
        let delta = self.mouse.moved_to(x, y);
        if self.look_requires_button
            && !self.mouse.is_pressed(MouseButton::Right)
        {
            return None;
        }
        if delta == Vec2::ZERO {
            return None;
        }
        // Screen y grows downwards; camera pitch grows upwards
        let dy = if self.invert_y { delta.y } else { -delta.y };
        Some(CameraCommand::Look {
            delta: Vec2::new(delta.x, dy),
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, CameraMode, CameraMovement};

    fn press(key: &str) -> InputEvent {
        InputEvent::KeyPressed { key: key.to_owned() }
    }

    fn release(key: &str) -> InputEvent {
        InputEvent::KeyReleased { key: key.to_owned() }
    }

    #[test]
    fn held_w_moves_forward_scaled_by_dt() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(&press("KeyW")), None);
        assert_eq!(
            input.frame_commands(0.016),
            vec![CameraCommand::Move {
                direction: CameraMovement::Forward,
                delta_time: 0.016,
            }]
        );
        let _ = input.handle_event(&release("KeyW"));
        assert!(input.frame_commands(0.016).is_empty());
    }

    #[test]
    fn moves_are_emitted_in_fixed_order() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&press("Space"));
        let _ = input.handle_event(&press("KeyA"));
        let _ = input.handle_event(&press("KeyW"));
        let directions: Vec<_> = input
            .frame_commands(1.0)
            .into_iter()
            .map(|cmd| match cmd {
                CameraCommand::Move { direction, .. } => Some(direction),
                _ => None,
            })
            .collect();
        assert_eq!(
            directions,
            vec![
                Some(CameraMovement::Forward),
                Some(CameraMovement::Left),
                Some(CameraMovement::Up),
            ]
        );
    }

    #[test]
    fn discrete_keys_fire_commands() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(&press("Tab")),
            Some(CameraCommand::CycleMode)
        );
        assert_eq!(
            input.handle_event(&press("Digit4")),
            Some(CameraCommand::SetMode(CameraMode::Orbit))
        );
        assert_eq!(
            input.handle_event(&press("KeyR")),
            Some(CameraCommand::ToggleAutoRotate)
        );
        assert_eq!(input.handle_event(&press("KeyZ")), None);
    }

    #[test]
    fn first_cursor_sample_does_not_look() {
        let mut input = InputProcessor::new();
        let first = InputEvent::CursorMoved { x: 640.0, y: 360.0 };
        assert_eq!(input.handle_event(&first), None);
        let second = InputEvent::CursorMoved { x: 650.0, y: 350.0 };
        assert_eq!(
            input.handle_event(&second),
            Some(CameraCommand::Look {
                delta: Vec2::new(10.0, 10.0)
            })
        );
    }

    #[test]
    fn invert_y_and_button_gating() {
        let mut options = Options::default();
        options.camera.invert_y = true;
        options.camera.look_requires_button = true;
        let mut input = InputProcessor::from_options(&options);

        let _ =
            input.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let moved = InputEvent::CursorMoved { x: 0.0, y: 5.0 };
        assert_eq!(input.handle_event(&moved), None);

        let _ = input.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        let moved = InputEvent::CursorMoved { x: 0.0, y: 10.0 };
        assert_eq!(
            input.handle_event(&moved),
            Some(CameraCommand::Look {
                delta: Vec2::new(0.0, 5.0)
            })
        );
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(&press("KeyW"));
        let _ =
            input.handle_event(&InputEvent::CursorMoved { x: 1.0, y: 1.0 });
        let _ = input.handle_event(&InputEvent::FocusLost);
        assert!(!input.is_held(KeyAction::MoveForward));
        assert!(input.frame_commands(1.0).is_empty());
        let back = InputEvent::CursorMoved { x: 500.0, y: 500.0 };
        assert_eq!(input.handle_event(&back), None);
    }

    #[test]
    fn scroll_passes_through() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(&InputEvent::Scroll { delta: -2.0 }),
            Some(CameraCommand::Scroll { delta: -2.0 })
        );
    }

    #[test]
    fn driving_a_camera_through_the_processor() {
        let mut input = InputProcessor::new();
        let mut camera = Camera::at(glam::Vec3::new(0.0, 0.0, 3.0));
        let _ = input.handle_event(&press("KeyW"));
        for cmd in input.frame_commands(0.1) {
            camera.execute(cmd);
        }
        assert!((camera.position().z - 2.75).abs() < 1e-4);
    }
}
