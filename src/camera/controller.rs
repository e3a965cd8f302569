use glam::{Mat4, Vec3};

use super::frustum::Frustum;
use super::mode::{CameraMode, CameraMovement};
use crate::options::CameraOptions;

/// Pitch limit in degrees for both Euler and orbit angles.
pub const PITCH_LIMIT: f32 = 89.0;
/// Field-of-view (zoom) range in degrees.
pub const ZOOM_RANGE: (f32, f32) = (1.0, 45.0);
/// Orbit distance range in world units.
pub const ORBIT_DISTANCE_RANGE: (f32, f32) = (1.0, 50.0);
/// Orbit distance change per unit of scroll.
pub const ORBIT_SCROLL_STEP: f32 = 0.5;
/// Orbit pitch applied when entering orbit mode from an Euler-angle mode.
pub const ORBIT_ENTRY_PITCH: f32 = 20.0;

/// Pose captured for [`Camera::reset`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct Home {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    mode: CameraMode,
    target: Vec3,
    orbit_distance: f32,
    orbit_yaw: f32,
    orbit_pitch: f32,
}

/// Single movable viewpoint with four interaction modes.
///
/// `front`, `right` and `up` are always derived: from `yaw`/`pitch` in the
/// Euler-angle modes, from the target and orbit angles in the orbit-style
/// modes. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,
    zoom: f32,

    mode: CameraMode,
    target: Vec3,
    orbit_distance: f32,
    orbit_yaw: f32,
    orbit_pitch: f32,
    auto_rotate: bool,
    auto_rotate_speed: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,
    znear: f32,
    zfar: f32,

    home: Home,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0)
    }
}

impl Camera {
    /// First-person camera at `position` looking along `yaw`/`pitch`.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            zoom: 45.0,
            mode: CameraMode::FirstPerson,
            target: Vec3::ZERO,
            orbit_distance: 5.0,
            orbit_yaw: 0.0,
            orbit_pitch: ORBIT_ENTRY_PITCH,
            auto_rotate: false,
            auto_rotate_speed: 30.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            znear: 0.1,
            zfar: 100.0,
            home: Home {
                position,
                yaw,
                pitch,
                zoom: 45.0,
                mode: CameraMode::FirstPerson,
                target: Vec3::ZERO,
                orbit_distance: 5.0,
                orbit_yaw: 0.0,
                orbit_pitch: ORBIT_ENTRY_PITCH,
            },
        };
        camera.update_euler_vectors();
        camera
    }

    /// Default orientation (yaw -90°, looking down -Z) at `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, -90.0, 0.0)
    }

    /// Default camera configured from options, starting in the configured
    /// mode. The resulting pose becomes the [`reset`](Self::reset) pose.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::default();
        camera.apply_options(options);
        camera.set_mode(options.mode);
        camera.set_home();
        camera
    }

    /// Apply tunables from options without changing mode or pose.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.zoom = options.fovy.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1);
        self.znear = options.znear;
        self.zfar = options.zfar;
        self.movement_speed = options.movement_speed;
        self.mouse_sensitivity = options.mouse_sensitivity;
        self.auto_rotate = options.auto_rotate;
        self.auto_rotate_speed = options.auto_rotate_speed;
        self.set_orbit_distance(options.orbit_distance);
    }

    // -- Mode state machine --

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch mode, re-deriving whatever the new mode needs.
    ///
    /// Entering third-person from an Euler-angle mode places the target
    /// `orbit_distance` ahead and keeps the view; entering orbit from an
    /// Euler-angle mode recentres on the origin at the default orbit pitch.
    /// Moving between the orbit-style modes keeps target and distance.
    /// Entering an Euler-angle mode from an orbit-style one keeps the
    /// position and derives yaw/pitch from the current view direction.
    pub fn set_mode(&mut self, mode: CameraMode) {
        let previous = self.mode;
        self.mode = mode;
        if previous != mode {
            log::debug!("camera mode: {previous} -> {mode}");
        }

        match (previous.is_orbit_style(), mode) {
            (false, CameraMode::ThirdPerson) => {
                self.target = self.position + self.front * self.orbit_distance;
                self.orbit_angles_from_front();
                self.update_orbit_position();
            }
            (false, CameraMode::Orbit) => {
                self.target = Vec3::ZERO;
                self.orbit_pitch = ORBIT_ENTRY_PITCH;
                self.update_orbit_position();
            }
            (true, CameraMode::ThirdPerson | CameraMode::Orbit) => {
                self.update_orbit_position();
            }
            (true, CameraMode::FirstPerson | CameraMode::FreeFlight) => {
                self.euler_angles_from_front();
                self.update_euler_vectors();
            }
            (false, CameraMode::FirstPerson | CameraMode::FreeFlight) => {}
        }
    }

    /// Advance to the next mode in cycle order.
    pub fn cycle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    // -- Input handlers --

    /// Translate for `delta_time` seconds at the movement speed.
    ///
    /// First-person moves the position with vertical motion along world up;
    /// free-flight uses the local up instead. Orbit-style modes move the
    /// target along the horizontal view axes and the camera follows.
    pub fn process_keyboard(
        &mut self,
        direction: CameraMovement,
        delta_time: f32,
    ) {
        let velocity = self.movement_speed * delta_time;
        match self.mode {
            CameraMode::FirstPerson => {
                self.position +=
                    self.euler_step(direction, self.world_up) * velocity;
            }
            CameraMode::FreeFlight => {
                self.position += self.euler_step(direction, self.up) * velocity;
            }
            CameraMode::ThirdPerson | CameraMode::Orbit => {
                self.target += self.orbit_step(direction) * velocity;
                self.update_orbit_position();
            }
        }
    }

    /// Rotate by a mouse delta scaled by the sensitivity.
    ///
    /// Euler-angle modes turn yaw/pitch; orbit-style modes swing around
    /// the target. Either pitch stays within ±89° however large the delta.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        let x = x_offset * self.mouse_sensitivity;
        let y = y_offset * self.mouse_sensitivity;
        if self.mode.is_orbit_style() {
            self.orbit_yaw -= x;
            self.orbit_pitch =
                (self.orbit_pitch - y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            self.update_orbit_position();
        } else {
            self.yaw += x;
            self.pitch = (self.pitch + y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            self.update_euler_vectors();
        }
    }

    /// Zoom: narrows the field of view in Euler-angle modes, moves closer
    /// to the target in orbit-style modes.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        if self.mode.is_orbit_style() {
            self.set_orbit_distance(
                self.orbit_distance - ORBIT_SCROLL_STEP * y_offset,
            );
        } else {
            self.set_zoom(self.zoom - y_offset);
        }
    }

    /// Per-frame update. Only orbit mode with auto-rotate enabled moves.
    pub fn update(&mut self, delta_time: f32) {
        if self.mode != CameraMode::Orbit || !self.auto_rotate {
            return;
        }
        self.orbit_yaw = (self.orbit_yaw + self.auto_rotate_speed * delta_time)
            .rem_euclid(360.0);
        self.update_orbit_position();
    }

    /// Restore the home pose and mode.
    pub fn reset(&mut self) {
        let home = self.home;
        self.position = home.position;
        self.yaw = home.yaw;
        self.pitch = home.pitch;
        self.zoom = home.zoom;
        self.target = home.target;
        self.orbit_distance = home.orbit_distance;
        self.orbit_yaw = home.orbit_yaw;
        self.orbit_pitch = home.orbit_pitch;
        self.mode = home.mode;
        if self.mode.is_orbit_style() {
            self.update_orbit_position();
        } else {
            self.update_euler_vectors();
        }
    }

    /// Make the current pose and mode the one [`reset`](Self::reset)
    /// returns to.
    pub fn set_home(&mut self) {
        self.home = Home {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            zoom: self.zoom,
            mode: self.mode,
            target: self.target,
            orbit_distance: self.orbit_distance,
            orbit_yaw: self.orbit_yaw,
            orbit_pitch: self.orbit_pitch,
        };
    }

    // -- Matrices --

    /// Right-handed look-at view matrix. Orbit-style modes look at the
    /// target; Euler-angle modes look along `front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let center = if self.mode.is_orbit_style() {
            self.target
        } else {
            self.position + self.front
        };
        Mat4::look_at_rh(self.position, center, self.up)
    }

    /// Perspective projection from the current zoom and clip planes.
    #[must_use]
    pub fn projection_matrix(&self, width: f32, height: f32) -> Mat4 {
        self.projection_matrix_with(
            width, height, self.zoom, self.znear, self.zfar,
        )
    }

    /// Perspective projection (OpenGL clip depth) with explicit vertical
    /// field of view in degrees and clip planes.
    ///
    /// Returns [`Mat4::IDENTITY`] for a non-positive height or a
    /// non-finite or non-positive aspect ratio.
    #[must_use]
    pub fn projection_matrix_with(
        &self,
        width: f32,
        height: f32,
        fov_degrees: f32,
        znear: f32,
        zfar: f32,
    ) -> Mat4 {
        if height <= 0.0 {
            return Mat4::IDENTITY;
        }
        let aspect = width / height;
        if !aspect.is_finite() || aspect <= 0.0 {
            return Mat4::IDENTITY;
        }
        Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, znear, zfar)
    }

    /// `projection * view` for a viewport.
    #[must_use]
    pub fn view_projection(&self, width: f32, height: f32) -> Mat4 {
        self.projection_matrix(width, height) * self.view_matrix()
    }

    /// Culling frustum for the current view and viewport.
    #[must_use]
    pub fn frustum(&self, width: f32, height: f32) -> Frustum {
        Frustum::from_view_projection(self.view_projection(width, height))
    }

    // -- Accessors --

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit local up.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit local right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Reference up direction.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Euler yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Euler pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Look-at point of the orbit-style modes.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Distance from target in orbit-style modes.
    #[must_use]
    pub fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    /// Orbit yaw in degrees.
    #[must_use]
    pub fn orbit_yaw(&self) -> f32 {
        self.orbit_yaw
    }

    /// Orbit pitch in degrees.
    #[must_use]
    pub fn orbit_pitch(&self) -> f32 {
        self.orbit_pitch
    }

    /// Whether orbit mode auto-rotates.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Auto-rotation speed in degrees per second.
    #[must_use]
    pub fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
    }

    /// Translation speed in units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Degrees per unit of mouse movement.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Near and far clip distances.
    #[must_use]
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    // -- Setters --

    /// Move the camera. In orbit-style modes the next recompute overrides
    /// the position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set Euler angles, clamping pitch.
    pub fn set_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        if !self.mode.is_orbit_style() {
            self.update_euler_vectors();
        }
    }

    /// Set the field of view, clamped to [`ZOOM_RANGE`].
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1);
    }

    /// Set the orbit target.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        if self.mode.is_orbit_style() {
            self.update_orbit_position();
        }
    }

    /// Set the orbit distance, clamped to [`ORBIT_DISTANCE_RANGE`].
    pub fn set_orbit_distance(&mut self, distance: f32) {
        self.orbit_distance =
            distance.clamp(ORBIT_DISTANCE_RANGE.0, ORBIT_DISTANCE_RANGE.1);
        if self.mode.is_orbit_style() {
            self.update_orbit_position();
        }
    }

    /// Set orbit yaw and (clamped) pitch.
    pub fn set_orbit_angles(&mut self, yaw: f32, pitch: f32) {
        self.orbit_yaw = yaw;
        self.orbit_pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        if self.mode.is_orbit_style() {
            self.update_orbit_position();
        }
    }

    /// Enable or disable orbit auto-rotation.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Flip orbit auto-rotation.
    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    /// Set auto-rotation speed in degrees per second.
    pub fn set_auto_rotate_speed(&mut self, speed: f32) {
        self.auto_rotate_speed = speed;
    }

    /// Set translation speed.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    /// Set mouse sensitivity.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Set near and far clip distances.
    pub fn set_clip_planes(&mut self, znear: f32, zfar: f32) {
        self.znear = znear;
        self.zfar = zfar;
    }

    // -- Euler rig --

    fn euler_step(&self, direction: CameraMovement, vertical: Vec3) -> Vec3 {
        match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => vertical,
            CameraMovement::Down => -vertical,
        }
    }

    fn update_euler_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize_or_zero();
        self.update_basis();
    }

    fn euler_angles_from_front(&mut self) {
        let front = self.front;
        self.yaw = front.z.atan2(front.x).to_degrees();
        self.pitch = front
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // -- Orbit rig --

    /// Unit direction from the view vector projected off world up.
    fn horizontal(&self, v: Vec3) -> Vec3 {
        (v - self.world_up * v.dot(self.world_up)).normalize_or_zero()
    }

    fn orbit_step(&self, direction: CameraMovement) -> Vec3 {
        match direction {
            CameraMovement::Forward => self.horizontal(self.front),
            CameraMovement::Backward => -self.horizontal(self.front),
            CameraMovement::Left => -self.horizontal(self.right),
            CameraMovement::Right => self.horizontal(self.right),
            CameraMovement::Up => self.world_up,
            CameraMovement::Down => -self.world_up,
        }
    }

    fn orbit_angles_from_front(&mut self) {
        let back = -self.front;
        self.orbit_yaw = back.x.atan2(back.z).to_degrees();
        self.orbit_pitch = back
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn update_orbit_position(&mut self) {
        let (yaw, pitch) =
            (self.orbit_yaw.to_radians(), self.orbit_pitch.to_radians());
        let offset = Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        );
        self.position = self.target + offset * self.orbit_distance;
        self.front = (self.target - self.position).normalize_or_zero();
        self.update_basis();
    }

    fn update_basis(&mut self) {
        self.right = self.front.cross(self.world_up).normalize_or_zero();
        self.up = self.right.cross(self.front).normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        for v in [f, r, u] {
            assert!((v.length() - 1.0).abs() < EPS, "{v:?} not unit");
        }
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    fn assert_orbit_invariant(camera: &Camera) {
        let d = (camera.position() - camera.target()).length();
        assert!((d - camera.orbit_distance()).abs() < EPS);
    }

    #[test]
    fn defaults() {
        let camera = Camera::default();
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.mode(), CameraMode::FirstPerson);
        assert_eq!(camera.zoom(), 45.0);
        assert_eq!(camera.movement_speed(), 2.5);
        assert_eq!(camera.mouse_sensitivity(), 0.1);
        assert_eq!(camera.orbit_distance(), 5.0);
        assert_eq!(camera.orbit_pitch(), 20.0);
        assert!(!camera.auto_rotate());
        assert_eq!(camera.auto_rotate_speed(), 30.0);
        assert_eq!(camera.clip_planes(), (0.1, 100.0));
        assert!(approx(camera.front(), Vec3::NEG_Z));
        assert_orthonormal(&camera);
    }

    #[test]
    fn forward_step_scenario() {
        let mut camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        camera.process_keyboard(CameraMovement::Forward, 0.1);
        assert!((camera.position().z - 2.75).abs() < EPS);
    }

    #[test]
    fn first_person_directions() {
        let start = Vec3::new(0.0, 5.0, 3.0);
        let cases = [
            (CameraMovement::Backward, Vec3::Z),
            (CameraMovement::Left, Vec3::NEG_X),
            (CameraMovement::Right, Vec3::X),
            (CameraMovement::Up, Vec3::Y),
            (CameraMovement::Down, Vec3::NEG_Y),
        ];
        for (direction, expected) in cases {
            let mut camera = Camera::at(start);
            camera.process_keyboard(direction, 1.0);
            assert!(
                approx(camera.position(), start + expected * 2.5),
                "{direction:?} moved to {:?}",
                camera.position()
            );
        }
    }

    #[test]
    fn first_person_vertical_uses_world_up_free_flight_uses_local_up() {
        let mut walker = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 45.0);
        walker.process_keyboard(CameraMovement::Up, 1.0);
        assert!(approx(walker.position(), Vec3::new(0.0, 2.5, 0.0)));

        let mut flyer = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 45.0);
        flyer.set_mode(CameraMode::FreeFlight);
        flyer.process_keyboard(CameraMovement::Up, 1.0);
        assert!(approx(flyer.position(), flyer.up() * 2.5));
        assert!(flyer.position().z > 0.0);
    }

    #[test]
    fn zero_delta_time_never_moves() {
        for mode in CameraMode::ALL {
            let mut camera = Camera::at(Vec3::new(1.0, 2.0, 3.0));
            camera.set_mode(mode);
            let before = camera.position();
            for direction in [
                CameraMovement::Forward,
                CameraMovement::Backward,
                CameraMovement::Left,
                CameraMovement::Right,
                CameraMovement::Up,
                CameraMovement::Down,
            ] {
                camera.process_keyboard(direction, 0.0);
            }
            assert_eq!(camera.position(), before, "{mode:?}");
        }
    }

    #[test]
    fn pitch_clamped_under_extreme_mouse_input() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(camera.pitch(), 89.0);
        camera.process_mouse_movement(0.0, -100_000.0);
        assert_eq!(camera.pitch(), -89.0);
        assert_orthonormal(&camera);

        camera.set_mode(CameraMode::Orbit);
        camera.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(camera.orbit_pitch(), -89.0);
        camera.process_mouse_movement(0.0, -10_000.0);
        assert_eq!(camera.orbit_pitch(), 89.0);
        assert_orbit_invariant(&camera);
    }

    #[test]
    fn pitch_never_leaves_limits_in_any_euler_mode() {
        for mode in [CameraMode::FirstPerson, CameraMode::FreeFlight] {
            let mut camera = Camera::default();
            camera.set_mode(mode);
            camera.process_mouse_movement(0.0, 10_000.0);
            assert_eq!(camera.pitch(), 89.0, "{mode:?}");
            camera.process_mouse_movement(0.0, 50.0);
            assert_eq!(camera.pitch(), 89.0, "{mode:?}");
            camera.process_mouse_movement(0.0, -1000.0);
            assert!((camera.pitch() + 11.0).abs() < EPS, "{mode:?}");
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn mouse_turns_yaw_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(900.0, 0.0);
        assert!((camera.yaw() - 0.0).abs() < EPS);
        assert!(approx(camera.front(), Vec3::X));
    }

    #[test]
    fn zoom_scroll_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom(), 35.0);
        camera.process_mouse_scroll(10_000.0);
        assert_eq!(camera.zoom(), 1.0);
        camera.process_mouse_scroll(-10_000.0);
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn orbit_scroll_scenario() {
        let mut camera = Camera::default();
        camera.set_mode(CameraMode::ThirdPerson);
        camera.set_target(Vec3::ZERO);
        camera.set_orbit_distance(5.0);
        camera.process_mouse_scroll(1.0);
        assert!((camera.orbit_distance() - 4.5).abs() < EPS);
        assert!((camera.position().length() - 4.5).abs() < EPS);
        // Zoom untouched in orbit-style modes
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn orbit_distance_is_clamped() {
        let mut camera = Camera::default();
        camera.set_mode(CameraMode::Orbit);
        camera.process_mouse_scroll(10_000.0);
        assert_eq!(camera.orbit_distance(), 1.0);
        camera.process_mouse_scroll(-10_000.0);
        assert_eq!(camera.orbit_distance(), 50.0);
        assert_orbit_invariant(&camera);
    }

    #[test]
    fn cycle_returns_after_four_steps() {
        let mut camera = Camera::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            camera.cycle_mode();
            seen.push(camera.mode());
        }
        assert_eq!(
            seen,
            [
                CameraMode::ThirdPerson,
                CameraMode::FreeFlight,
                CameraMode::Orbit,
                CameraMode::FirstPerson,
            ]
        );
    }

    #[test]
    fn third_person_entry_keeps_view() {
        let mut camera =
            Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -60.0, -15.0);
        let (position, front) = (camera.position(), camera.front());
        camera.set_mode(CameraMode::ThirdPerson);
        assert!(approx(camera.target(), position + front * 5.0));
        assert!(approx(camera.position(), position));
        assert!(approx(camera.front(), front));
        assert_orbit_invariant(&camera);
        assert_orthonormal(&camera);
    }

    #[test]
    fn orbit_entry_from_euler_recentres() {
        let mut camera = Camera::at(Vec3::new(10.0, 0.0, 0.0));
        camera.set_orbit_angles(45.0, 60.0);
        camera.set_mode(CameraMode::Orbit);
        assert_eq!(camera.target(), Vec3::ZERO);
        assert_eq!(camera.orbit_pitch(), 20.0);
        assert_eq!(camera.orbit_yaw(), 45.0);
        assert_orbit_invariant(&camera);
        let expected = Vec3::new(
            20f32.to_radians().cos() * 45f32.to_radians().sin(),
            20f32.to_radians().sin(),
            20f32.to_radians().cos() * 45f32.to_radians().cos(),
        ) * 5.0;
        assert!(approx(camera.position(), expected));
    }

    #[test]
    fn orbit_style_switch_keeps_target_and_distance() {
        let mut camera = Camera::default();
        camera.set_mode(CameraMode::Orbit);
        camera.set_target(Vec3::new(1.0, 1.0, 1.0));
        camera.set_orbit_distance(8.0);
        camera.set_mode(CameraMode::ThirdPerson);
        assert_eq!(camera.target(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(camera.orbit_distance(), 8.0);
        camera.set_mode(CameraMode::Orbit);
        assert_eq!(camera.target(), Vec3::new(1.0, 1.0, 1.0));
        camera.set_mode(CameraMode::Orbit);
        assert_eq!(camera.orbit_distance(), 8.0);
        assert_orbit_invariant(&camera);
    }

    #[test]
    fn euler_entry_from_orbit_keeps_view() {
        let mut camera = Camera::default();
        camera.set_mode(CameraMode::Orbit);
        camera.set_orbit_angles(30.0, 25.0);
        let (position, front) = (camera.position(), camera.front());
        camera.set_mode(CameraMode::FreeFlight);
        assert!(approx(camera.position(), position));
        assert!(approx(camera.front(), front));
        assert!((camera.pitch() + 25.0).abs() < 1e-3);
        assert_orthonormal(&camera);
    }

    #[test]
    fn orbit_keyboard_moves_target_horizontally() {
        let mut camera = Camera::default();
        camera.set_mode(CameraMode::Orbit);
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        // Orbit yaw 0 looks down -Z; pitch is ignored for horizontal moves
        assert!(approx(camera.target(), Vec3::new(0.0, 0.0, -2.5)));
        camera.process_keyboard(CameraMovement::Up, 1.0);
        assert!(approx(camera.target(), Vec3::new(0.0, 2.5, -2.5)));
        camera.process_keyboard(CameraMovement::Right, 1.0);
        assert!(approx(camera.target(), Vec3::new(2.5, 2.5, -2.5)));
        assert_orbit_invariant(&camera);
    }

    #[test]
    fn auto_rotate_only_in_orbit() {
        let mut camera = Camera::default();
        camera.set_auto_rotate(true);
        camera.set_mode(CameraMode::ThirdPerson);
        let before = camera.position();
        camera.update(1.0);
        assert_eq!(camera.position(), before);

        camera.set_mode(CameraMode::Orbit);
        camera.set_auto_rotate(false);
        let before = camera.position();
        camera.update(1.0);
        assert_eq!(camera.position(), before);

        camera.toggle_auto_rotate();
        camera.update(1.0);
        assert_ne!(camera.position(), before);
        assert!((camera.orbit_yaw() - 30.0).abs() < EPS);
        assert_orbit_invariant(&camera);

        camera.set_auto_rotate_speed(0.0);
        let before = camera.position();
        camera.update(1.0);
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn auto_rotate_wraps_yaw() {
        let mut camera = Camera::default();
        camera.set_mode(CameraMode::Orbit);
        camera.set_auto_rotate(true);
        camera.update(13.0);
        assert!((camera.orbit_yaw() - 30.0).abs() < 1e-3);
        camera.set_auto_rotate_speed(-30.0);
        camera.update(2.0);
        assert!((camera.orbit_yaw() - 330.0).abs() < 1e-3);
    }

    #[test]
    fn projection_guards_degenerate_viewports() {
        let camera = Camera::default();
        assert_eq!(camera.projection_matrix(800.0, 0.0), Mat4::IDENTITY);
        assert_eq!(camera.projection_matrix(800.0, -1.0), Mat4::IDENTITY);
        assert_eq!(camera.projection_matrix(0.0, 600.0), Mat4::IDENTITY);
        assert_ne!(camera.projection_matrix(800.0, 600.0), Mat4::IDENTITY);
        assert_ne!(
            camera.projection_matrix(800.0, 600.0),
            camera.projection_matrix(1600.0, 900.0)
        );
        assert_ne!(
            camera.projection_matrix_with(800.0, 600.0, 45.0, 0.1, 100.0),
            camera.projection_matrix_with(800.0, 600.0, 90.0, 0.1, 100.0)
        );
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let view = camera.view_matrix();
        assert!((view.w_axis.z + 3.0).abs() < EPS);
        let origin_in_view = view.transform_point3(Vec3::ZERO);
        assert!(approx(origin_in_view, Vec3::new(0.0, 0.0, -3.0)));

        let mut orbit = Camera::default();
        orbit.set_mode(CameraMode::Orbit);
        let target_in_view = orbit.view_matrix().transform_point3(Vec3::ZERO);
        assert!(target_in_view.x.abs() < EPS && target_in_view.y.abs() < EPS);
        assert!((target_in_view.z + 5.0).abs() < EPS);
    }

    #[test]
    fn frustum_follows_view() {
        let camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let frustum = camera.frustum(800.0, 600.0);
        assert!(frustum.contains_point(Vec3::ZERO));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut camera = Camera::at(Vec3::new(0.0, 1.0, 4.0));
        camera.process_mouse_movement(300.0, 100.0);
        camera.process_keyboard(CameraMovement::Forward, 2.0);
        camera.process_mouse_scroll(5.0);
        camera.set_mode(CameraMode::Orbit);
        camera.reset();
        assert_eq!(camera.mode(), CameraMode::FirstPerson);
        assert_eq!(camera.position(), Vec3::new(0.0, 1.0, 4.0));
        assert_eq!(camera.zoom(), 45.0);
        assert!(approx(camera.front(), Vec3::NEG_Z));
    }

    #[test]
    fn options_configure_camera() {
        let options = CameraOptions {
            mode: CameraMode::Orbit,
            fovy: 60.0,
            movement_speed: 4.0,
            orbit_distance: 12.0,
            auto_rotate: true,
            ..CameraOptions::default()
        };
        let mut camera = Camera::from_options(&options);
        assert_eq!(camera.mode(), CameraMode::Orbit);
        assert_eq!(camera.zoom(), 45.0);
        assert_eq!(camera.movement_speed(), 4.0);
        assert!(camera.auto_rotate());
        assert_orbit_invariant(&camera);
        assert!((camera.position().length() - 12.0).abs() < EPS);

        camera.update(1.0);
        camera.reset();
        assert_eq!(camera.orbit_yaw(), 0.0);
    }

    #[test]
    fn setters_clamp() {
        let mut camera = Camera::default();
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom(), 1.0);
        camera.set_orbit_distance(100.0);
        assert_eq!(camera.orbit_distance(), 50.0);
        camera.set_orbit_angles(10.0, 95.0);
        assert_eq!(camera.orbit_pitch(), 89.0);
        camera.set_yaw_pitch(0.0, -120.0);
        assert_eq!(camera.pitch(), -89.0);
        assert_orthonormal(&camera);
    }
}
