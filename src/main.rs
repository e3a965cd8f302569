//! Headless camera tour.
//!
//! Builds a small scene of procedural primitives, then replays a scripted
//! sequence of input events through the input processor and camera,
//! logging the camera state and the culled object list as it goes. Pass a
//! TOML options file as the first argument to override the defaults.

use std::path::Path;

use gl_sandbox::camera::Camera;
use gl_sandbox::error::SandboxError;
use gl_sandbox::input::{InputEvent, InputProcessor, MouseButton};
use gl_sandbox::lighting::{Light, LightKind, LightManager, Material};
use gl_sandbox::options::Options;
use gl_sandbox::scene::{MeshLibrary, PrimitiveShape, Scene};
use gl_sandbox::util::frame_timing::FrameTiming;
use glam::Vec3;
use web_time::Duration;

const VIEWPORT: (f32, f32) = (1280.0, 720.0);
const FRAME: Duration = Duration::from_micros(16_667);

struct SandboxApp {
    camera: Camera,
    input: InputProcessor,
    scene: Scene,
    lights: LightManager,
    timing: FrameTiming,
}

impl SandboxApp {
    fn new(options: &Options) -> Self {
        let mut library = MeshLibrary::from_options(&options.geometry);
        let geometry = &options.geometry;
        let mut scene = Scene::new();

        let mut matte = Material::named("matte");
        matte.set_colors(
            Vec3::splat(0.6),
            Vec3::splat(0.05),
            Vec3::splat(0.1),
        );
        let mut brass = Material::named("brass");
        brass.set_colors(
            Vec3::new(0.78, 0.57, 0.11),
            Vec3::new(0.99, 0.94, 0.81),
            Vec3::new(0.33, 0.22, 0.03),
        );
        brass.set_properties(27.9, 1.0, 1.0);
        let (matte, brass) = (matte.into_handle(), brass.into_handle());

        let floor =
            library.get_or_generate(&PrimitiveShape::plane(20.0, geometry));
        let id = scene.add("floor", floor, Vec3::new(0.0, -1.0, 0.0));
        scene.set_material(id, Some(matte));

        let cube =
            library.get_or_generate(&PrimitiveShape::Cube { size: 1.0 });
        for (i, x) in [-3.0_f32, 0.0, 3.0].into_iter().enumerate() {
            let at = Vec3::new(x, -0.5, -4.0);
            let id = scene.add(format!("cube {i}"), cube.clone(), at);
            scene.set_material(id, Some(brass.clone()));
        }

        let placements = [
            (
                "sphere",
                PrimitiveShape::sphere(0.75, geometry),
                Vec3::new(-2.0, 0.0, 0.0),
            ),
            (
                "cylinder",
                PrimitiveShape::cylinder(0.5, 1.5, geometry),
                Vec3::new(2.0, 0.0, 0.0),
            ),
            (
                "cone",
                PrimitiveShape::cone(0.6, 1.2, geometry),
                Vec3::new(0.0, 0.0, 3.0),
            ),
            (
                "torus",
                PrimitiveShape::torus(1.0, 0.5, geometry),
                Vec3::new(0.0, 1.5, 0.0),
            ),
            (
                "capsule",
                PrimitiveShape::capsule(0.4, 1.0, geometry),
                Vec3::new(0.0, 0.0, -8.0),
            ),
        ];
        for (name, shape, at) in placements {
            let mesh = library.get_or_generate(&shape);
            let _ = scene.add(name, mesh, at);
        }

        let normals =
            library.normal_lines(&PrimitiveShape::sphere(0.75, geometry));
        log::debug!(
            "sphere normal lines: {} segments, {} long",
            normals.vertex_count() / 2,
            geometry.normal_length
        );

        let (vertices, triangles) = scene.stats();
        log::info!(
            "scene: {} objects, {} distinct meshes, {vertices} vertices, \
             {triangles} triangles",
            scene.len(),
            library.len()
        );

        let mut lights = LightManager::new();
        for light in [
            Light::directional("sun", Vec3::new(-0.3, -1.0, -0.4))
                .with_intensity(0.8),
            Light::point("warm", Vec3::new(-2.0, 2.0, 2.0))
                .with_color(Vec3::new(1.0, 0.8, 0.6)),
            Light::point("cool", Vec3::new(2.0, 2.0, -2.0))
                .with_color(Vec3::new(0.6, 0.7, 1.0)),
        ] {
            let _ = lights.add(light);
        }

        let mut camera = Camera::from_options(&options.camera);
        camera.set_position(Vec3::new(0.0, 0.0, 6.0));
        camera.set_home();

        Self {
            camera,
            input: InputProcessor::from_options(options),
            scene,
            lights,
            timing: FrameTiming::default(),
        }
    }

    /// Feed one frame's events, then apply held-key movement and
    /// auto-rotation.
    fn frame(&mut self, events: &[InputEvent]) {
        for event in events {
            if let Some(command) = self.input.handle_event(event) {
                self.camera.execute(command);
            }
        }
        let dt = self.timing.record(FRAME);
        for command in self.input.frame_commands(dt) {
            self.camera.execute(command);
        }
        self.camera.update(dt);
    }

    fn report(&self, label: &str) {
        let camera = &self.camera;
        let frustum = camera.frustum(VIEWPORT.0, VIEWPORT.1);
        let visible: Vec<&str> = self
            .scene
            .visible_objects(&frustum)
            .into_iter()
            .map(|o| o.name.as_str())
            .collect();
        log::info!(
            "[{label}] mode={} pos={:.2} front={:.2} zoom={:.1} target={:.2} \
             dist={:.1}",
            camera.mode(),
            camera.position(),
            camera.front(),
            camera.zoom(),
            camera.target(),
            camera.orbit_distance()
        );
        log::info!("[{label}] visible: {}", visible.join(", "));

        let upload = self.lights.shader_data();
        let lit: Vec<String> = self
            .lights
            .enabled_lights()
            .map(|(i, light)| {
                let distance = camera.position().distance(light_origin(light));
                let falloff = light.attenuation_at(distance);
                format!("{i}:{}@{falloff:.2}", light.name())
            })
            .collect();
        log::debug!(
            "[{label}] lights ({} bytes): {}",
            bytemuck::bytes_of(&upload).len(),
            lit.join(", ")
        );
    }

    /// Hold `key` for `frames` frames.
    fn hold(&mut self, key: &str, frames: u32) {
        self.frame(&[key_pressed(key)]);
        for _ in 1..frames {
            self.frame(&[]);
        }
        self.frame(&[key_released(key)]);
    }

    /// Drag the cursor by `(dx, dy)` pixels in `steps` moves.
    fn drag(&mut self, dx: f32, dy: f32, steps: u32) {
        let (mut x, mut y) = (VIEWPORT.0 * 0.5, VIEWPORT.1 * 0.5);
        self.frame(&[InputEvent::CursorMoved { x, y }]);
        for _ in 0..steps {
            x += dx / steps as f32;
            y += dy / steps as f32;
            self.frame(&[InputEvent::CursorMoved { x, y }]);
        }
    }

    fn run(&mut self) {
        self.report("start");

        self.hold("KeyW", 60);
        self.drag(200.0, 0.0, 10);
        self.report("walked and turned");

        self.frame(&[key_pressed("Tab"), key_released("Tab")]);
        self.frame(&[InputEvent::Scroll { delta: -4.0 }]);
        self.report("third person");

        self.frame(&[key_pressed("Digit3")]);
        self.drag(0.0, -150.0, 10);
        self.hold("Space", 30);
        self.report("free flight");

        self.frame(&[key_pressed("Digit4"), key_pressed("KeyR")]);
        for _ in 0..90 {
            self.frame(&[]);
        }
        self.report("orbit, auto-rotating");

        self.frame(&[
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            },
            InputEvent::FocusLost,
        ]);
        self.frame(&[key_pressed("KeyF")]);
        self.report("reset");

        log::info!(
            "{} frames, {:.1} fps",
            self.timing.frame_count(),
            self.timing.fps()
        );
    }
}

/// Point lights attenuate from their position; directional lights are
/// everywhere at once.
fn light_origin(light: &Light) -> Vec3 {
    match *light.kind() {
        LightKind::Point { position, .. } => position,
        LightKind::Directional { .. } => Vec3::ZERO,
    }
}

fn key_pressed(key: &str) -> InputEvent {
    InputEvent::KeyPressed { key: key.to_owned() }
}

fn key_released(key: &str) -> InputEvent {
    InputEvent::KeyReleased { key: key.to_owned() }
}

fn main() -> Result<(), SandboxError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => {
            let options = Options::load(Path::new(&path))?;
            log::info!("Loaded options from {path}");
            options
        }
        None => Options::default(),
    };

    SandboxApp::new(&options).run();
    Ok(())
}
