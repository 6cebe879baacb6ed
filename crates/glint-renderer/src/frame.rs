//! Per-tick scene logic, kept free of GPU types.
//!
//! [`FrameDriver::tick`] advances the [`SceneState`] and returns the
//! ordered render commands for the frame; `RenderState::execute` carries
//! them out on the GPU.

use std::f32::consts::TAU;

use glam::Vec3;
use glint_common::{ColorName, SceneError};
use glint_config::colors::parse_color;
use glint_config::GlintConfig;

use crate::capture::{CubeFaceRenderer, EnvironmentCapture};
use crate::color_store::{ColorChange, ColorStore};
use crate::display::DisplaySize;
use crate::material::ShaderMaterial;
use crate::scene::{NodeId, OrbitControls, PerspectiveCamera, PointLight, Scene};
use crate::sphere::generate_sphere;
use crate::uniforms::{TextureHandle, UniformValue};

/// All mutable scene state, owned by the frame loop.
pub struct SceneState {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub colors: ColorStore,
    pub capture: EnvironmentCapture,
    pub display: DisplaySize,
    pub big_sphere: NodeId,
    pub small_sphere: NodeId,
}

impl SceneState {
    /// Build the fixed demo scene: a shaded big sphere, a reflective small
    /// sphere, and one point light.
    pub fn from_config(config: &GlintConfig, display: DisplaySize) -> Result<Self, SceneError> {
        let mut scene = Scene::new();
        let environment = scene.allocate_texture();
        let colors = ColorStore::from_config(&config.colors);

        let segments = config.scene.segments;
        let big_geometry =
            scene.add_geometry(generate_sphere(config.scene.big_sphere_radius, segments, segments));
        let small_geometry = scene.add_geometry(generate_sphere(
            config.scene.small_sphere_radius,
            segments,
            segments,
        ));

        let big_material = scene.add_material(ShaderMaterial::big_sphere(
            colors.normalized(ColorName::Base),
            colors.normalized(ColorName::Accent),
            colors.normalized(ColorName::Second),
        )?);
        let small_material = scene.add_material(ShaderMaterial::small_sphere(environment)?);

        let small_position = Vec3::from_array(config.scene.small_sphere_position);
        let big_sphere = scene.add_mesh("big sphere", big_geometry, big_material, Vec3::ZERO);
        let small_sphere =
            scene.add_mesh("small sphere", small_geometry, small_material, small_position);

        let light_color = parse_color(&config.light.color)
            .map(|c| c.to_normalized())
            .unwrap_or([1.0; 3]);
        scene.add_point_light(
            "point light",
            PointLight {
                color: light_color,
                intensity: config.light.intensity,
            },
            Vec3::from_array(config.light.position),
        );

        let display = display.with_max_pixel_ratio(config.window.max_pixel_ratio);
        let camera = PerspectiveCamera::from_config(&config.camera, display.aspect());
        let controls = OrbitControls::from_config(&config.camera);
        let capture = EnvironmentCapture::new(environment, small_position, &config.capture);

        tracing::info!(
            "scene ready: {} meshes, capture {}px with {} mips",
            scene.meshes().count(),
            capture.resolution(),
            capture.mip_level_count()
        );

        Ok(Self {
            scene,
            camera,
            controls,
            colors,
            capture,
            display,
            big_sphere,
            small_sphere,
        })
    }

    /// Debug panel entry point: store the color and push it straight into
    /// the big sphere material. Bad names or values change nothing.
    pub fn set_color(&mut self, name: &str, hex: &str) -> Option<ColorChange> {
        let change = self.colors.set_color(name, hex)?;
        let applied = self
            .scene
            .material_of_mut(self.big_sphere)
            .and_then(|m| m.set(change.uniform_name(), UniformValue::Vec3(change.normalized())));
        match applied {
            Ok(()) => {
                tracing::debug!("{} = {}", change.name, change.value);
                Some(change)
            }
            Err(e) => {
                tracing::warn!("failed to apply {}: {e}", change.name);
                None
            }
        }
    }

    /// Apply a new display size; the camera aspect follows.
    pub fn resize(&mut self, display: DisplaySize) {
        self.display = display.with_max_pixel_ratio(self.display.max_pixel_ratio);
        self.camera.set_aspect(self.display.aspect());
    }

    /// Capture the environment with `exclude` hidden.
    pub fn capture_environment(
        &mut self,
        exclude: NodeId,
        renderer: &mut dyn CubeFaceRenderer,
    ) -> Result<TextureHandle, SceneError> {
        self.capture.capture(&mut self.scene, exclude, renderer)
    }

    /// Point the small sphere material at a captured cubemap.
    pub fn bind_environment(&mut self, texture: TextureHandle) -> Result<(), SceneError> {
        self.scene
            .material_of_mut(self.small_sphere)?
            .set("tCube", UniformValue::Cubemap(texture))
    }

    pub fn big_sphere_rotation(&self) -> Result<f32, SceneError> {
        Ok(self.scene.node(self.big_sphere)?.rotation_y)
    }
}

/// One GPU step of a frame, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCommand {
    /// Render the cubemap with `exclude` hidden.
    CaptureEnvironment { exclude: NodeId },
    /// Feed the freshly captured cubemap to the reflective material.
    BindEnvironment,
    /// Run the post chain into the surface texture.
    RenderChain,
    Present,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub elapsed: f32,
    pub commands: Vec<RenderCommand>,
}

/// Advances the scene once per display refresh.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    rotation_step: f32,
    ticks: u64,
}

impl FrameDriver {
    /// `rotation_step` is added to the big sphere's Y rotation every tick,
    /// regardless of how much time passed.
    pub fn new(rotation_step: f32) -> Self {
        Self {
            rotation_step,
            ticks: 0,
        }
    }

    pub fn from_config(config: &GlintConfig) -> Self {
        Self::new(config.scene.rotation_step)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Update time, controls and rotation, then plan the frame.
    pub fn tick(&mut self, state: &mut SceneState, elapsed: f32) -> Result<FramePlan, SceneError> {
        state
            .scene
            .material_of_mut(state.big_sphere)?
            .set("time", UniformValue::Float(elapsed))?;

        state.controls.update(&mut state.camera);

        let big = state.scene.node_mut(state.big_sphere)?;
        big.rotation_y = (big.rotation_y + self.rotation_step).rem_euclid(TAU);

        self.ticks += 1;
        Ok(FramePlan {
            elapsed,
            commands: vec![
                RenderCommand::CaptureEnvironment {
                    exclude: state.small_sphere,
                },
                RenderCommand::BindEnvironment,
                RenderCommand::RenderChain,
                RenderCommand::Present,
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::FaceCamera;

    fn state() -> SceneState {
        let mut config = GlintConfig::default();
        config.scene.segments = 8;
        config.capture.resolution = 16;
        SceneState::from_config(&config, DisplaySize::new(800.0, 600.0, 1.0)).unwrap()
    }

    #[derive(Default)]
    struct CountingRenderer {
        faces: usize,
        small_seen: bool,
        finished: bool,
        small: Option<NodeId>,
    }

    impl CubeFaceRenderer for CountingRenderer {
        fn render_face(&mut self, scene: &Scene, _camera: &FaceCamera) {
            self.faces += 1;
            if let Some(small) = self.small {
                self.small_seen |= scene.visible_meshes().any(|m| m.id == small);
            }
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn tick_plans_capture_before_chain() {
        let mut state = state();
        let mut driver = FrameDriver::new(0.008);
        let plan = driver.tick(&mut state, 0.5).unwrap();
        assert_eq!(
            plan.commands,
            [
                RenderCommand::CaptureEnvironment {
                    exclude: state.small_sphere
                },
                RenderCommand::BindEnvironment,
                RenderCommand::RenderChain,
                RenderCommand::Present,
            ]
        );
        assert_eq!(plan.elapsed, 0.5);
    }

    #[test]
    fn tick_pushes_time_to_big_sphere_only() {
        let mut state = state();
        let mut driver = FrameDriver::new(0.008);
        driver.tick(&mut state, 2.25).unwrap();
        let big = state.scene.material_of(state.big_sphere).unwrap();
        let small = state.scene.material_of(state.small_sphere).unwrap();
        assert_eq!(big.uniforms().float("time").unwrap(), 2.25);
        assert_eq!(small.uniforms().float("time").unwrap(), 0.0);
    }

    #[test]
    fn rotation_accumulates_per_tick_modulo_tau() {
        let mut state = state();
        let step = 0.008;
        let mut driver = FrameDriver::new(step);
        let n = 1000;
        for i in 0..n {
            driver.tick(&mut state, i as f32 / 60.0).unwrap();
        }
        let expected = (n as f32 * step).rem_euclid(TAU);
        let actual = state.big_sphere_rotation().unwrap();
        assert!((actual - expected).abs() < 1e-3, "{actual} vs {expected}");
        assert!((0.0..TAU).contains(&actual));
        assert_eq!(driver.ticks(), n);
    }

    #[test]
    fn rotation_ignores_elapsed_time() {
        let mut a = state();
        let mut b = state();
        let mut driver_a = FrameDriver::new(0.01);
        let mut driver_b = FrameDriver::new(0.01);
        for i in 0..10 {
            driver_a.tick(&mut a, i as f32 * 0.001).unwrap();
            driver_b.tick(&mut b, i as f32 * 1.0).unwrap();
        }
        assert_eq!(
            a.big_sphere_rotation().unwrap(),
            b.big_sphere_rotation().unwrap()
        );
    }

    #[test]
    fn executing_plan_hides_small_sphere_only_during_capture() {
        let mut state = state();
        let mut driver = FrameDriver::new(0.008);
        let plan = driver.tick(&mut state, 0.0).unwrap();

        let mut renderer = CountingRenderer {
            small: Some(state.small_sphere),
            ..Default::default()
        };
        let mut captured = None;
        for command in plan.commands {
            match command {
                RenderCommand::CaptureEnvironment { exclude } => {
                    captured = Some(state.capture_environment(exclude, &mut renderer).unwrap());
                }
                RenderCommand::BindEnvironment => {
                    state.bind_environment(captured.unwrap()).unwrap();
                }
                RenderCommand::RenderChain => {
                    assert!(state.scene.is_visible(state.small_sphere).unwrap());
                }
                RenderCommand::Present => {}
            }
        }
        assert_eq!(renderer.faces, 6);
        assert!(renderer.finished);
        assert!(!renderer.small_seen);
        let small = state.scene.material_of(state.small_sphere).unwrap();
        assert_eq!(
            small.uniforms().cubemap("tCube").unwrap(),
            state.capture.texture()
        );
    }

    #[test]
    fn set_color_updates_big_sphere_uniform() {
        let mut state = state();
        let change = state.set_color("secondColor", "#ff0000").unwrap();
        assert_eq!(change.name, ColorName::Second);
        let big = state.scene.material_of(state.big_sphere).unwrap();
        assert_eq!(big.uniforms().vec3("uSecondColor").unwrap(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn bad_color_keeps_previous_uniform() {
        let mut state = state();
        let before = state
            .scene
            .material_of(state.big_sphere)
            .unwrap()
            .uniforms()
            .vec3("uBaseColor")
            .unwrap();
        assert!(state.set_color("baseColor", "#zzzzzz").is_none());
        assert!(state.set_color("baseColor", "#12345").is_none());
        let after = state
            .scene
            .material_of(state.big_sphere)
            .unwrap()
            .uniforms()
            .vec3("uBaseColor")
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn initial_colors_come_from_config() {
        let state = state();
        let big = state.scene.material_of(state.big_sphere).unwrap();
        let base = big.uniforms().vec3("uBaseColor").unwrap();
        assert!((base[0] - 120.0 / 255.0).abs() < 1e-6);
        assert!((base[1] - 158.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut state = state();
        state.resize(DisplaySize::new(1000.0, 500.0, 3.0));
        assert!((state.camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(state.display.pixel_ratio(), 2.0);
        assert_eq!(state.display.drawing_buffer().width, 2000);
    }

    #[test]
    fn scene_has_two_meshes_and_a_light() {
        let state = state();
        assert_eq!(state.scene.meshes().count(), 2);
        assert!((state.scene.light().intensity - 0.1).abs() < 1e-6);
        assert_eq!(state.capture.position(), Vec3::ZERO);
    }
}
