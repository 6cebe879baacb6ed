//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use glint_renderer::{DisplaySize, RenderState, SceneState};

use super::core::GlintApp;

impl GlintApp {
    /// Create the window, build the scene and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let inner = window.inner_size();
        let display = DisplaySize::from_physical(inner.width, inner.height, window.scale_factor());

        let scene = match SceneState::from_config(&self.config, display) {
            Ok(scene) => scene,
            Err(e) => {
                tracing::error!("Failed to build scene: {e}");
                return false;
            }
        };

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), &scene, &self.config));
        match render_state {
            Ok(rs) => {
                let buffer = scene.display.drawing_buffer();
                tracing::info!(
                    "Window ready: {}x{} logical, pixel ratio {}, drawing buffer {}x{}",
                    scene.display.logical_width,
                    scene.display.logical_height,
                    scene.display.pixel_ratio(),
                    buffer.width,
                    buffer.height,
                );
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.scene = Some(scene);
        self.window = Some(window);
        true
    }
}
