//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::GlintApp;

impl ApplicationHandler for GlintApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.failed = true;
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                // Minimized windows report 0x0; keep the last real size
                if size.width > 0 && size.height > 0 {
                    self.resize(|display| display.resize_physical(size.width, size.height));
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.resize(|display| display.set_scale_factor(scale_factor));
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.drag.cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_mouse_wheel(delta);
            }

            WindowEvent::RedrawRequested => {
                self.poll_config_changes();
                if !self.render_frame() {
                    self.failed = true;
                    self.shutdown();
                    event_loop.exit();
                    return;
                }
                self.request_redraw();
            }

            _ => {}
        }
    }
}

impl GlintApp {
    /// Update the display size, then the camera aspect, surface and post
    /// buffers, all before the next redraw.
    fn resize(&mut self, update: impl FnOnce(&mut glint_renderer::DisplaySize)) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let mut display = scene.display;
        update(&mut display);
        scene.resize(display);
        if let Some(rs) = self.render_state.as_mut() {
            rs.resize(&scene.display);
        }
        let buffer = scene.display.drawing_buffer();
        tracing::debug!(
            "resized to {}x{} (pixel ratio {})",
            buffer.width,
            buffer.height,
            scene.display.pixel_ratio()
        );
    }

    /// Tick the scene and draw it. Returns `false` on an unrecoverable
    /// renderer error.
    fn render_frame(&mut self) -> bool {
        let (Some(scene), Some(rs)) = (self.scene.as_mut(), self.render_state.as_mut()) else {
            return true;
        };

        let plan = match self.driver.tick(scene, self.clock.elapsed()) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::error!("Frame update failed: {e}");
                return true;
            }
        };

        match rs.execute(scene, &plan) {
            Ok(()) => true,
            Err(glint_renderer::RendererError::Scene(e)) => {
                tracing::error!("Render error: {e}");
                true
            }
            Err(e) => {
                tracing::error!("Fatal render error: {e}");
                false
            }
        }
    }
}
