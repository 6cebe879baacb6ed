use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use glint_config::GlintConfig;

use crate::capture::CubeRenderTarget;
use crate::clock::FrameTimer;
use crate::display::DisplaySize;
use crate::frame::{FramePlan, RenderCommand, SceneState};
use crate::gpu::{GpuContext, RendererError};
use crate::material::CameraBlock;
use crate::post::{DotScreenParams, PassContext, PassTarget, PostChain, ScenePass, ShaderPass};
use crate::sphere::{CameraSlot, SceneRenderer};
use crate::uniforms::TextureHandle;

use super::faces::GpuFaceRenderer;
use super::helpers::{log_first_frame, surface_recovery, SurfaceRecovery};

pub struct RenderState {
    pub gpu: GpuContext,
    scene_renderer: SceneRenderer,
    environment: CubeRenderTarget,
    chain: PostChain,
    timer: FrameTimer,
}

impl RenderState {
    /// Create the GPU context for `window` and upload the scene.
    pub async fn new(
        window: Arc<Window>,
        state: &SceneState,
        config: &GlintConfig,
    ) -> Result<Self, RendererError> {
        let size = state.display.drawing_buffer();
        let gpu = GpuContext::new(window, size).await?;

        let environment = CubeRenderTarget::new(
            &gpu.device,
            state.capture.texture(),
            state.capture.resolution(),
            state.capture.mip_level_count(),
        );
        let scene_renderer = SceneRenderer::new(&gpu.device, &state.scene, &environment);

        let params = DotScreenParams::from_config(&config.post);
        let mut chain = PostChain::new();
        chain.add_pass(Box::new(ScenePass::new()))?;
        chain.add_pass(Box::new(ShaderPass::dot_screen(&gpu.device, &params)?))?;
        chain.set_size(&gpu.device, gpu.size.width, gpu.size.height);

        tracing::info!(
            "render state ready: {}x{} drawing buffer, {} post passes",
            gpu.size.width,
            gpu.size.height,
            chain.len()
        );

        Ok(Self {
            gpu,
            scene_renderer,
            environment,
            chain,
            timer: FrameTimer::default(),
        })
    }

    /// Reconfigure the surface and post buffers for a new display size.
    pub fn resize(&mut self, display: &DisplaySize) {
        let size = display.drawing_buffer();
        if size == self.gpu.size {
            return;
        }
        self.gpu.resize(size.width, size.height);
        self.chain
            .set_size(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }

    /// Run one frame's commands in order, recording into a single encoder.
    ///
    /// A lost or outdated surface drops the frame and reconfigures; the
    /// next tick renders normally.
    pub fn execute(
        &mut self,
        state: &mut SceneState,
        plan: &FramePlan,
    ) -> Result<(), RendererError> {
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("glint frame encoder"),
            });

        let mut captured: Option<TextureHandle> = None;
        let mut output: Option<wgpu::SurfaceTexture> = None;

        for command in &plan.commands {
            match *command {
                RenderCommand::CaptureEnvironment { exclude } => {
                    let mut faces = GpuFaceRenderer {
                        queue: &self.gpu.queue,
                        encoder: &mut encoder,
                        renderer: &self.scene_renderer,
                        target: &self.environment,
                    };
                    captured = Some(state.capture_environment(exclude, &mut faces)?);
                }
                RenderCommand::BindEnvironment => match captured {
                    Some(handle) => state.bind_environment(handle)?,
                    None => tracing::warn!("no capture this frame, keeping previous cubemap"),
                },
                RenderCommand::RenderChain => {
                    let texture = match self.gpu.current_texture() {
                        Ok(t) => t,
                        Err(e) => match surface_recovery(&e) {
                            SurfaceRecovery::Reconfigure => {
                                tracing::debug!("surface {e}, reconfiguring");
                                self.gpu.reconfigure();
                                return Ok(());
                            }
                            SurfaceRecovery::Skip => {
                                tracing::debug!("surface {e}, skipping frame");
                                return Ok(());
                            }
                            SurfaceRecovery::Fatal => {
                                tracing::error!("Failed to get surface texture: {e}");
                                return Err(e.into());
                            }
                        },
                    };
                    let view = texture
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    self.scene_renderer.upload(&self.gpu.queue, &state.scene)?;
                    self.scene_renderer.write_camera(
                        &self.gpu.queue,
                        CameraSlot::Main,
                        &CameraBlock::new(state.camera.view_projection(), state.camera.position),
                    );

                    let mut ctx = PassContext {
                        device: &self.gpu.device,
                        queue: &self.gpu.queue,
                        encoder: &mut encoder,
                        scene: &state.scene,
                        renderer: &self.scene_renderer,
                    };
                    self.chain.render(
                        &mut ctx,
                        PassTarget {
                            view: &view,
                            format: self.gpu.format(),
                        },
                    )?;
                    output = Some(texture);
                }
                RenderCommand::Present => break,
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        match output {
            Some(texture) => {
                texture.present();
                log_first_frame(self.gpu.size, self.gpu.format(), self.environment.resolution());
            }
            None => tracing::warn!("frame plan rendered nothing to present"),
        }

        let now = Instant::now();
        self.timer.frame(now);
        if let Some(stats) = self.timer.report_due(now) {
            tracing::debug!(
                "{:.1} fps, {:.2} ms/frame over {} frames",
                stats.fps,
                stats.mean_frame_ms,
                stats.samples
            );
        }

        Ok(())
    }
}
