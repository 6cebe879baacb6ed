//! Pass 0 of the chain: draws the scene through the main camera.

use crate::gpu::{DEPTH_FORMAT, SCENE_COLOR_FORMAT};
use crate::sphere::CameraSlot;

use super::chain::{Pass, PassContext, PassKind, PassTarget};

pub struct ScenePass {
    depth: Option<wgpu::TextureView>,
}

impl ScenePass {
    pub fn new() -> Self {
        Self { depth: None }
    }
}

impl Default for ScenePass {
    fn default() -> Self {
        Self::new()
    }
}

impl Pass for ScenePass {
    fn kind(&self) -> PassKind {
        PassKind::Scene
    }

    fn label(&self) -> &str {
        "scene"
    }

    fn set_size(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene depth"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        self.depth = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
    }

    fn render(
        &mut self,
        ctx: &mut PassContext<'_>,
        _input: Option<&wgpu::TextureView>,
        output: PassTarget<'_>,
    ) {
        let Some(depth) = &self.depth else {
            tracing::warn!("scene pass rendered before set_size, skipping");
            return;
        };
        if output.format != SCENE_COLOR_FORMAT {
            tracing::warn!("scene pass cannot target {:?}, skipping", output.format);
            return;
        }
        ctx.renderer
            .render(ctx.encoder, ctx.scene, CameraSlot::Main, output.view, depth);
    }
}
