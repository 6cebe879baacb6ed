use crate::capture::{CubeFaceRenderer, CubeRenderTarget, FaceCamera};
use crate::material::CameraBlock;
use crate::scene::Scene;
use crate::sphere::{CameraSlot, SceneRenderer};

/// Records the six capture passes into the frame's encoder.
pub(super) struct GpuFaceRenderer<'a> {
    pub queue: &'a wgpu::Queue,
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub renderer: &'a SceneRenderer,
    pub target: &'a CubeRenderTarget,
}

impl CubeFaceRenderer for GpuFaceRenderer<'_> {
    fn render_face(&mut self, scene: &Scene, camera: &FaceCamera) {
        let slot = CameraSlot::Face(camera.face);
        self.renderer.write_camera(
            self.queue,
            slot,
            &CameraBlock::new(camera.view_proj, camera.position),
        );
        self.renderer.render(
            self.encoder,
            scene,
            slot,
            self.target.face_view(camera.face),
            self.target.depth_view(),
        );
    }

    fn finish(&mut self) {
        self.target.generate_mipmaps(self.encoder);
    }
}
