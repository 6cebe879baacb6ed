//! Environment capture sequencing.
//!
//! The excluded node is hidden for the whole capture so it never appears
//! in its own reflection, then shown again before the handle is returned.

use glam::{Mat4, Vec3};
use glint_common::SceneError;
use glint_config::schema::CaptureConfig;

use crate::scene::{NodeId, Scene};
use crate::uniforms::TextureHandle;

use super::face::CubeFace;

/// Camera for one face of a capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCamera {
    pub face: CubeFace,
    pub position: Vec3,
    pub view_proj: Mat4,
}

/// Backend that draws the scene into one cube face at a time.
pub trait CubeFaceRenderer {
    /// Render every visible mesh of `scene` into `camera.face`.
    fn render_face(&mut self, scene: &Scene, camera: &FaceCamera);

    /// Called once after all six faces; generates the mip chain.
    fn finish(&mut self);
}

/// A cube camera co-located with the reflective node.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentCapture {
    texture: TextureHandle,
    position: Vec3,
    near: f32,
    far: f32,
    resolution: u32,
}

impl EnvironmentCapture {
    pub fn new(texture: TextureHandle, position: Vec3, config: &CaptureConfig) -> Self {
        Self {
            texture,
            position,
            near: config.near,
            far: config.far,
            resolution: config.resolution.max(1),
        }
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Face edge length in texels.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// `log2(resolution) + 1`: a full chain down to 1x1.
    pub fn mip_level_count(&self) -> u32 {
        self.resolution.ilog2() + 1
    }

    pub fn face_cameras(&self) -> [FaceCamera; 6] {
        CubeFace::ALL.map(|face| FaceCamera {
            face,
            position: self.position,
            view_proj: face.view_projection(self.position, self.near, self.far),
        })
    }

    /// Render the scene around the capture point into the cube target,
    /// with `exclude` hidden throughout.
    pub fn capture(
        &self,
        scene: &mut Scene,
        exclude: NodeId,
        renderer: &mut dyn CubeFaceRenderer,
    ) -> Result<TextureHandle, SceneError> {
        scene.set_visible(exclude, false)?;
        for camera in self.face_cameras() {
            renderer.render_face(scene, &camera);
        }
        renderer.finish();
        scene.set_visible(exclude, true)?;
        Ok(self.texture)
    }
}
