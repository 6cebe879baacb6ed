//! GPU uniform blocks packed from uniform sets.
//!
//! Layouts match the WGSL structs in `shaders/`. All are 16-byte aligned.

use glam::{Mat4, Vec3};
use glint_common::SceneError;

use crate::uniforms::UniformSet;

/// Bind group 0 of every mesh pipeline: one per camera slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraBlock {
    pub view_proj: [[f32; 4]; 4],
    /// World-space eye position; `w` unused.
    pub position: [f32; 4],
}

impl CameraBlock {
    pub fn new(view_proj: Mat4, position: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            position: position.extend(1.0).to_array(),
        }
    }
}

/// Point light parameters fed to the big sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightParams {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: [0.0; 3],
            intensity: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BigSphereBlock {
    pub model: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    pub accent_color: [f32; 4],
    pub second_color: [f32; 4],
    /// xyz = position, w = intensity.
    pub light: [f32; 4],
    pub light_color: [f32; 4],
    /// x = time.
    pub params: [f32; 4],
}

impl BigSphereBlock {
    pub fn pack(
        model: Mat4,
        uniforms: &UniformSet,
        light: &LightParams,
    ) -> Result<Self, SceneError> {
        let rgb = |name: &str| -> Result<[f32; 4], SceneError> {
            let [r, g, b] = uniforms.vec3(name)?;
            Ok([r, g, b, 1.0])
        };
        let [lr, lg, lb] = light.color;
        Ok(Self {
            model: model.to_cols_array_2d(),
            base_color: rgb("uBaseColor")?,
            accent_color: rgb("uAccentColor")?,
            second_color: rgb("uSecondColor")?,
            light: light.position.extend(light.intensity).to_array(),
            light_color: [lr, lg, lb, 1.0],
            params: [uniforms.float("time")?, 0.0, 0.0, 0.0],
        })
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SmallSphereBlock {
    pub model: [[f32; 4]; 4],
    /// x = time.
    pub params: [f32; 4],
}

impl SmallSphereBlock {
    pub fn pack(model: Mat4, uniforms: &UniformSet) -> Result<Self, SceneError> {
        // tCube is bound as a texture, but it must still resolve
        uniforms.cubemap("tCube")?;
        Ok(Self {
            model: model.to_cols_array_2d(),
            params: [uniforms.float("time")?, 0.0, 0.0, 0.0],
        })
    }
}

/// Uniform block of the dot-screen pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DotScreenBlock {
    pub center: [f32; 2],
    pub t_size: [f32; 2],
    pub angle: f32,
    pub scale: f32,
    pub _padding: [f32; 2],
}
