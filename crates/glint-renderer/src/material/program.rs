//! The fixed shader programs and the uniforms each one reads.

use crate::uniforms::{UniformKind, UniformSchema};

/// A WGSL program plus its uniform interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderProgram {
    pub name: &'static str,
    pub source: &'static str,
    pub schema: UniformSchema,
    /// Draw both faces instead of culling back faces.
    pub double_sided: bool,
}

impl ShaderProgram {
    pub fn cull_mode(&self) -> Option<wgpu::Face> {
        if self.double_sided {
            None
        } else {
            Some(wgpu::Face::Back)
        }
    }
}

pub const BIG_SPHERE: ShaderProgram = ShaderProgram {
    name: "big_sphere",
    source: include_str!("../shaders/big_sphere.wgsl"),
    schema: UniformSchema {
        program: "big_sphere",
        entries: &[
            ("time", UniformKind::Float),
            ("uBaseColor", UniformKind::Vec3),
            ("uAccentColor", UniformKind::Vec3),
            ("uSecondColor", UniformKind::Vec3),
        ],
    },
    double_sided: true,
};

pub const SMALL_SPHERE: ShaderProgram = ShaderProgram {
    name: "small_sphere",
    source: include_str!("../shaders/small_sphere.wgsl"),
    schema: UniformSchema {
        program: "small_sphere",
        entries: &[("time", UniformKind::Float), ("tCube", UniformKind::Cubemap)],
    },
    double_sided: false,
};

/// Full-screen halftone effect. `center`, `angle` and `tSize` are fixed
/// pass parameters, not uniforms.
pub const DOT_SCREEN: ShaderProgram = ShaderProgram {
    name: "dot_screen",
    source: include_str!("../shaders/dot_screen.wgsl"),
    schema: UniformSchema {
        program: "dot_screen",
        entries: &[("scale", UniformKind::Float)],
    },
    double_sided: true,
};

/// Pass-through blit used to present a scene render directly.
pub const COPY: ShaderProgram = ShaderProgram {
    name: "copy",
    source: include_str!("../shaders/copy.wgsl"),
    schema: UniformSchema {
        program: "copy",
        entries: &[],
    },
    double_sided: true,
};
