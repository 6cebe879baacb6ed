//! Shader materials: a fixed program paired with a live uniform set.

mod blocks;
mod program;

pub use blocks::*;
pub use program::*;

use glint_common::SceneError;

use crate::uniforms::{TextureHandle, UniformSet, UniformValue};

/// Index of a material in the scene's material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// A program and the values of every uniform it reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderMaterial {
    program: &'static ShaderProgram,
    uniforms: UniformSet,
}

impl ShaderMaterial {
    pub fn new<'a, I>(program: &'static ShaderProgram, values: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = (&'a str, UniformValue)>,
    {
        Ok(Self {
            program,
            uniforms: UniformSet::new(program.schema, values)?,
        })
    }

    /// Big sphere material with `time = 0` and the given colors.
    pub fn big_sphere(
        base: [f32; 3],
        accent: [f32; 3],
        second: [f32; 3],
    ) -> Result<Self, SceneError> {
        Self::new(
            &BIG_SPHERE,
            [
                ("time", UniformValue::Float(0.0)),
                ("uBaseColor", UniformValue::Vec3(base)),
                ("uAccentColor", UniformValue::Vec3(accent)),
                ("uSecondColor", UniformValue::Vec3(second)),
            ],
        )
    }

    /// Small sphere material reflecting `environment`.
    pub fn small_sphere(environment: TextureHandle) -> Result<Self, SceneError> {
        Self::new(
            &SMALL_SPHERE,
            [
                ("time", UniformValue::Float(0.0)),
                ("tCube", UniformValue::Cubemap(environment)),
            ],
        )
    }

    pub fn program(&self) -> &'static ShaderProgram {
        self.program
    }

    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn set(&mut self, name: &str, value: UniformValue) -> Result<(), SceneError> {
        self.uniforms.set(name, value)
    }
}
