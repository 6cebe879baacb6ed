//! Typed shader uniform values and per-program schemas.
//!
//! Every program declares the uniforms it reads as a static
//! [`UniformSchema`]. A [`UniformSet`] can only be built when it provides
//! exactly those uniforms with matching kinds, so no program is ever
//! drawn with an undefined input.

use std::collections::BTreeMap;

use glint_common::SceneError;

/// Opaque reference to a GPU texture owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Float,
    Vec3,
    Cubemap,
}

impl UniformKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniformKind::Float => "float",
            UniformKind::Vec3 => "vec3",
            UniformKind::Cubemap => "cubemap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec3([f32; 3]),
    Cubemap(TextureHandle),
}

impl UniformValue {
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Cubemap(_) => UniformKind::Cubemap,
        }
    }
}

/// The uniforms a shader program reads, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSchema {
    pub program: &'static str,
    pub entries: &'static [(&'static str, UniformKind)],
}

impl UniformSchema {
    #[cfg(test)]
    pub(crate) fn kind_of(&self, name: &str) -> Option<UniformKind> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, kind)| *kind)
    }

    fn unknown(&self, name: &str) -> SceneError {
        SceneError::UnknownUniform {
            program: self.program.to_string(),
            name: name.to_string(),
        }
    }
}

fn mismatch(name: &str, expected: UniformKind, actual: UniformKind) -> SceneError {
    SceneError::UniformKindMismatch {
        name: name.to_string(),
        expected: expected.as_str(),
        actual: actual.as_str(),
    }
}

/// Current values for one program's uniforms, always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformSet {
    schema: UniformSchema,
    values: BTreeMap<&'static str, UniformValue>,
}

impl UniformSet {
    /// Validate `values` against `schema`.
    ///
    /// Fails on a name given twice, then on the first unknown name, kind
    /// mismatch, or missing entry.
    pub fn new<'a, I>(schema: UniformSchema, values: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = (&'a str, UniformValue)>,
    {
        let mut provided: BTreeMap<&str, UniformValue> = BTreeMap::new();
        for (name, value) in values {
            if provided.insert(name, value).is_some() {
                return Err(SceneError::DuplicateUniform {
                    program: schema.program.to_string(),
                    name: name.to_string(),
                });
            }
        }

        let mut checked = BTreeMap::new();
        for (name, value) in &provided {
            let (entry, expected) = schema
                .entries
                .iter()
                .find(|(entry, _)| entry == name)
                .ok_or_else(|| schema.unknown(name))?;
            if *expected != value.kind() {
                return Err(mismatch(name, *expected, value.kind()));
            }
            checked.insert(*entry, *value);
        }

        if let Some((missing, _)) = schema
            .entries
            .iter()
            .find(|(entry, _)| !checked.contains_key(entry))
        {
            return Err(SceneError::MissingUniform {
                program: schema.program.to_string(),
                name: missing.to_string(),
            });
        }

        Ok(Self {
            schema,
            values: checked,
        })
    }

    pub fn schema(&self) -> &UniformSchema {
        &self.schema
    }

    /// Replace a value; the name must exist and the kind must match.
    pub fn set(&mut self, name: &str, value: UniformValue) -> Result<(), SceneError> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| self.schema.unknown(name))?;
        if slot.kind() != value.kind() {
            return Err(mismatch(name, slot.kind(), value.kind()));
        }
        *slot = value;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<UniformValue, SceneError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| self.schema.unknown(name))
    }

    pub fn float(&self, name: &str) -> Result<f32, SceneError> {
        match self.get(name)? {
            UniformValue::Float(v) => Ok(v),
            other => Err(mismatch(name, UniformKind::Float, other.kind())),
        }
    }

    pub fn vec3(&self, name: &str) -> Result<[f32; 3], SceneError> {
        match self.get(name)? {
            UniformValue::Vec3(v) => Ok(v),
            other => Err(mismatch(name, UniformKind::Vec3, other.kind())),
        }
    }

    pub fn cubemap(&self, name: &str) -> Result<TextureHandle, SceneError> {
        match self.get(name)? {
            UniformValue::Cubemap(v) => Ok(v),
            other => Err(mismatch(name, UniformKind::Cubemap, other.kind())),
        }
    }
}
