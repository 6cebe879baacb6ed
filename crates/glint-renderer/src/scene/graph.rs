//! Flat scene graph: one root holding mesh and light nodes.

use glam::{Mat4, Quat, Vec3};
use glint_common::SceneError;

use crate::material::{LightParams, MaterialId, ShaderMaterial};
use crate::sphere::{GeometryId, SphereGeometry};
use crate::uniforms::TextureHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    Mesh {
        geometry: GeometryId,
        material: MaterialId,
    },
    PointLight(PointLight),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub position: Vec3,
    /// Rotation about the Y axis in radians.
    pub rotation_y: f32,
    pub scale: f32,
    pub visible: bool,
}

impl Node {
    fn new(name: &str, kind: NodeKind, position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            kind,
            position,
            rotation_y: 0.0,
            scale: 1.0,
            visible: true,
        }
    }

    /// Local-to-world transform: translate, then rotate, then scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }
}

/// A mesh node resolved to its geometry and material ids.
#[derive(Debug, Clone, Copy)]
pub struct MeshRef<'a> {
    pub id: NodeId,
    pub node: &'a Node,
    pub geometry: GeometryId,
    pub material: MaterialId,
}

#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    geometries: Vec<SphereGeometry>,
    materials: Vec<ShaderMaterial>,
    next_texture: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_geometry(&mut self, geometry: SphereGeometry) -> GeometryId {
        self.geometries.push(geometry);
        GeometryId(self.geometries.len() - 1)
    }

    pub fn add_material(&mut self, material: ShaderMaterial) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_mesh(
        &mut self,
        name: &str,
        geometry: GeometryId,
        material: MaterialId,
        position: Vec3,
    ) -> NodeId {
        self.push(Node::new(name, NodeKind::Mesh { geometry, material }, position))
    }

    pub fn add_point_light(&mut self, name: &str, light: PointLight, position: Vec3) -> NodeId {
        self.push(Node::new(name, NodeKind::PointLight(light), position))
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Reserve a handle for a renderer-owned texture.
    pub fn allocate_texture(&mut self) -> TextureHandle {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        handle
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(id.0).ok_or(SceneError::UnknownNode(id.0))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(id.0).ok_or(SceneError::UnknownNode(id.0))
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), SceneError> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    pub fn is_visible(&self, id: NodeId) -> Result<bool, SceneError> {
        Ok(self.node(id)?.visible)
    }

    pub fn geometry(&self, id: GeometryId) -> Option<&SphereGeometry> {
        self.geometries.get(id.0)
    }

    pub fn material(&self, id: MaterialId) -> Option<&ShaderMaterial> {
        self.materials.get(id.0)
    }

    /// Material of a mesh node.
    pub fn material_of(&self, id: NodeId) -> Result<&ShaderMaterial, SceneError> {
        match self.node(id)?.kind {
            NodeKind::Mesh { material, .. } => self
                .materials
                .get(material.0)
                .ok_or(SceneError::UnknownNode(id.0)),
            NodeKind::PointLight(_) => Err(SceneError::UnknownNode(id.0)),
        }
    }

    pub fn material_of_mut(&mut self, id: NodeId) -> Result<&mut ShaderMaterial, SceneError> {
        match self.node(id)?.kind {
            NodeKind::Mesh { material, .. } => self
                .materials
                .get_mut(material.0)
                .ok_or(SceneError::UnknownNode(id.0)),
            NodeKind::PointLight(_) => Err(SceneError::UnknownNode(id.0)),
        }
    }

    /// All mesh nodes in insertion order, visible or not.
    pub fn meshes(&self) -> impl Iterator<Item = MeshRef<'_>> {
        self.nodes.iter().enumerate().filter_map(|(i, node)| match node.kind {
            NodeKind::Mesh { geometry, material } => Some(MeshRef {
                id: NodeId(i),
                node,
                geometry,
                material,
            }),
            NodeKind::PointLight(_) => None,
        })
    }

    /// Mesh nodes that take part in the next render.
    pub fn visible_meshes(&self) -> impl Iterator<Item = MeshRef<'_>> {
        self.meshes().filter(|mesh| mesh.node.visible)
    }

    /// The first visible point light, or a dark light when there is none.
    pub fn light(&self) -> LightParams {
        self.nodes
            .iter()
            .find_map(|node| match node.kind {
                NodeKind::PointLight(light) if node.visible => Some(LightParams {
                    position: node.position,
                    color: light.color,
                    intensity: light.intensity,
                }),
                _ => None,
            })
            .unwrap_or_default()
    }
}
