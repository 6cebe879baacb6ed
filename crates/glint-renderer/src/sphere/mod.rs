//! Sphere meshes: UV-sphere generation and the wgpu pipelines that draw
//! the scene's mesh nodes.

mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
