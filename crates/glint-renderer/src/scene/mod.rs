//! Scene graph, main camera and orbit controls.

mod camera;
mod controls;
mod graph;

pub use camera::*;
pub use controls::*;
pub use graph::*;
