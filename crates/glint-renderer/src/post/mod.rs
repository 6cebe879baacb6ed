//! Post-processing: a scene render followed by full-screen effects.

mod chain;
mod scene_pass;
mod shader_pass;

pub use chain::*;
pub use scene_pass::*;
pub use shader_pass::*;
