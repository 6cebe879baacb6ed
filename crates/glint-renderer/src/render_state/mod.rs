//! GPU executor: owns the device, the environment cubemap target, the mesh
//! renderer and the post chain, and carries out each frame's
//! [`FramePlan`](crate::frame::FramePlan).

mod faces;
mod helpers;
mod state;

pub use state::RenderState;
