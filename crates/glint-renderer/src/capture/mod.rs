//! Environment cubemap capture for the reflective sphere.
//!
//! Sequencing lives in [`EnvironmentCapture`] and is GPU-agnostic; the
//! wgpu target it renders into is [`CubeRenderTarget`].

mod face;
mod target;
mod unit;

pub use face::*;
pub use target::*;
pub use unit::*;
