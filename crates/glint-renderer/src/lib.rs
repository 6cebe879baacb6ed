//! Scene, materials, environment capture and post-processing for glint,
//! plus the wgpu executor that draws them.
//!
//! Everything above [`render_state`] and [`gpu`] is plain data and can be
//! driven without a device; see [`frame::FrameDriver`].

pub mod capture;
pub mod clock;
pub mod color_store;
pub mod display;
pub mod frame;
pub mod gpu;
pub mod material;
pub mod post;
pub mod render_state;
pub mod scene;
pub mod sphere;
pub mod uniforms;

pub use clock::{Clock, FrameTimer};
pub use color_store::{ColorChange, ColorStore};
pub use display::DisplaySize;
pub use frame::{FrameDriver, FramePlan, RenderCommand, SceneState};
pub use gpu::{GpuContext, RendererError};
pub use render_state::RenderState;
