//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the scene, the GPU renderer and the live
//! config receiver.

mod core;
mod event_handler;
mod init;
mod input;
mod reload;

pub use core::GlintApp;
