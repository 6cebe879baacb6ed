//! Live config reload manager.
//!
//! Combines the file watcher with config loading so edits to the config
//! file (the scene colors in particular) reach the running renderer.

mod manager;


pub use manager::ReloadManager;
