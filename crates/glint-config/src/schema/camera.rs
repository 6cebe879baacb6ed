//! Main camera and orbit control settings.

use serde::{Deserialize, Serialize};

/// Perspective camera and damped orbit controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 1-179).
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub enable_damping: bool,
    /// Fraction of pending input applied per tick (valid range: 0.0 exclusive - 1.0).
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 100.0,
            position: [0.0, 0.0, 0.5],
            target: [0.0, 0.0, 0.0],
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: 50.0,
        }
    }
}
