//! Scene geometry, lighting, capture, and post-processing settings.

use serde::{Deserialize, Serialize};

/// Sphere geometry and animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub big_sphere_radius: f32,
    pub small_sphere_radius: f32,
    /// Width and height segments of both spheres (valid range: 3-512).
    pub segments: u32,
    /// Big sphere Y rotation added on every tick, in radians.
    ///
    /// Applied per tick, not per second, so the spin rate follows the
    /// display refresh rate.
    pub rotation_step: f32,
    pub small_sphere_position: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            big_sphere_radius: 1.5,
            small_sphere_radius: 0.2,
            segments: 128,
            rotation_step: 0.008,
            small_sphere_position: [0.0, 0.0, 0.0],
        }
    }
}

/// The single point light.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub color: String,
    /// Valid range: 0.0-10.0.
    pub intensity: f32,
    pub position: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".into(),
            intensity: 0.1,
            position: [2.0, 3.0, 4.0],
        }
    }
}

/// Environment cubemap capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Face edge length in texels; a power of two (valid range: 16-2048).
    pub resolution: u32,
    pub near: f32,
    pub far: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            resolution: 256,
            near: 0.1,
            far: 10.0,
        }
    }
}

/// Dot-screen post effect parameters, fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostConfig {
    /// Pattern scale (valid range: 0.0 exclusive - 64.0).
    pub dot_screen_scale: f32,
    pub dot_screen_angle: f32,
    pub dot_screen_center: [f32; 2],
    pub dot_screen_size: [f32; 2],
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            dot_screen_scale: 4.0,
            dot_screen_angle: 1.57,
            dot_screen_center: [0.5, 0.5],
            dot_screen_size: [256.0, 256.0],
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
