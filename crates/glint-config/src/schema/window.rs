//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window size and pixel density settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial logical width (valid range: 64-16384).
    pub width: u32,
    /// Initial logical height (valid range: 64-16384).
    pub height: u32,
    /// Upper bound on the device pixel ratio used for the drawing buffer
    /// (valid range: 0.5-4.0).
    pub max_pixel_ratio: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glint".into(),
            width: 1280,
            height: 800,
            max_pixel_ratio: 2.0,
        }
    }
}
