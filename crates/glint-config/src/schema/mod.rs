//! Configuration schema types for glint.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod camera;
mod colors;
mod scene;
mod window;

pub use camera::*;
pub use colors::*;
pub use scene::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlintConfig {
    pub window: WindowConfig,
    pub colors: ColorConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub light: LightConfig,
    pub capture: CaptureConfig,
    pub post: PostConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
