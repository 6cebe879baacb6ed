//! Tunable scene colors.

use serde::{Deserialize, Serialize};

/// The three big sphere colors as `#RRGGBB` strings.
///
/// Edited live: when the config file changes on disk, each value is pushed
/// through the color parameter store into the sphere material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub base: String,
    pub accent: String,
    pub second: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            base: "#789E71".into(),
            accent: "#000000".into(),
            second: "#E09442".into(),
        }
    }
}

impl ColorConfig {
    /// `(panel name, value)` pairs in panel order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("baseColor", self.base.as_str()),
            ("accentColor", self.accent.as_str()),
            ("secondColor", self.second.as_str()),
        ]
    }
}
