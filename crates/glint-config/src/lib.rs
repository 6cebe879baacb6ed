//! glint configuration system.
//!
//! Provides TOML-based configuration with live reload and full validation.
//! All config sections use sensible defaults so partial configs work out
//! of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glint_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use reload::ReloadManager;
pub use schema::{GlintConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use glint_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing file is created from the commented default template. The
/// result is validated; invalid configs are an error here, unlike
/// [`toml_loader::load_from_path`] which only warns.
pub fn load_config(path: Option<&Path>) -> Result<GlintConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_or_create(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GlintConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
