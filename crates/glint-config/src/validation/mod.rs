//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod camera;
mod helpers;
mod palette;
mod scene;

#[cfg(test)]
mod tests;

use crate::schema::GlintConfig;
use glint_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlintConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_window(&mut errors, config);
    palette::validate_colors(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    scene::validate_scene(&mut errors, config);
    scene::validate_light(&mut errors, config);
    scene::validate_capture(&mut errors, config);
    scene::validate_post(&mut errors, config);
    scene::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
