//! Camera and orbit control validation.

use crate::schema::GlintConfig;

use super::helpers::{validate_positive, validate_range_f32};

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &GlintConfig) {
    let camera = &config.camera;
    validate_range_f32(errors, "camera.fov", camera.fov, 1.0, 179.0);
    validate_positive(errors, "camera.near", camera.near);
    if !(camera.far > camera.near) {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
    if !(camera.damping_factor > 0.0 && camera.damping_factor <= 1.0) {
        errors.push(format!(
            "camera.damping_factor = {} is out of range (0, 1]",
            camera.damping_factor
        ));
    }
    validate_positive(errors, "camera.rotate_speed", camera.rotate_speed);
    validate_positive(errors, "camera.zoom_speed", camera.zoom_speed);
    if !(camera.min_distance >= 0.0 && camera.max_distance > camera.min_distance) {
        errors.push(format!(
            "camera distance range [{}, {}] is invalid",
            camera.min_distance, camera.max_distance
        ));
    }
}
