//! Window, scene, light, capture, post, and logging validation.

use crate::schema::GlintConfig;

use super::helpers::{validate_positive, validate_range, validate_range_f32};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GlintConfig) {
    let window = &config.window;
    validate_range(errors, "window.width", window.width, 64, 16384);
    validate_range(errors, "window.height", window.height, 64, 16384);
    if !(0.5..=4.0).contains(&window.max_pixel_ratio) {
        errors.push(format!(
            "window.max_pixel_ratio = {} is out of range [0.5, 4]",
            window.max_pixel_ratio
        ));
    }
}

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &GlintConfig) {
    let scene = &config.scene;
    validate_positive(errors, "scene.big_sphere_radius", scene.big_sphere_radius);
    validate_positive(errors, "scene.small_sphere_radius", scene.small_sphere_radius);
    validate_range(errors, "scene.segments", scene.segments, 3, 512);
    if !scene.rotation_step.is_finite() {
        errors.push(format!(
            "scene.rotation_step = {} must be finite",
            scene.rotation_step
        ));
    }
}

pub(crate) fn validate_light(errors: &mut Vec<String>, config: &GlintConfig) {
    validate_range_f32(errors, "light.intensity", config.light.intensity, 0.0, 10.0);
}

pub(crate) fn validate_capture(errors: &mut Vec<String>, config: &GlintConfig) {
    let capture = &config.capture;
    validate_range(errors, "capture.resolution", capture.resolution, 16, 2048);
    if !capture.resolution.is_power_of_two() {
        errors.push(format!(
            "capture.resolution = {} must be a power of two",
            capture.resolution
        ));
    }
    validate_positive(errors, "capture.near", capture.near);
    if !(capture.far > capture.near) {
        errors.push(format!(
            "capture.far = {} must be greater than capture.near = {}",
            capture.far, capture.near
        ));
    }
}

pub(crate) fn validate_post(errors: &mut Vec<String>, config: &GlintConfig) {
    let post = &config.post;
    if !(post.dot_screen_scale > 0.0 && post.dot_screen_scale <= 64.0) {
        errors.push(format!(
            "post.dot_screen_scale = {} is out of range (0, 64]",
            post.dot_screen_scale
        ));
    }
    validate_positive(errors, "post.dot_screen_size[0]", post.dot_screen_size[0]);
    validate_positive(errors, "post.dot_screen_size[1]", post.dot_screen_size[1]);
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &GlintConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
