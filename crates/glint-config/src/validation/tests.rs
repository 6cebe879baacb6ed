//! Tests for the full validation pipeline.

use super::*;
use crate::schema::GlintConfig;

#[test]
fn default_config_validates() {
    let config = GlintConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_malformed_color() {
    let mut config = GlintConfig::default();
    config.colors.accent = "#12345".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.accent"));
}

#[test]
fn catches_fov_out_of_range() {
    let mut config = GlintConfig::default();
    config.camera.fov = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.fov"));
}

#[test]
fn catches_far_before_near() {
    let mut config = GlintConfig::default();
    config.camera.far = 0.05;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.far"));
}

#[test]
fn catches_zero_damping() {
    let mut config = GlintConfig::default();
    config.camera.damping_factor = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.damping_factor"));
}

#[test]
fn catches_non_power_of_two_capture() {
    let mut config = GlintConfig::default();
    config.capture.resolution = 300;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("power of two"));
}

#[test]
fn catches_capture_too_small() {
    let mut config = GlintConfig::default();
    config.capture.resolution = 8;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("capture.resolution"));
}

#[test]
fn catches_segments_out_of_range() {
    let mut config = GlintConfig::default();
    config.scene.segments = 2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.segments"));
}

#[test]
fn catches_negative_radius() {
    let mut config = GlintConfig::default();
    config.scene.small_sphere_radius = -0.2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.small_sphere_radius"));
}

#[test]
fn catches_pixel_ratio_out_of_range() {
    let mut config = GlintConfig::default();
    config.window.max_pixel_ratio = 8.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.max_pixel_ratio"));
}

#[test]
fn catches_post_scale_zero() {
    let mut config = GlintConfig::default();
    config.post.dot_screen_scale = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("post.dot_screen_scale"));
}

#[test]
fn catches_unknown_log_level() {
    let mut config = GlintConfig::default();
    config.logging.level = "loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GlintConfig::default();
    config.camera.fov = 200.0;
    config.colors.base = "green".into();
    config.light.intensity = 50.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.fov"));
    assert!(err.contains("colors.base"));
    assert!(err.contains("light.intensity"));
    assert_eq!(err.matches("; ").count(), 2);
}
