//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_glint_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        glint_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[colors]
accent = "#102030"

[post]
dot_screen_scale = 8.0
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.colors.accent, "#102030");
    assert!((config.post.dot_screen_scale - 8.0).abs() < f32::EPSILON);
    // Defaults preserved
    assert_eq!(config.colors.base, "#789E71");
    assert_eq!(config.capture.resolution, 256);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, glint_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[camera]
fov = 500.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.camera.fov - 500.0).abs() < f32::EPSILON);
}

#[test]
fn load_or_create_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glint").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.colors.base, "#789E71");

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.colors.second, "#E09442");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::GlintConfig;

    let config: GlintConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.colors.base, "#789E71");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("glint"));
        assert!(path_str.ends_with("config.toml"));
    }
}
