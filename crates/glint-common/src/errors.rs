use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Errors raised while assembling or driving the scene.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("program '{program}' requires uniform '{name}'")]
    MissingUniform { program: String, name: String },

    #[error("uniform '{name}' expects {expected}, got {actual}")]
    UniformKindMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("program '{program}' sets uniform '{name}' twice")]
    DuplicateUniform { program: String, name: String },

    #[error("program '{program}' has no uniform '{name}'")]
    UnknownUniform { program: String, name: String },

    #[error("unknown scene node: {0}")]
    UnknownNode(usize),

    #[error("post chain order: {0}")]
    ChainOrder(String),

    #[error("post chain has no passes")]
    EmptyChain,
}

#[derive(Debug, thiserror::Error)]
pub enum GlintError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("camera.fov = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: camera.fov = 0 is out of range"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn scene_error_display() {
        let err = SceneError::MissingUniform {
            program: "big_sphere".into(),
            name: "uBaseColor".into(),
        };
        assert_eq!(
            err.to_string(),
            "program 'big_sphere' requires uniform 'uBaseColor'"
        );

        let err = SceneError::UniformKindMismatch {
            name: "time".into(),
            expected: "float",
            actual: "vec3",
        };
        assert_eq!(err.to_string(), "uniform 'time' expects float, got vec3");

        let err = SceneError::DuplicateUniform {
            program: "dot_screen".into(),
            name: "scale".into(),
        };
        assert_eq!(
            err.to_string(),
            "program 'dot_screen' sets uniform 'scale' twice"
        );

        let err = SceneError::EmptyChain;
        assert_eq!(err.to_string(), "post chain has no passes");
    }

    #[test]
    fn glint_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GlintError = config_err.into();
        assert!(matches!(err, GlintError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn glint_error_from_scene() {
        let err: GlintError = SceneError::UnknownNode(7).into();
        assert!(matches!(err, GlintError::Scene(_)));
        assert_eq!(err.to_string(), "unknown scene node: 7");
    }

    #[test]
    fn glint_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GlintError = io_err.into();
        assert!(matches!(err, GlintError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn glint_error_other_variants() {
        let err = GlintError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = GlintError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
