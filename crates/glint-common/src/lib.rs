pub mod errors;
pub mod types;

pub use errors::{ConfigError, GlintError, SceneError};
pub use types::{ColorName, Rgb8};

pub type Result<T> = std::result::Result<T, GlintError>;
