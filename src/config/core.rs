use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable holding the path to the two-section shader file.
pub const SHADER_PATH_ENV: &str = "SHADER_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} for shader path not set")]
    MissingShaderPath(&'static str),
}

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Glimmer".to_string(),
            width: 640,
            height: 480,
        }
    }
}

/// Process-wide settings, resolved once at startup and passed down
/// explicitly instead of being looked up where they are used.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub shader_path: PathBuf,
    pub window: WindowConfig,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// A missing [`SHADER_PATH_ENV`] is a startup error; callers are
    /// expected to treat it as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let shader_path = env::var_os(SHADER_PATH_ENV)
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingShaderPath(SHADER_PATH_ENV))?;

        Ok(Self {
            shader_path,
            window: WindowConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_set_and_missing() {
        // Both cases in one test so no parallel test races on the variable.
        env::set_var(SHADER_PATH_ENV, "/tmp/basic.shader");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.shader_path, PathBuf::from("/tmp/basic.shader"));
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);

        env::remove_var(SHADER_PATH_ENV);
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingShaderPath(_))
        ));
    }
}
