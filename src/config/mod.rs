pub mod core;

pub use core::{AppConfig, ConfigError, WindowConfig, SHADER_PATH_ENV};
