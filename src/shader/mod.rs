pub mod program;
pub mod source;

pub use program::{ProgramState, ShaderProgram, ShaderStage};
pub use source::ShaderSource;

use std::ffi::NulError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read shader file: {0}")]
    Io(#[from] std::io::Error),

    #[error("shader source contains an interior NUL byte: {0}")]
    Nul(#[from] NulError),
}
