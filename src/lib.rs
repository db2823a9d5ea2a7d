pub mod app;
pub mod config;
pub mod render;
pub mod shader;

// Re-export commonly used types
pub use app::App;
pub use config::{AppConfig, ConfigError, WindowConfig};
pub use render::mesh::{IndexBuffer, Vertex, VertexArray, VertexBuffer};
pub use shader::program::{ProgramState, ShaderProgram, ShaderStage};
pub use shader::source::ShaderSource;
pub use shader::ShaderError;
