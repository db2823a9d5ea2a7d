pub mod debug;
pub mod mesh;

pub use debug::{check_gl_errors, clear_gl_errors};
pub use mesh::{IndexBuffer, Vertex, VertexArray, VertexBuffer};
