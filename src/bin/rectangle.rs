use anyhow::{Context as _, Result};
use log::{warn, LevelFilter};
use simple_logger::SimpleLogger;

use glimmer::{
    render::{check_gl_errors, clear_gl_errors},
    App, AppConfig, IndexBuffer, ShaderProgram, ShaderSource, Vertex, VertexArray, VertexBuffer,
};

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let mut config = AppConfig::from_env()?;
    config.window.title = "Rectangle example".to_string();

    let (app, event_loop) = App::new(&config.window)?;

    // Unique vertices
    let positions = [
        Vertex::new(-0.5, -0.5), // 0
        Vertex::new(0.5, -0.5),  // 1
        Vertex::new(0.5, 0.5),   // 2
        Vertex::new(-0.5, 0.5),  // 3
    ];

    // Index of the specific vertex
    let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];

    let vertex_array = VertexArray::new();
    let vertex_buffer = VertexBuffer::new(&positions);
    vertex_array.set_position_layout();
    let index_buffer = IndexBuffer::new(&indices);

    let source = ShaderSource::from_file(&config.shader_path)
        .with_context(|| format!("failed to load {}", config.shader_path.display()))?;

    let program = ShaderProgram::build(&source)?;
    if program.is_degraded() {
        warn!("Shader program is degraded; rendering results are undefined");
    }
    program.set_used();

    app.run(event_loop, move || {
        program.set_used();
        vertex_array.bind();
        vertex_buffer.bind();
        index_buffer.bind();

        // Draw rectangle based on the index buffer
        clear_gl_errors();
        unsafe {
            gl::DrawElements(
                gl::TRIANGLES,
                index_buffer.count(),
                gl::UNSIGNED_INT,
                std::ptr::null(),
            );
        }
        check_gl_errors("glDrawElements(TRIANGLES, 6, UNSIGNED_INT)");
    })
}
