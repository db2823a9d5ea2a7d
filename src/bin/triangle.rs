use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use glimmer::{
    App, ShaderProgram, ShaderSource, Vertex, VertexArray, VertexBuffer, WindowConfig,
};

// Vertex shader source code (Triangle points)
const VERTEX_SOURCE: &str = r#"
#version 330 core

layout(location = 0) in vec4 position;

void main()
{
    gl_Position = position;
}
"#;

// Fragment shader source code (Fill triangle with specific color)
const FRAGMENT_SOURCE: &str = r#"
#version 330 core

layout(location = 0) out vec4 color;

void main()
{
    color = vec4(1.0, 0.0, 1.0, 1.0);
}
"#;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = WindowConfig {
        title: "Triangle example".to_string(),
        ..Default::default()
    };
    let (app, event_loop) = App::new(&config)?;

    let positions = [
        Vertex::new(-0.5, -0.5),
        Vertex::new(0.0, 0.5),
        Vertex::new(0.5, -0.5),
    ];

    let vertex_array = VertexArray::new();
    let vertex_buffer = VertexBuffer::new(&positions);
    vertex_array.set_position_layout();

    let source = ShaderSource {
        vertex: VERTEX_SOURCE.to_string(),
        fragment: FRAGMENT_SOURCE.to_string(),
    };
    let program = ShaderProgram::build(&source)?;
    program.set_used();

    app.run(event_loop, move || {
        program.set_used();
        vertex_array.bind();
        vertex_buffer.bind();
        unsafe {
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
        }
    })
}
