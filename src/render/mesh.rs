use bytemuck::{Pod, Zeroable};
use gl::types::{GLsizei, GLuint};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

pub struct VertexBuffer {
    id: GLuint,
}

impl VertexBuffer {
    /// Creates the buffer, leaves it bound to `ARRAY_BUFFER`, and uploads
    /// `vertices` with static-draw usage.
    pub fn new(vertices: &[Vertex]) -> Self {
        let mut id = 0;
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as isize,
                bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
        }
        Self { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.id);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

pub struct IndexBuffer {
    id: GLuint,
    count: GLsizei,
}

impl IndexBuffer {
    pub fn new(indices: &[u32]) -> Self {
        let mut id = 0;
        let bytes: &[u8] = bytemuck::cast_slice(indices);
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                bytes.len() as isize,
                bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
        }
        Self {
            id,
            count: indices.len() as GLsizei,
        }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id);
        }
    }

    /// Number of indices in the buffer, for the draw call.
    pub fn count(&self) -> GLsizei {
        self.count
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
            gl::BindVertexArray(id);
        }
        Self { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    /// Describes attribute 0 as two tightly packed floats per vertex,
    /// sourced from the currently bound vertex buffer.
    pub fn set_position_layout(&self) {
        self.bind();
        unsafe {
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                std::mem::size_of::<Vertex>() as i32,
                std::ptr::null(),
            );
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 2 * std::mem::size_of::<f32>());

        let vertices = [Vertex::new(-0.5, 0.5)];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 8);
    }
}
