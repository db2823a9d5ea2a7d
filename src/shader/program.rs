use std::ffi::CString;
use std::ptr;

use gl::types::{GLchar, GLenum, GLuint};
use log::{error, warn};

use super::{ShaderError, ShaderSource};

/// GL's null object name, returned by [`compile_stage`] when compilation
/// fails.
pub const NO_STAGE: GLuint = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Outcome of linking: `Degraded` means the program linked against failed
/// or missing stages and rendering results are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    Ready,
    Degraded,
}

pub struct ShaderProgram {
    id: GLuint,
    state: ProgramState,
}

/// Compiles `source` as a shader stage of the given kind.
///
/// On compiler failure the full info log is written to the error log,
/// attributed to the stage by name, the stage object is deleted, and
/// [`NO_STAGE`] is returned; callers must check for the sentinel. Only an
/// interior NUL byte in the source text is a hard error.
pub fn compile_stage(stage: ShaderStage, source: &str) -> Result<GLuint, ShaderError> {
    let c_source = CString::new(source.as_bytes())?;

    let shader = unsafe { gl::CreateShader(stage.gl_kind()) };
    unsafe {
        gl::ShaderSource(shader, 1, &c_source.as_ptr(), ptr::null());
        gl::CompileShader(shader);
    }

    let mut success = 1;
    unsafe {
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        error!(
            "Failed to compile {} shader!\n{}",
            stage.name(),
            shader_info_log(shader)
        );
        unsafe {
            gl::DeleteShader(shader);
        }
        return Ok(NO_STAGE);
    }

    Ok(shader)
}

impl ShaderProgram {
    /// Compiles both stages of `source` and links them into one program.
    ///
    /// Stage compile failures are not fatal: the sentinel handle is
    /// attached in place of the failed stage and the returned program is
    /// marked [`ProgramState::Degraded`] when linking does not succeed.
    /// The stage handles are deleted after attachment; the linked program
    /// keeps its own copy of the compiled code.
    pub fn build(source: &ShaderSource) -> Result<Self, ShaderError> {
        let vertex_shader = compile_stage(ShaderStage::Vertex, &source.vertex)?;
        let fragment_shader = compile_stage(ShaderStage::Fragment, &source.fragment)?;

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::LinkProgram(program);
            gl::ValidateProgram(program);
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
        }

        let mut linked = 1;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut linked);
        }

        let state = if linked == 0 {
            warn!(
                "Shader program failed to link:\n{}",
                program_info_log(program)
            );
            ProgramState::Degraded
        } else {
            let mut valid = 1;
            unsafe {
                gl::GetProgramiv(program, gl::VALIDATE_STATUS, &mut valid);
            }
            if valid == 0 {
                warn!(
                    "Shader program failed validation:\n{}",
                    program_info_log(program)
                );
            }
            ProgramState::Ready
        };

        Ok(ShaderProgram { id: program, state })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn state(&self) -> ProgramState {
        self.state
    }

    pub fn is_degraded(&self) -> bool {
        self.state == ProgramState::Degraded
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn shader_info_log(shader: GLuint) -> String {
    let mut len = 0;
    unsafe {
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    }

    let log = create_whitespace_cstring_with_len(len as usize);
    unsafe {
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
    }
    log.to_string_lossy().into_owned()
}

fn program_info_log(program: GLuint) -> String {
    let mut len = 0;
    unsafe {
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
    }

    let log = create_whitespace_cstring_with_len(len as usize);
    unsafe {
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
    }
    log.to_string_lossy().into_owned()
}

fn create_whitespace_cstring_with_len(len: usize) -> CString {
    // Allocate buffer of correct size
    let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
    // Fill it with spaces
    buffer.extend([b' '].iter().cycle().take(len));
    // Convert buffer to CString
    unsafe { CString::from_vec_unchecked(buffer) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(ShaderStage::Vertex.name(), "vertex");
        assert_eq!(ShaderStage::Fragment.name(), "fragment");
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        // No GL context needed: CString conversion happens first.
        let result = compile_stage(ShaderStage::Vertex, "void main\0() {}");
        assert!(matches!(result, Err(ShaderError::Nul(_))));
    }
}
