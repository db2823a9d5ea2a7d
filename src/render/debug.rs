use log::error;

/// Drains any errors left in the GL error queue so a following
/// [`check_gl_errors`] only reports errors from the call under test.
pub fn clear_gl_errors() {
    while unsafe { gl::GetError() } != gl::NO_ERROR {}
}

/// Logs every queued GL error attributed to `context` (typically the draw
/// call that just ran). Returns `true` when the queue was clean.
pub fn check_gl_errors(context: &str) -> bool {
    let mut clean = true;
    loop {
        let err = unsafe { gl::GetError() };
        if err == gl::NO_ERROR {
            break;
        }
        error!("[OpenGL error] ({err:#06x}): {context}");
        clean = false;
    }
    clean
}
