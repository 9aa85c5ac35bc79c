use std::sync::{Arc, OnceLock};

use crate::{AttribFormat, Color, Matrix4, Vector};

static BACKEND: OnceLock<Arc<dyn ShaderBackend>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("a shader backend is already installed")]
    BackendAlreadyInstalled,
}

/// A single uniform upload. Struct uniforms arrive already split into their
/// members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue<'a> {
    Int(i32),
    Float(f32),
    Bool(bool),
    Vector(&'a Vector),
    Color(&'a Color),
    Matrix4(&'a Matrix4),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribPointer {
    pub location: u32,
    pub components: u32,
    pub format: AttribFormat,
    pub stride: u32,
    pub offset: u32,
}

/// The graphics API side of a [`crate::Shader`]. `program` is the shader's
/// base name.
pub trait ShaderBackend: Send + Sync {
    fn set_uniform(&self, program: &str, name: &str, value: UniformValue<'_>);

    fn vertex_attrib_pointer(&self, program: &str, pointer: AttribPointer);
}

/// Installs the backend used by every [`crate::Shader`] created with
/// [`crate::Shader::new`]. Only the first call wins.
pub fn install_backend(backend: Arc<dyn ShaderBackend>) -> Result<(), RuntimeError> {
    BACKEND
        .set(backend)
        .map_err(|_| RuntimeError::BackendAlreadyInstalled)
}

pub fn installed_backend() -> Option<&'static Arc<dyn ShaderBackend>> {
    BACKEND.get()
}
