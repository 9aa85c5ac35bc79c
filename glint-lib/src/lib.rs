//! Runtime surface for bindings produced by `glint-shader`.
//!
//! Generated code imports [`prelude`] and drives a [`Shader`], which forwards
//! every upload to a [`ShaderBackend`]. Install one backend per process with
//! [`install_backend`], or hand one to [`Shader::with_backend`].

mod backend;
mod shader;
mod types;

pub use backend::{
    install_backend, installed_backend, AttribPointer, RuntimeError, ShaderBackend, UniformValue,
};
pub use shader::Shader;
pub use types::{AttribFormat, Color, DirectionalLight, Material, Matrix4, PointLight, Vector};

pub mod prelude {
    pub use crate::{
        AttribFormat, Color, DirectionalLight, Material, Matrix4, PointLight, Shader, Vector,
    };
}
