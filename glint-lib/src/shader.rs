use std::sync::Arc;

use tracing::trace;

use crate::{
    backend::{installed_backend, AttribPointer, ShaderBackend, UniformValue},
    AttribFormat, Color, DirectionalLight, Material, Matrix4, PointLight, Vector,
};

/// Handle to one shader program, named after its `.vert`/`.frag` stem.
///
/// Generated bindings wrap a `Shader` and call its `set_*` primitives.
pub struct Shader {
    name: String,
    backend: Option<Arc<dyn ShaderBackend>>,
}

impl std::fmt::Debug for Shader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shader")
            .field("name", &self.name)
            .field("backend", &self.backend.is_some())
            .finish()
    }
}

impl Shader {
    /// Uses whatever backend [`crate::install_backend`] registered, looked up
    /// on every call.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: None,
        }
    }

    pub fn with_backend(name: impl Into<String>, backend: Arc<dyn ShaderBackend>) -> Self {
        Self {
            name: name.into(),
            backend: Some(backend),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn backend(&self) -> Option<&dyn ShaderBackend> {
        match &self.backend {
            Some(backend) => Some(backend.as_ref()),
            None => installed_backend().map(|backend| backend.as_ref()),
        }
    }

    fn upload(&self, name: &str, value: UniformValue<'_>) {
        match self.backend() {
            Some(backend) => backend.set_uniform(&self.name, name, value),
            None => trace!(shader = %self.name, uniform = name, "no shader backend, dropping uniform"),
        }
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.upload(name, UniformValue::Int(value));
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.upload(name, UniformValue::Float(value));
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.upload(name, UniformValue::Bool(value));
    }

    pub fn set_vector(&self, name: &str, value: &Vector) {
        self.upload(name, UniformValue::Vector(value));
    }

    pub fn set_color(&self, name: &str, value: &Color) {
        self.upload(name, UniformValue::Color(value));
    }

    pub fn set_matrix4(&self, name: &str, value: &Matrix4) {
        self.upload(name, UniformValue::Matrix4(value));
    }

    pub fn set_material(&self, name: &str, value: &Material) {
        self.set_color(&format!("{name}.diffuse"), &value.diffuse);
        self.set_color(&format!("{name}.specular"), &value.specular);
        self.set_float(&format!("{name}.shininess"), value.shininess);
    }

    pub fn set_directional_light(&self, name: &str, value: &DirectionalLight) {
        self.set_vector(&format!("{name}.direction"), &value.direction);
        self.set_color(&format!("{name}.ambient"), &value.ambient);
        self.set_color(&format!("{name}.diffuse"), &value.diffuse);
        self.set_color(&format!("{name}.specular"), &value.specular);
    }

    pub fn set_point_light(&self, name: &str, value: &PointLight) {
        self.set_vector(&format!("{name}.position"), &value.position);
        self.set_color(&format!("{name}.ambient"), &value.ambient);
        self.set_color(&format!("{name}.diffuse"), &value.diffuse);
        self.set_color(&format!("{name}.specular"), &value.specular);
        self.set_float(&format!("{name}.constant"), value.constant);
        self.set_float(&format!("{name}.linear"), value.linear);
        self.set_float(&format!("{name}.quadratic"), value.quadratic);
    }

    pub fn vertex_attrib_pointer(
        &self,
        location: u32,
        components: u32,
        format: AttribFormat,
        stride: u32,
        offset: u32,
    ) {
        let pointer = AttribPointer {
            location,
            components,
            format,
            stride,
            offset,
        };
        match self.backend() {
            Some(backend) => backend.vertex_attrib_pointer(&self.name, pointer),
            None => trace!(shader = %self.name, location, "no shader backend, dropping attribute pointer"),
        }
    }
}
