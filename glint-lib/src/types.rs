pub type Vector = glam::Vec3;
pub type Color = glam::Vec4;
pub type Matrix4 = glam::Mat4;

/// Pointer format of one vertex attribute. `Unmapped` marks an attribute
/// whose shader type has no known size; it is configured with zero
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribFormat {
    Float,
    Int,
    Unmapped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::ONE,
            specular: Color::ONE,
            shininess: 32.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vector,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}
