// This file is auto-generated and any change will be overwritten on the next update.

pub mod shaders {
    use glint_lib::prelude::*;
    pub struct PaletteShader {
        shader: Shader,
    }
    impl PaletteShader {
        fn new() -> Self {
            Self {
                shader: Shader::new("palette"),
            }
        }
        pub fn instance() -> &'static Self {
            static INSTANCE: std::sync::OnceLock<PaletteShader> = std::sync::OnceLock::new();
            INSTANCE.get_or_init(Self::new)
        }
        pub fn shader(&self) -> &Shader {
            &self.shader
        }
        pub fn set_position_attribute(&self) {
            self.shader.vertex_attrib_pointer(0, 3, AttribFormat::Float, 20, 0);
        }
        pub fn set_uv_attribute(&self) {
            self.shader.vertex_attrib_pointer(1, 2, AttribFormat::Float, 20, 12);
        }
        pub fn set_vertex_attributes(&self) {
            self.set_position_attribute();
            self.set_uv_attribute();
        }
        pub fn set_model(&self, value: &Matrix4) {
            self.shader.set_matrix4("model", value);
        }
        pub fn set_colors(&self, values: &[Color]) {
            for (i, value) in values.iter().enumerate() {
                self.shader.set_color(&format!("colors[{i}]"), value);
            }
        }
        pub fn set_weights(&self, values: &[f32]) {
            for (i, value) in values.iter().enumerate() {
                self.shader.set_float(&format!("weights[{i}]"), *value);
            }
        }
    }
}
