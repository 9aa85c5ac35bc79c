//! Shader type token lookups.
//!
//! Uniform tokens map to a host type and the `set_*` primitive that uploads
//! it. Attribute tokens map to the component count, byte size and pointer
//! format used when configuring the vertex layout. Both lookups are total:
//! unknown tokens land in an explicit fallback variant.

/// Uniform types the runtime has a dedicated setter for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Int,
    Float,
    Bool,
    Vector,
    Color,
    Matrix4,
    Material,
    DirectionalLight,
    PointLight,
}

impl UniformKind {
    pub fn from_token(token: &str) -> Option<Self> {
        let kind = match token {
            "int" => UniformKind::Int,
            "float" => UniformKind::Float,
            "bool" => UniformKind::Bool,
            "vec3" => UniformKind::Vector,
            "vec4" => UniformKind::Color,
            "mat4" => UniformKind::Matrix4,
            "Material" => UniformKind::Material,
            "DirectionalLight" => UniformKind::DirectionalLight,
            "PointLight" => UniformKind::PointLight,
            _ => return None,
        };
        Some(kind)
    }

    pub fn host_type(self) -> &'static str {
        match self {
            UniformKind::Int => "i32",
            UniformKind::Float => "f32",
            UniformKind::Bool => "bool",
            UniformKind::Vector => "Vector",
            UniformKind::Color => "Color",
            UniformKind::Matrix4 => "Matrix4",
            UniformKind::Material => "Material",
            UniformKind::DirectionalLight => "DirectionalLight",
            UniformKind::PointLight => "PointLight",
        }
    }

    pub fn accessor(self) -> &'static str {
        match self {
            UniformKind::Int => "int",
            UniformKind::Float => "float",
            UniformKind::Bool => "bool",
            UniformKind::Vector => "vector",
            UniformKind::Color => "color",
            UniformKind::Matrix4 => "matrix4",
            UniformKind::Material => "material",
            UniformKind::DirectionalLight => "directional_light",
            UniformKind::PointLight => "point_light",
        }
    }

    /// Scalars are passed to their setter by value, everything else by
    /// reference.
    pub fn by_value(self) -> bool {
        matches!(self, UniformKind::Int | UniformKind::Float | UniformKind::Bool)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformMapping<'a> {
    Known(UniformKind),
    /// Host-defined type: the token doubles as host type and accessor.
    PassThrough(&'a str),
}

impl<'a> UniformMapping<'a> {
    pub fn lookup(token: &'a str) -> Self {
        match UniformKind::from_token(token) {
            Some(kind) => UniformMapping::Known(kind),
            None => UniformMapping::PassThrough(token),
        }
    }

    pub fn host_type(&self) -> &'a str {
        match *self {
            UniformMapping::Known(kind) => kind.host_type(),
            UniformMapping::PassThrough(token) => token,
        }
    }

    pub fn accessor(&self) -> &'a str {
        match *self {
            UniformMapping::Known(kind) => kind.accessor(),
            UniformMapping::PassThrough(token) => token,
        }
    }

    pub fn by_value(&self) -> bool {
        match self {
            UniformMapping::Known(kind) => kind.by_value(),
            UniformMapping::PassThrough(_) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerFormat {
    Float,
    Int,
}

impl PointerFormat {
    pub fn tag(self) -> &'static str {
        match self {
            PointerFormat::Float => "float",
            PointerFormat::Int => "int",
        }
    }
}

/// Vertex attribute types with a known packed size. Every component is
/// four bytes wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Int,
    Bool,
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeKind {
    pub fn from_token(token: &str) -> Option<Self> {
        let kind = match token {
            "int" => AttributeKind::Int,
            "bool" => AttributeKind::Bool,
            "float" => AttributeKind::Float,
            "vec2" => AttributeKind::Vec2,
            "vec3" => AttributeKind::Vec3,
            "vec4" => AttributeKind::Vec4,
            _ => return None,
        };
        Some(kind)
    }

    pub fn component_count(self) -> u32 {
        match self {
            AttributeKind::Int | AttributeKind::Bool | AttributeKind::Float => 1,
            AttributeKind::Vec2 => 2,
            AttributeKind::Vec3 => 3,
            AttributeKind::Vec4 => 4,
        }
    }

    pub fn byte_size(self) -> u32 {
        self.component_count() * 4
    }

    pub fn format(self) -> PointerFormat {
        match self {
            AttributeKind::Int | AttributeKind::Bool => PointerFormat::Int,
            _ => PointerFormat::Float,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMapping {
    Known(AttributeKind),
    /// Unknown token. Contributes nothing to the layout, which shifts the
    /// offsets of every later attribute.
    Unmapped,
}

impl AttributeMapping {
    pub fn lookup(token: &str) -> Self {
        AttributeKind::from_token(token).map_or(AttributeMapping::Unmapped, AttributeMapping::Known)
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, AttributeMapping::Known(_))
    }

    pub fn component_count(&self) -> u32 {
        match self {
            AttributeMapping::Known(kind) => kind.component_count(),
            AttributeMapping::Unmapped => 0,
        }
    }

    pub fn byte_size(&self) -> u32 {
        match self {
            AttributeMapping::Known(kind) => kind.byte_size(),
            AttributeMapping::Unmapped => 0,
        }
    }

    pub fn format(&self) -> Option<PointerFormat> {
        match self {
            AttributeMapping::Known(kind) => Some(kind.format()),
            AttributeMapping::Unmapped => None,
        }
    }

    pub fn format_tag(&self) -> &'static str {
        self.format().map_or("", PointerFormat::tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_uniforms() {
        let mat4 = UniformMapping::lookup("mat4");
        assert_eq!(mat4, UniformMapping::Known(UniformKind::Matrix4));
        assert_eq!(mat4.host_type(), "Matrix4");
        assert_eq!(mat4.accessor(), "matrix4");
        assert!(!mat4.by_value());

        let float = UniformMapping::lookup("float");
        assert_eq!(float.host_type(), "f32");
        assert_eq!(float.accessor(), "float");
        assert!(float.by_value());
    }

    #[test]
    fn test_light_uniforms_are_distinct() {
        let directional = UniformMapping::lookup("DirectionalLight");
        let point = UniformMapping::lookup("PointLight");
        assert_ne!(directional.host_type(), point.host_type());
        assert_ne!(directional.accessor(), point.accessor());
    }

    #[test]
    fn test_uniform_pass_through() {
        let custom = UniformMapping::lookup("SpotLight");
        assert_eq!(custom, UniformMapping::PassThrough("SpotLight"));
        assert_eq!(custom.host_type(), "SpotLight");
        assert_eq!(custom.accessor(), "SpotLight");
        assert!(!custom.by_value());
    }

    #[test]
    fn test_attribute_sizes() {
        let expected = [
            ("int", 1, 4, "int"),
            ("bool", 1, 4, "int"),
            ("float", 1, 4, "float"),
            ("vec2", 2, 8, "float"),
            ("vec3", 3, 12, "float"),
            ("vec4", 4, 16, "float"),
        ];
        for (token, components, bytes, tag) in expected {
            let mapping = AttributeMapping::lookup(token);
            assert!(mapping.is_mapped(), "{token}");
            assert_eq!(mapping.component_count(), components, "{token}");
            assert_eq!(mapping.byte_size(), bytes, "{token}");
            assert_eq!(mapping.format_tag(), tag, "{token}");
        }
    }

    #[test]
    fn test_integer_attributes_use_int_format() {
        for token in ["int", "bool"] {
            let mapping = AttributeMapping::lookup(token);
            assert_eq!(mapping.format(), Some(PointerFormat::Int), "{token}");
            assert_eq!(mapping.format_tag(), "int", "{token}");
        }
        assert_eq!(
            AttributeMapping::lookup("float").format(),
            Some(PointerFormat::Float)
        );
    }

    #[test]
    fn test_unmapped_attribute() {
        let mapping = AttributeMapping::lookup("mat4");
        assert_eq!(mapping, AttributeMapping::Unmapped);
        assert_eq!(mapping.component_count(), 0);
        assert_eq!(mapping.byte_size(), 0);
        assert_eq!(mapping.format(), None);
        assert_eq!(mapping.format_tag(), "");
    }
}
