use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::{
    naming::find_collision,
    registry::{AttributeMapping, UniformMapping},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformDecl {
    pub type_token: String,
    pub name: String,
    pub is_array: bool,
}

impl UniformDecl {
    pub fn mapping(&self) -> UniformMapping<'_> {
        UniformMapping::lookup(&self.type_token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttributeDecl {
    pub location: u32,
    pub type_token: String,
    pub name: String,
}

impl VertexAttributeDecl {
    pub fn mapping(&self) -> AttributeMapping {
        AttributeMapping::lookup(&self.type_token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderInterface {
    pub class_name: String,
    pub base_name: String,
    pub uniforms: Vec<UniformDecl>,
    pub attributes: Vec<VertexAttributeDecl>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Reject duplicate uniform names, duplicate attribute locations,
    /// attribute types without a known size and declarations whose generated
    /// method names clash instead of warning about them.
    pub strict: bool,
}

/// `basic` -> `BasicShader`.
pub fn class_name(base_name: &str) -> Result<String> {
    let mut chars = base_name.chars();
    let first = chars
        .next()
        .ok_or_else(|| Error::InvalidName(base_name.to_string()))?;

    let mut class_name = String::with_capacity(base_name.len() + "Shader".len());
    class_name.extend(first.to_uppercase());
    class_name.push_str(chars.as_str());
    class_name.push_str("Shader");
    Ok(class_name)
}

pub fn build_interface(
    base_name: &str,
    uniforms: Vec<UniformDecl>,
    attributes: Vec<VertexAttributeDecl>,
) -> Result<ShaderInterface> {
    build_interface_with(base_name, uniforms, attributes, &BuildOptions::default())
}

pub fn build_interface_with(
    base_name: &str,
    uniforms: Vec<UniformDecl>,
    attributes: Vec<VertexAttributeDecl>,
    options: &BuildOptions,
) -> Result<ShaderInterface> {
    let class_name = class_name(base_name)?;

    let mut names = HashSet::new();
    for uniform in &uniforms {
        if !names.insert(uniform.name.as_str()) {
            if options.strict {
                return Err(Error::DuplicateUniform(uniform.name.clone()));
            }
            warn!(shader = base_name, uniform = %uniform.name, "uniform declared more than once");
        }
    }

    let mut locations = HashMap::new();
    for attribute in &attributes {
        if let Some(previous) = locations.insert(attribute.location, attribute.name.as_str()) {
            if options.strict {
                return Err(Error::DuplicateLocation {
                    location: attribute.location,
                    name: attribute.name.clone(),
                });
            }
            warn!(
                shader = base_name,
                location = attribute.location,
                previous,
                attribute = %attribute.name,
                "vertex attribute location reused"
            );
        }

        if !attribute.mapping().is_mapped() {
            if options.strict {
                return Err(Error::UnmappedAttributeType {
                    name: attribute.name.clone(),
                    type_token: attribute.type_token.clone(),
                });
            }
            warn!(
                shader = base_name,
                attribute = %attribute.name,
                type_token = %attribute.type_token,
                "vertex attribute type has no known size, later offsets will be wrong"
            );
        }
    }

    if options.strict {
        if let Some(collision) = find_collision(&uniforms, &attributes) {
            return Err(Error::DuplicateMethod {
                method: collision.method,
                first: collision.first,
                second: collision.second,
            });
        }
    }

    Ok(ShaderInterface {
        class_name,
        base_name: base_name.to_string(),
        uniforms,
        attributes,
    })
}
