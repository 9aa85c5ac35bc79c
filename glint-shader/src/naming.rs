//! Method names of the generated binding type.

use std::collections::HashMap;

use crate::schema::{UniformDecl, VertexAttributeDecl};

pub const AGGREGATE_SETTER: &str = "set_vertex_attributes";

pub fn uniform_setter(name: &str) -> String {
    format!("set_{}", snake_case(name))
}

pub fn attribute_setter(name: &str) -> String {
    format!("set_{}_attribute", snake_case(name))
}

/// Two declarations whose generated methods share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCollision {
    pub method: String,
    pub first: String,
    pub second: String,
}

/// Every generated setter paired with the declaration it comes from, in
/// emission order.
pub fn setter_names<'a>(
    uniforms: &'a [UniformDecl],
    attributes: &'a [VertexAttributeDecl],
) -> Vec<(String, &'a str)> {
    let mut names = Vec::with_capacity(uniforms.len() + attributes.len() + 1);
    names.extend(attributes.iter().map(|a| (attribute_setter(&a.name), a.name.as_str())));
    if !attributes.is_empty() {
        names.push((AGGREGATE_SETTER.to_string(), "vertex attributes"));
    }
    names.extend(uniforms.iter().map(|u| (uniform_setter(&u.name), u.name.as_str())));
    names
}

pub fn find_collision(
    uniforms: &[UniformDecl],
    attributes: &[VertexAttributeDecl],
) -> Option<MethodCollision> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for (method, source) in setter_names(uniforms, attributes) {
        if let Some(first) = seen.get(&method) {
            return Some(MethodCollision {
                first: first.to_string(),
                second: source.to_string(),
                method,
            });
        }
        seen.insert(method, source);
    }
    None
}

/// `lightPos` -> `light_pos`, `MVPMatrix` -> `mvp_matrix`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut transformed_name = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(prev) if prev.is_lowercase() || prev.is_numeric() => true,
                Some(prev) if prev.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary {
                transformed_name.push('_');
            }
            transformed_name.extend(c.to_lowercase());
        } else {
            transformed_name.push(c);
        }
    }

    transformed_name
}
