//! Shader interface extraction and binding generation.
//!
//! Feed the combined text of a `.vert`/`.frag` pair to [`scan`], turn the
//! declarations into a [`ShaderInterface`] with [`build_interface`], and
//! render Rust bindings for it with [`emit`]. [`generate`] runs the whole
//! pipeline in one call. Nothing in this crate touches the filesystem.

use tracing::info;

mod error;
pub mod gen;
pub mod layout;
pub mod naming;
pub mod parser;
pub mod registry;
pub mod schema;

pub use error::{Error, Result};
pub use gen::{emit, emit_with, EmitOptions, BANNER};
pub use layout::{compute_layout, LayoutEntry, VertexLayout};
pub use naming::{find_collision, MethodCollision};
pub use parser::{scan, Declarations};
pub use registry::{
    AttributeKind, AttributeMapping, PointerFormat, UniformKind, UniformMapping,
};
pub use schema::{
    build_interface, build_interface_with, class_name, BuildOptions, ShaderInterface, UniformDecl,
    VertexAttributeDecl,
};

/// Output of [`generate`] for one shader pair.
#[derive(Debug, Clone)]
pub struct Generated {
    pub interface: ShaderInterface,
    pub stride: u32,
    pub offsets: Vec<u32>,
    /// `<ClassName>.rs`
    pub file_name: String,
    pub source: String,
}

pub fn generate(
    base_name: &str,
    source: &str,
    build_options: &BuildOptions,
    emit_options: &EmitOptions,
) -> Result<Generated> {
    let found = scan(source);
    if found.is_empty() {
        info!(shader = base_name, "no uniforms or vertex attributes declared");
    }
    let Declarations {
        uniforms,
        attributes,
    } = found;
    let interface = build_interface_with(base_name, uniforms, attributes, build_options)?;
    let source = emit_with(&interface, emit_options)?;
    let (stride, offsets) = {
        let layout = compute_layout(&interface.attributes);
        (layout.stride, layout.offsets())
    };

    Ok(Generated {
        file_name: format!("{}.rs", interface.class_name),
        stride,
        offsets,
        source,
        interface,
    })
}
