use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::Ident;
use tracing::warn;

use crate::{
    layout::{compute_layout, LayoutEntry},
    naming::{self, find_collision, snake_case},
    registry::PointerFormat,
    schema::{ShaderInterface, UniformDecl},
    Error, Result,
};

pub const BANNER: &str =
    "// This file is auto-generated and any change will be overwritten on the next update.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Name of the module wrapping the generated type.
    pub module: String,
    /// Path of the crate whose `prelude` provides `Shader` and the host types.
    pub runtime: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            module: "shaders".to_string(),
            runtime: "glint_lib".to_string(),
        }
    }
}

/// Sections of the generated `impl` block, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Constructor,
    AttributeSetters,
    AggregateAttributeSetter,
    UniformSetters,
}

const SECTION_ORDER: [Section; 4] = [
    Section::Constructor,
    Section::AttributeSetters,
    Section::AggregateAttributeSetter,
    Section::UniformSetters,
];

pub fn emit(interface: &ShaderInterface) -> Result<String> {
    emit_with(interface, &EmitOptions::default())
}

pub fn emit_with(interface: &ShaderInterface, options: &EmitOptions) -> Result<String> {
    let module_ident = ident(&options.module)?;
    let runtime = syn::parse_str::<syn::Path>(&options.runtime)
        .map_err(|_| Error::InvalidIdent(options.runtime.clone()))?;
    let class_ident = ident(&interface.class_name)?;
    let layout = compute_layout(&interface.attributes);
    if let Some(collision) = find_collision(&interface.uniforms, &interface.attributes) {
        warn!(
            class = %interface.class_name,
            method = %collision.method,
            "`{}` and `{}` generate the same method",
            collision.first,
            collision.second
        );
    }

    let mut items = Vec::<TokenStream2>::new();
    for section in SECTION_ORDER {
        match section {
            Section::Constructor => {
                items.push(constructor_impl(&class_ident, &interface.base_name));
            }
            Section::AttributeSetters => {
                for entry in &layout.entries {
                    items.push(attribute_setter_impl(entry, layout.stride)?);
                }
            }
            Section::AggregateAttributeSetter => {
                if !layout.entries.is_empty() {
                    items.push(aggregate_setter_impl(&layout.entries)?);
                }
            }
            Section::UniformSetters => {
                for uniform in &interface.uniforms {
                    items.push(uniform_setter_impl(uniform)?);
                }
            }
        }
    }

    let expanded = quote! {
        pub mod #module_ident {
            use #runtime::prelude::*;

            pub struct #class_ident {
                shader: Shader,
            }

            impl #class_ident {
                #(#items)*
            }
        }
    };

    let file = syn::parse2::<syn::File>(expanded)?;
    Ok(format!("{BANNER}\n\n{}", prettyplease::unparse(&file)))
}

fn constructor_impl(class_ident: &Ident, base_name: &str) -> TokenStream2 {
    quote! {
        fn new() -> Self {
            Self {
                shader: Shader::new(#base_name),
            }
        }

        pub fn instance() -> &'static Self {
            static INSTANCE: std::sync::OnceLock<#class_ident> = std::sync::OnceLock::new();
            INSTANCE.get_or_init(Self::new)
        }

        pub fn shader(&self) -> &Shader {
            &self.shader
        }
    }
}

fn attribute_setter_ident(entry: &LayoutEntry) -> Result<Ident> {
    ident(&naming::attribute_setter(&entry.attribute.name))
}

fn attribute_setter_impl(entry: &LayoutEntry, stride: u32) -> Result<TokenStream2> {
    let method = attribute_setter_ident(entry)?;
    let mapping = entry.attribute.mapping();
    let location = Literal::u32_unsuffixed(entry.attribute.location);
    let components = Literal::u32_unsuffixed(mapping.component_count());
    let stride = Literal::u32_unsuffixed(stride);
    let offset = Literal::u32_unsuffixed(entry.offset);
    let format = match mapping.format() {
        Some(PointerFormat::Float) => quote! { AttribFormat::Float },
        Some(PointerFormat::Int) => quote! { AttribFormat::Int },
        None => quote! { AttribFormat::Unmapped },
    };

    Ok(quote! {
        pub fn #method(&self) {
            self.shader.vertex_attrib_pointer(#location, #components, #format, #stride, #offset);
        }
    })
}

fn aggregate_setter_impl(entries: &[LayoutEntry]) -> Result<TokenStream2> {
    let methods = entries
        .iter()
        .map(attribute_setter_ident)
        .collect::<Result<Vec<_>>>()?;
    let aggregate = ident(naming::AGGREGATE_SETTER)?;

    Ok(quote! {
        pub fn #aggregate(&self) {
            #(self.#methods();)*
        }
    })
}

fn uniform_setter_impl(uniform: &UniformDecl) -> Result<TokenStream2> {
    let method = ident(&naming::uniform_setter(&uniform.name))?;
    let mapping = uniform.mapping();
    let setter = ident(&format!("set_{}", snake_case(mapping.accessor())))?;
    let host_type = syn::parse_str::<syn::Type>(mapping.host_type())
        .map_err(|_| Error::InvalidIdent(mapping.host_type().to_string()))?;
    let name = &uniform.name;

    if uniform.is_array {
        let element_name = format!("{name}[{{i}}]");
        let value = if mapping.by_value() {
            quote! { *value }
        } else {
            quote! { value }
        };
        Ok(quote! {
            pub fn #method(&self, values: &[#host_type]) {
                for (i, value) in values.iter().enumerate() {
                    self.shader.#setter(&format!(#element_name), #value);
                }
            }
        })
    } else {
        let param_type = if mapping.by_value() {
            quote! { #host_type }
        } else {
            quote! { &#host_type }
        };
        Ok(quote! {
            pub fn #method(&self, value: #param_type) {
                self.shader.#setter(#name, value);
            }
        })
    }
}

fn ident(name: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name).map_err(|_| Error::InvalidIdent(name.to_string()))
}
