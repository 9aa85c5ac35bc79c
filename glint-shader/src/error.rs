#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid shader base name {0:?}: the binding class name needs a non-empty base name")]
    InvalidName(String),

    #[error("vertex attribute `{name}` has unmapped type `{type_token}`")]
    UnmappedAttributeType { name: String, type_token: String },

    #[error("uniform `{0}` is declared more than once")]
    DuplicateUniform(String),

    #[error("vertex attribute `{name}` reuses location {location}")]
    DuplicateLocation { location: u32, name: String },

    #[error("`{first}` and `{second}` both generate method `{method}`")]
    DuplicateMethod {
        method: String,
        first: String,
        second: String,
    },

    #[error("`{0}` cannot be used as a name in generated code")]
    InvalidIdent(String),

    #[error("generated bindings failed to parse: {0}")]
    Render(#[from] syn::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
