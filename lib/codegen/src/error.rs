use thiserror::Error;

/// Errors raised by the generation core.
///
/// All variants carry the offending raw identifier. The core never logs or
/// retries; the driver decides what a per-batch failure means.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Metaclass name is not of the form `<prefix>$<TypeName>`.
    #[error("metaclass name \"{name}\" does not match <prefix>$<TypeName>")]
    MetaclassFormat { name: String },

    /// Enum name is not a dotted identifier path.
    #[error("enum name \"{name}\" is not a valid dotted identifier path")]
    EnumNameFormat { name: String },

    /// Batch prefix fails the prefix shape check.
    #[error("invalid metaclass prefix \"{prefix}\"")]
    PrefixFormat { prefix: String },

    /// Entity batch matched nothing.
    #[error("no entity types found for \"{prefix}\" metaclass prefix")]
    NoEntityTypes { prefix: String },

    /// Enum batch matched nothing.
    #[error("no enum types found with \"{prefix}\" prefix")]
    NoEnumTypes { prefix: String },

    /// A field carries an attribute kind this generator does not know.
    /// Indicates a metadata/generator version mismatch; not recoverable here.
    #[error("unsupported attribute kind on field {entity}.{field}")]
    UnsupportedAttributeKind { entity: String, field: String },

    /// Transport or decode failure surfaced by a `MetadataSource`.
    #[error("metadata source error: {0}")]
    Source(String),
}
