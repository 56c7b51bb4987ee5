//! Entity-type metadata as returned by `/v2/metadata/entities`.

use serde::{Deserialize, Serialize};

/// Attribute kind of an entity field.
///
/// The wire format sends upper-snake identifiers. Anything this crate does
/// not recognize decodes to `Unknown` so the generator can fail at
/// resolution time with the offending field named, instead of failing the
/// whole metadata decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeKind {
    Datatype,
    Association,
    Composition,
    Enum,
    #[serde(other)]
    Unknown,
}

/// Relationship multiplicity of a field.
///
/// Plain datatype fields carry `NONE` (or omit the key entirely, which
/// decodes to the same).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    #[default]
    None,
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl Cardinality {
    /// One-to-many and many-to-many fields are collection-valued.
    pub fn is_collection(&self) -> bool {
        matches!(self, Cardinality::OneToMany | Cardinality::ManyToMany)
    }
}

/// One field of an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityField {
    /// Raw metadata field name (e.g. `createTs`).
    pub name: String,

    /// Human-readable description. Empty when the platform has none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Raw type identifier: a datatype id for `Datatype` fields, a
    /// metaclass name for references, an enum FQN for `Enum` fields.
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(rename = "attributeType")]
    pub attribute_kind: AttributeKind,

    #[serde(default)]
    pub cardinality: Cardinality,

    #[serde(default)]
    pub mandatory: bool,

    #[serde(default, rename = "readOnly")]
    pub read_only: bool,

    #[serde(default)]
    pub transient: bool,
}

/// One entity type: metaclass name plus its ordered field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityType {
    /// Metaclass name in the form `<modulePrefix>$<TypeName>` (e.g. `sys$Config`).
    #[serde(rename = "entityName")]
    pub entity_name: String,

    /// Fields declared on the type. Names are unique within a type.
    #[serde(default)]
    pub properties: Vec<EntityField>,
}

impl EntityType {
    /// Get a field by its raw metadata name.
    pub fn field(&self, name: &str) -> Option<&EntityField> {
        self.properties.iter().find(|f| f.name == name)
    }
}
