//! Declaration tree — the structured intermediate representation between
//! metadata resolution and text rendering. Resolution builds these nodes;
//! `render` turns them into C# source. Keeping the two apart lets each be
//! tested on its own.

use crate::types::PrimitiveType;

/// The type expression of an emitted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Primitive(PrimitiveType),
    /// Reference to another entity class, qualified with its module prefix
    /// when that prefix differs from the enclosing class's.
    Reference {
        qualifier: Option<String>,
        name: String,
    },
    /// Reference to an emitted enum by short name.
    Enum(String),
    /// Collection of the inner type.
    List(Box<TypeExpr>),
}

/// One emitted property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Normalized (PascalCase) property name.
    pub name: String,
    pub ty: TypeExpr,
    /// Documentation text, from the metadata description.
    pub doc: Option<String>,
    /// Restriction marker names, in registry order.
    pub markers: Vec<&'static str>,
}

/// One emitted entity class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Raw metaclass name, carried as the metadata-name tag.
    pub cuba_name: String,
    /// Normalized class name.
    pub name: String,
    /// Base type name.
    pub base: String,
    /// Supported capability names, sorted.
    pub capabilities: Vec<String>,
    /// Fields sorted by normalized name.
    pub fields: Vec<FieldDecl>,
}

/// One emitted enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDecl {
    /// Symbolic name, emitted verbatim.
    pub name: String,
    /// Explicit numeric assignment when the metadata id parses as an
    /// integer; otherwise the target's sequential default applies.
    pub number: Option<i32>,
    /// Documentation text, from the metadata caption.
    pub doc: Option<String>,
}

/// One emitted enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// Raw dotted FQN, carried as the metadata-name tag.
    pub cuba_name: String,
    /// Short emitted name.
    pub name: String,
    /// Values sorted by symbolic name.
    pub values: Vec<ValueDecl>,
}
