//! Property resolver — turns one metadata field into a `FieldDecl`, or
//! decides it is not emitted at all.

use cuba_metadata::{AttributeKind, EntityField, EntityType};

use crate::capability::Catalog;
use crate::decl::{FieldDecl, TypeExpr};
use crate::error::CodegenError;
use crate::naming::{enum_short_name, pascal_case, split_metaclass_name};
use crate::types::map_datatype;

/// Resolve one field of `entity`. `class_prefix` is the normalized module
/// prefix of the enclosing class, used to decide reference qualification.
///
/// Returns `Ok(None)` for the two documented omissions: fields the base
/// type already declares, and `Datatype` fields whose raw type identifier
/// has no type-table entry. An unrecognized attribute kind is fatal.
pub fn resolve_field(
    entity: &EntityType,
    class_prefix: &str,
    field: &EntityField,
    catalog: &Catalog,
) -> Result<Option<FieldDecl>, CodegenError> {
    let name = pascal_case(&field.name);
    if catalog.base.properties.contains(&name) {
        return Ok(None);
    }

    let resolved = match field.attribute_kind {
        AttributeKind::Datatype => match map_datatype(&field.ty) {
            Some(primitive) => TypeExpr::Primitive(primitive),
            // Unmapped datatype: the field is dropped, not rejected.
            None => return Ok(None),
        },
        AttributeKind::Association | AttributeKind::Composition => {
            let (prefix, type_name) = split_metaclass_name(&field.ty)?;
            let qualifier = (prefix != class_prefix).then_some(prefix);
            TypeExpr::Reference { qualifier, name: type_name }
        }
        AttributeKind::Enum => TypeExpr::Enum(enum_short_name(&field.ty)?),
        AttributeKind::Unknown => {
            return Err(CodegenError::UnsupportedAttributeKind {
                entity: entity.entity_name.clone(),
                field: field.name.clone(),
            })
        }
    };

    // Cardinality alone decides the collection wrapper, whatever the kind.
    let ty = if field.cardinality.is_collection() {
        TypeExpr::List(Box::new(resolved))
    } else {
        resolved
    };

    Ok(Some(FieldDecl {
        name,
        ty,
        doc: (!field.description.is_empty()).then(|| field.description.clone()),
        markers: catalog.markers(field),
    }))
}
