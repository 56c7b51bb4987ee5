//! Entity emitter — one class per entity type, batched per metaclass
//! prefix into a single compilable module.

use cuba_metadata::EntityType;

use crate::capability::Catalog;
use crate::decl::ClassDecl;
use crate::error::CodegenError;
use crate::naming::{pascal_case, split_metaclass_name, validate_metaclass_format, validate_prefix_format};
use crate::render;
use crate::resolve::resolve_field;
use crate::source::MetadataSource;

const ENTITY_USINGS: [&str; 4] = [
    "CubaRest.Model",
    "System",
    "System.Collections.Generic",
    "System.ComponentModel",
];

/// Build the declaration node for one entity type.
pub fn entity_decl(meta: &EntityType, catalog: &Catalog) -> Result<ClassDecl, CodegenError> {
    let (class_prefix, class_name) = split_metaclass_name(&meta.entity_name)?;

    let mut fields = Vec::new();
    for field in &meta.properties {
        if let Some(decl) = resolve_field(meta, &class_prefix, field, catalog)? {
            fields.push(decl);
        }
    }
    fields.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(ClassDecl {
        cuba_name: meta.entity_name.clone(),
        name: class_name,
        base: catalog.base.name.clone(),
        capabilities: catalog.supported_capabilities(meta),
        fields,
    })
}

/// Generate the class text for one metaclass, fetched by name.
pub fn generate_entity(
    source: &dyn MetadataSource,
    metaclass: &str,
    catalog: &Catalog,
) -> Result<String, CodegenError> {
    validate_metaclass_format(metaclass)?;
    let meta = source.get_entity_type(metaclass)?;
    let decl = entity_decl(&meta, catalog)?;
    let mut w = render::CodeWriter::new();
    render::class(&mut w, &decl);
    Ok(w.finish())
}

/// Generate one module containing every entity type matching `prefix`,
/// ordered by raw metaclass name. The module wraps the classes in
/// `namespace <namespace> { public class <PascalPrefix> { ... } }`.
pub fn generate_entities(
    source: &dyn MetadataSource,
    prefix: &str,
    namespace: &str,
    catalog: &Catalog,
) -> Result<String, CodegenError> {
    validate_prefix_format(prefix)?;

    let mut types = source.list_entity_types(prefix)?;
    if types.is_empty() {
        return Err(CodegenError::NoEntityTypes { prefix: prefix.to_string() });
    }
    types.sort_by(|a, b| a.entity_name.cmp(&b.entity_name));

    let decls = types
        .iter()
        .map(|t| entity_decl(t, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(render::module(&ENTITY_USINGS, namespace, |w| {
        w.open_block(&format!("public class {}", pascal_case(prefix)));
        for (i, decl) in decls.iter().enumerate() {
            if i > 0 {
                w.blank();
            }
            render::class(w, decl);
        }
        w.close_block();
    }))
}
