//! Enum emitter — one declaration per enumeration, batched into a single
//! module under `<namespace>.Model`.

use cuba_metadata::EnumType;

use crate::decl::{EnumDecl, ValueDecl};
use crate::error::CodegenError;
use crate::naming::{enum_short_name, validate_enum_name_format};
use crate::render;
use crate::source::MetadataSource;

const ENUM_USINGS: [&str; 2] = ["CubaRest.Model", "System.ComponentModel"];

/// Build the declaration node for one enumeration.
pub fn enum_decl(meta: &EnumType) -> Result<EnumDecl, CodegenError> {
    validate_enum_name_format(&meta.name)?;

    let mut values: Vec<ValueDecl> = meta
        .values
        .iter()
        .map(|v| ValueDecl {
            name: v.name.clone(),
            // Numeric ids become explicit assignments; everything else
            // falls back to the target's sequential numbering.
            number: v.id.trim().parse::<i32>().ok(),
            doc: (!v.caption.is_empty()).then(|| v.caption.clone()),
        })
        .collect();
    values.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(EnumDecl {
        cuba_name: meta.name.clone(),
        name: enum_short_name(&meta.name)?,
        values,
    })
}

/// Generate the declaration text for one enumeration, fetched by name.
pub fn generate_enum(
    source: &dyn MetadataSource,
    name: &str,
) -> Result<String, CodegenError> {
    validate_enum_name_format(name)?;
    let meta = source.get_enum_type(name)?;
    let decl = enum_decl(&meta)?;
    let mut w = render::CodeWriter::new();
    render::enumeration(&mut w, &decl);
    Ok(w.finish())
}

/// Generate one module containing every enumeration whose dotted name
/// starts with `prefix` (empty prefix matches all), ordered by name.
pub fn generate_enums(
    source: &dyn MetadataSource,
    prefix: &str,
    namespace: &str,
) -> Result<String, CodegenError> {
    let mut enums = source.list_enum_types(prefix)?;
    if enums.is_empty() {
        return Err(CodegenError::NoEnumTypes { prefix: prefix.to_string() });
    }
    enums.sort_by(|a, b| a.name.cmp(&b.name));

    let decls = enums
        .iter()
        .map(enum_decl)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(render::module(
        &ENUM_USINGS,
        &format!("{}.Model", namespace),
        |w| {
            for (i, decl) in decls.iter().enumerate() {
                if i > 0 {
                    w.blank();
                }
                render::enumeration(w, decl);
            }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuba_metadata::EnumValue;

    fn value(name: &str, id: &str, caption: &str) -> EnumValue {
        EnumValue {
            name: name.into(),
            id: id.into(),
            caption: caption.into(),
        }
    }

    #[test]
    fn numeric_ids_become_explicit_values() {
        let meta = EnumType {
            name: "com.example.SendingStatusEnum".into(),
            values: vec![value("SENT", "30", ""), value("ACTIVE", "A", "")],
        };
        let decl = enum_decl(&meta).unwrap();
        assert_eq!(decl.name, "SendingStatus");
        // Sorted by symbolic name.
        assert_eq!(decl.values[0].name, "ACTIVE");
        assert_eq!(decl.values[0].number, None);
        assert_eq!(decl.values[1].name, "SENT");
        assert_eq!(decl.values[1].number, Some(30));
    }

    #[test]
    fn id_parse_trims_whitespace() {
        let meta = EnumType {
            name: "com.example.Status".into(),
            values: vec![value("QUEUE", " 3 ", "")],
        };
        let decl = enum_decl(&meta).unwrap();
        assert_eq!(decl.values[0].number, Some(3));
    }

    #[test]
    fn caption_becomes_doc() {
        let meta = EnumType {
            name: "com.example.Status".into(),
            values: vec![value("QUEUE", "0", "In queue")],
        };
        let decl = enum_decl(&meta).unwrap();
        assert_eq!(decl.values[0].doc.as_deref(), Some("In queue"));
    }

    #[test]
    fn generate_enum_renders_fetched_type() {
        let source = crate::source::StaticSource::new(
            vec![],
            vec![EnumType {
                name: "com.example.SendingStatusEnum".into(),
                values: vec![value("SENT", "30", "Sent")],
            }],
        );
        let text = generate_enum(&source, "com.example.SendingStatusEnum").unwrap();
        assert!(text.contains("[CubaName(\"com.example.SendingStatusEnum\")]"));
        assert!(text.contains("public enum SendingStatus"));
        assert!(text.contains("SENT = 30,"));
        assert!(text.contains("[Description(\"Sent\")]"));
    }

    #[test]
    fn invalid_name_is_rejected() {
        let meta = EnumType { name: "com..Status".into(), values: vec![] };
        assert!(matches!(
            enum_decl(&meta),
            Err(CodegenError::EnumNameFormat { .. })
        ));
    }
}
