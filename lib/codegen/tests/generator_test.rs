//! Batch generation over an in-memory metadata source.

use cuba_codegen_lib::{
    generate_entities, generate_enums, Catalog, CodegenError, StaticSource,
};
use cuba_metadata::{
    AttributeKind, Cardinality, EntityField, EntityType, EnumType, EnumValue,
};

fn field(name: &str, ty: &str, kind: AttributeKind, cardinality: Cardinality) -> EntityField {
    EntityField {
        name: name.into(),
        description: String::new(),
        ty: ty.into(),
        attribute_kind: kind,
        cardinality,
        mandatory: false,
        read_only: false,
        transient: false,
    }
}

fn datatype(name: &str, ty: &str) -> EntityField {
    field(name, ty, AttributeKind::Datatype, Cardinality::None)
}

fn fixture() -> StaticSource {
    StaticSource::new(
        vec![
            // Listed out of order on purpose; batches must sort by raw name.
            EntityType {
                entity_name: "sys$Server".into(),
                properties: vec![
                    datatype("name", "string"),
                    datatype("createTs", "dateTime"),
                    datatype("createdBy", "string"),
                    field("roles", "sec$Role", AttributeKind::Association, Cardinality::OneToMany),
                ],
            },
            EntityType {
                entity_name: "sys$Config".into(),
                properties: vec![
                    datatype("id", "uuid"),
                    datatype("name", "string"),
                    datatype("exotic", "localDateTime"),
                    field("group", "sys$ConfigGroup", AttributeKind::Association, Cardinality::ManyToOne),
                    field(
                        "status",
                        "com.haulmont.cuba.core.global.SendingStatusEnum",
                        AttributeKind::Enum,
                        Cardinality::None,
                    ),
                ],
            },
        ],
        vec![
            EnumType {
                name: "com.haulmont.cuba.core.global.SendingStatus".into(),
                values: vec![
                    EnumValue { name: "SENT".into(), id: "30".into(), caption: "Sent".into() },
                    EnumValue { name: "QUEUE".into(), id: "0".into(), caption: String::new() },
                ],
            },
            EnumType {
                name: "com.example.RoleType".into(),
                values: vec![
                    EnumValue { name: "STANDARD".into(), id: "STANDARD".into(), caption: String::new() },
                ],
            },
        ],
    )
}

#[test]
fn entity_batch_is_ordered_by_raw_metaclass_name() {
    let text = generate_entities(&fixture(), "sys", "MyProject", &Catalog::default()).unwrap();
    let config = text.find("public class Config").unwrap();
    let server = text.find("public class Server").unwrap();
    assert!(config < server);
}

#[test]
fn entity_batch_module_shape() {
    let text = generate_entities(&fixture(), "sys", "MyProject", &Catalog::default()).unwrap();
    assert!(text.starts_with("using CubaRest.Model;\n"));
    assert!(text.contains("using System.Collections.Generic;"));
    assert!(text.contains("namespace MyProject"));
    assert!(text.contains("public class Sys"));
    assert!(text.contains("[CubaName(\"sys$Config\")]"));
}

#[test]
fn capabilities_extend_the_base_list() {
    let text = generate_entities(&fixture(), "sys", "MyProject", &Catalog::default()).unwrap();
    assert!(text.contains("public class Server : Entity, ICreatable"));
    assert!(text.contains("public class Config : Entity\n"));
}

#[test]
fn cross_prefix_collection_is_qualified() {
    let text = generate_entities(&fixture(), "sys", "MyProject", &Catalog::default()).unwrap();
    assert!(text.contains("public List<Sec.Role> Roles { get; set; }"));
    // Same-prefix reference stays unqualified.
    assert!(text.contains("public ConfigGroup Group { get; set; }"));
}

#[test]
fn unmapped_primitive_is_silently_omitted() {
    let text = generate_entities(&fixture(), "sys", "MyProject", &Catalog::default()).unwrap();
    assert!(!text.contains("Exotic"));
    // The batch still succeeded and emitted the mapped sibling.
    assert!(text.contains("public string Name { get; set; }"));
}

#[test]
fn base_type_fields_are_not_reemitted() {
    let text = generate_entities(&fixture(), "sys", "MyProject", &Catalog::default()).unwrap();
    assert!(!text.contains("public Guid Id"));
}

#[test]
fn empty_entity_batch_is_not_found() {
    let err = generate_entities(&fixture(), "ref", "MyProject", &Catalog::default()).unwrap_err();
    assert!(matches!(err, CodegenError::NoEntityTypes { .. }));
}

#[test]
fn emission_is_deterministic() {
    let source = fixture();
    let catalog = Catalog::default();
    let first = generate_entities(&source, "sys", "MyProject", &catalog).unwrap();
    let second = generate_entities(&source, "sys", "MyProject", &catalog).unwrap();
    assert_eq!(first, second);
}

#[test]
fn enum_batch_matches_prefix_and_sorts() {
    let text = generate_enums(&fixture(), "", "MyProject").unwrap();
    assert!(text.contains("namespace MyProject.Model"));
    let role = text.find("public enum RoleType").unwrap();
    let sending = text.find("public enum SendingStatus").unwrap();
    assert!(role < sending);

    let text = generate_enums(&fixture(), "com.haulmont", "MyProject").unwrap();
    assert!(!text.contains("RoleType"));
}

#[test]
fn enum_values_sort_and_number() {
    let text = generate_enums(&fixture(), "com.haulmont", "MyProject").unwrap();
    let queue = text.find("QUEUE = 0,").unwrap();
    let sent = text.find("SENT = 30,").unwrap();
    assert!(queue < sent);
    assert!(text.contains("[Description(\"Sent\")]"));
    // Non-numeric ids carry no explicit assignment.
    let text = generate_enums(&fixture(), "com.example", "MyProject").unwrap();
    assert!(text.contains("STANDARD,"));
    assert!(!text.contains("STANDARD ="));
}

#[test]
fn empty_enum_batch_is_not_found() {
    let err = generate_enums(&fixture(), "org.nowhere", "MyProject").unwrap_err();
    assert!(matches!(err, CodegenError::NoEnumTypes { .. }));
}
