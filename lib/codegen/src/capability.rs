//! Capability catalog, restriction registry, and the inference engine.
//!
//! Capabilities are declared statically as data — the engine iterates a
//! table, it never scans types at runtime. Restriction flags likewise live
//! in an explicit (name, accessor) table; adding a flag means adding an
//! entry, not editing the resolver.

use std::collections::{BTreeMap, BTreeSet};

use cuba_metadata::{AttributeKind, EntityField, EntityType};

use crate::naming::pascal_case;
use crate::types::{map_datatype, PrimitiveType};

/// A named structural interface: the entity supports it iff every listed
/// (normalized field name, primitive type) pair matches exactly.
#[derive(Debug, Clone)]
pub struct Capability {
    /// Emitted interface name (e.g. `ICreatable`).
    pub name: String,

    /// Required normalized field name → required emitted type.
    pub required: BTreeMap<String, PrimitiveType>,
}

impl Capability {
    pub fn new<I>(name: &str, required: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, PrimitiveType)>,
    {
        Self {
            name: name.to_string(),
            required: required
                .into_iter()
                .map(|(n, t)| (n.to_string(), t))
                .collect(),
        }
    }
}

/// A restriction flag: canonical marker name plus an accessor over the
/// metadata field record.
#[derive(Clone, Copy)]
pub struct Restriction {
    /// Emitted attribute name (e.g. `Mandatory`).
    pub name: &'static str,
    pub applies: fn(&EntityField) -> bool,
}

/// The common base type every emitted class extends. Fields whose
/// normalized names the base already declares are not re-emitted.
#[derive(Debug, Clone)]
pub struct BaseType {
    pub name: String,
    pub properties: BTreeSet<String>,
}

/// Everything the resolver and emitters consult besides the metadata
/// itself: capabilities, restriction flags, and the base type.
pub struct Catalog {
    pub capabilities: Vec<Capability>,
    pub restrictions: Vec<Restriction>,
    pub base: BaseType,
}

impl Default for Catalog {
    /// The platform's standard entity traits and restriction flags.
    fn default() -> Self {
        use PrimitiveType::*;
        Self {
            capabilities: vec![
                Capability::new("ICreatable", [("CreateTs", DateTime), ("CreatedBy", String)]),
                Capability::new("IUpdatable", [("UpdateTs", DateTime), ("UpdatedBy", String)]),
                Capability::new(
                    "ISoftDeletable",
                    [("DeleteTs", DateTime), ("DeletedBy", String)],
                ),
                Capability::new("IVersioned", [("Version", Int)]),
            ],
            restrictions: vec![
                Restriction { name: "Mandatory", applies: |f| f.mandatory },
                Restriction { name: "ReadOnly", applies: |f| f.read_only },
                Restriction { name: "Transient", applies: |f| f.transient },
            ],
            base: BaseType {
                name: "Entity".to_string(),
                properties: ["Id".to_string()].into(),
            },
        }
    }
}

impl Catalog {
    /// The entity's mappable primitive fields: normalized name → emitted
    /// type, for every `Datatype` field with a type-table entry.
    pub fn primitive_fields(entity: &EntityType) -> BTreeMap<String, PrimitiveType> {
        entity
            .properties
            .iter()
            .filter(|f| f.attribute_kind == AttributeKind::Datatype)
            .filter_map(|f| map_datatype(&f.ty).map(|t| (pascal_case(&f.name), t)))
            .collect()
    }

    /// Every capability the entity structurally satisfies, sorted by name
    /// for reproducible output. No partial support: one missing or
    /// mistyped requirement disqualifies the capability.
    pub fn supported_capabilities(&self, entity: &EntityType) -> Vec<String> {
        let fields = Self::primitive_fields(entity);
        let mut supported: Vec<String> = self
            .capabilities
            .iter()
            .filter(|cap| {
                cap.required
                    .iter()
                    .all(|(name, ty)| fields.get(name) == Some(ty))
            })
            .map(|cap| cap.name.clone())
            .collect();
        supported.sort();
        supported
    }

    /// Marker names of every restriction flag set on the field, in
    /// registry order.
    pub fn markers(&self, field: &EntityField) -> Vec<&'static str> {
        self.restrictions
            .iter()
            .filter(|r| (r.applies)(field))
            .map(|r| r.name)
            .collect()
    }
}
