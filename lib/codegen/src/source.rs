//! Metadata source abstraction.
//!
//! The generation core never sees HTTP; it consumes this trait. The REST
//! client implements it in `cuba-client`, and `StaticSource` implements it
//! over in-memory fixtures for tests.

use cuba_metadata::{EntityType, EnumType};

use crate::error::CodegenError;

/// Read-only access to the platform's type metadata.
pub trait MetadataSource {
    /// All entity types whose raw metaclass name starts with `prefix`.
    /// Order is unspecified; callers sort.
    fn list_entity_types(&self, prefix: &str) -> Result<Vec<EntityType>, CodegenError>;

    /// Full metadata for one metaclass.
    fn get_entity_type(&self, metaclass: &str) -> Result<EntityType, CodegenError>;

    /// All enumerations whose dotted name starts with `prefix`. The empty
    /// prefix matches everything.
    fn list_enum_types(&self, prefix: &str) -> Result<Vec<EnumType>, CodegenError>;

    /// Full metadata for one enumeration.
    fn get_enum_type(&self, name: &str) -> Result<EnumType, CodegenError>;
}

/// In-memory metadata source over owned snapshots.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    entities: Vec<EntityType>,
    enums: Vec<EnumType>,
}

impl StaticSource {
    pub fn new(entities: Vec<EntityType>, enums: Vec<EnumType>) -> Self {
        Self { entities, enums }
    }
}

impl MetadataSource for StaticSource {
    fn list_entity_types(&self, prefix: &str) -> Result<Vec<EntityType>, CodegenError> {
        Ok(self
            .entities
            .iter()
            .filter(|e| e.entity_name.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn get_entity_type(&self, metaclass: &str) -> Result<EntityType, CodegenError> {
        self.entities
            .iter()
            .find(|e| e.entity_name == metaclass)
            .cloned()
            .ok_or_else(|| CodegenError::Source(format!("unknown metaclass {}", metaclass)))
    }

    fn list_enum_types(&self, prefix: &str) -> Result<Vec<EnumType>, CodegenError> {
        Ok(self
            .enums
            .iter()
            .filter(|e| e.name.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn get_enum_type(&self, name: &str) -> Result<EnumType, CodegenError> {
        self.enums
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .ok_or_else(|| CodegenError::Source(format!("unknown enum {}", name)))
    }
}
