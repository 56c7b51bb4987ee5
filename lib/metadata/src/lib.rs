//! CUBA metadata model — typed snapshots of the platform's introspection
//! endpoints (`/v2/metadata/entities`, `/v2/metadata/enums`).
//!
//! Instances are read-only: fetched once per generation run and never
//! mutated or cached across runs.

pub mod entity;
pub mod enums;

pub use entity::{AttributeKind, Cardinality, EntityField, EntityType};
pub use enums::{EnumType, EnumValue};
