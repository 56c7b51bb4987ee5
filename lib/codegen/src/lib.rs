//! CUBA code generation core.
//!
//! Turns entity/enum metadata snapshots (`cuba-metadata`) into C# type
//! declarations: naming normalization, primitive type mapping, structural
//! capability inference, property resolution, and text assembly over a
//! small declaration tree.
//!
//! The core is purely functional over immutable metadata: no I/O, no
//! logging, no shared state. Transport lives behind [`MetadataSource`].

pub mod capability;
pub mod decl;
pub mod entity;
pub mod enums;
pub mod error;
pub mod naming;
pub mod render;
pub mod resolve;
pub mod source;
pub mod types;

pub use capability::{BaseType, Capability, Catalog, Restriction};
pub use entity::{generate_entities, generate_entity};
pub use enums::{generate_enum, generate_enums};
pub use error::CodegenError;
pub use source::{MetadataSource, StaticSource};
pub use types::PrimitiveType;
