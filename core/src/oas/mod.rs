#![deny(missing_docs)]

//! # OpenAPI Input Module
//!
//! - **document**: Loading `components.schemas` from JSON/YAML text.
//! - **schemas**: Typed schema/property definitions.
//! - **refs**: `$ref` pointer helpers.

pub mod document;
pub mod refs;
pub mod schemas;

pub use document::{parse_schema_document, schemas_from_values};
pub use schemas::{ItemKind, PropertyDefinition, PropertyKind, SchemaDefinition, SchemaSet};
