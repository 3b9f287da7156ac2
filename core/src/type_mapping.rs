#![deny(missing_docs)]

//! # Type Mapping
//!
//! Resolves an OpenAPI property definition to a target type string.
//!
//! Resolution order (first match wins):
//! 1. `$ref` -> referenced schema name.
//! 2. `string` + `format: date-time` -> datetime type.
//! 3. `array` of `$ref` -> `list[Ref]`.
//! 4. `array` of primitive -> `list[primitive]`.
//! 5. primitive.

use crate::config::{GeneratorConfig, TypeTable};
use crate::error::{AppError, AppResult};
use crate::oas::{ItemKind, PropertyDefinition, PropertyKind};
use std::fmt::Display;

/// OpenAPI format that turns a `string` into a datetime.
pub const DATE_TIME_FORMAT: &str = "date-time";

/// Outcome of resolving one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Rendered target type (e.g. `list[Widget]`).
    pub ty: String,
    /// The schema referenced directly or through a list.
    pub reference: Option<String>,
    /// Whether the datetime import is required.
    pub uses_datetime: bool,
}

impl ResolvedType {
    fn plain(ty: String) -> Self {
        Self {
            ty,
            reference: None,
            uses_datetime: false,
        }
    }

    /// True if this type points at another generated model.
    pub fn needs_reference(&self) -> bool {
        self.reference.is_some()
    }
}

impl Display for ResolvedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ty)
    }
}

/// Trait for converting property definitions to target type strings.
pub trait TypeMapper {
    /// Resolves `definition`; `schema`/`property` only feed error messages.
    fn resolve(
        &self,
        schema: &str,
        property: &str,
        definition: &PropertyDefinition,
    ) -> AppResult<ResolvedType>;
}

/// Table-driven implementation of `TypeMapper`.
#[derive(Debug, Clone, Copy)]
pub struct TableTypeMapper<'a> {
    types: &'a TypeTable,
    datetime_type: &'a str,
}

impl<'a> TableTypeMapper<'a> {
    /// Builds a mapper over an explicit table.
    pub fn new(types: &'a TypeTable, datetime_type: &'a str) -> Self {
        Self {
            types,
            datetime_type,
        }
    }

    /// Builds a mapper from the generator settings.
    pub fn from_config(config: &'a GeneratorConfig) -> Self {
        Self::new(&config.types, &config.datetime_type)
    }

    fn primitive(&self, schema: &str, property: &str, type_name: &str) -> AppResult<String> {
        self.types.get(type_name).map(str::to_string).ok_or_else(|| {
            AppError::mapping(
                schema,
                property,
                format!("unknown primitive type '{}'", type_name),
            )
        })
    }
}

impl TypeMapper for TableTypeMapper<'_> {
    fn resolve(
        &self,
        schema: &str,
        property: &str,
        definition: &PropertyDefinition,
    ) -> AppResult<ResolvedType> {
        let resolved = match &definition.kind {
            PropertyKind::Reference(target) => ResolvedType {
                ty: target.clone(),
                reference: Some(target.clone()),
                uses_datetime: false,
            },
            PropertyKind::Primitive { type_name, format }
                if type_name == "string" && format.as_deref() == Some(DATE_TIME_FORMAT) =>
            {
                ResolvedType {
                    ty: self.datetime_type.to_string(),
                    reference: None,
                    uses_datetime: true,
                }
            }
            PropertyKind::Array(ItemKind::Reference(target)) => ResolvedType {
                ty: list_of(target),
                reference: Some(target.clone()),
                uses_datetime: false,
            },
            PropertyKind::Array(ItemKind::Primitive(item_type)) => {
                ResolvedType::plain(list_of(&self.primitive(schema, property, item_type)?))
            }
            PropertyKind::Primitive { type_name, .. } => {
                ResolvedType::plain(self.primitive(schema, property, type_name)?)
            }
        };
        Ok(resolved)
    }
}

fn list_of(inner: &str) -> String {
    format!("list[{}]", inner)
}
