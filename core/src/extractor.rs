#![deny(missing_docs)]

//! # Model Extraction
//!
//! Turns one schema definition into a [`ModelRepresentation`].
//!
//! - Enumerations: `class Name(<primitive>, Enum):` with members sorted by
//!   derived name.
//! - Objects: `class Name(<base model>):` with one member per property, in
//!   document order.

use crate::config::GeneratorConfig;
use crate::error::{AppError, AppResult};
use crate::models::{ModelRepresentation, SpecialImports};
use crate::naming::{enum_member_name, escape_literal, MemberName, MemberRegistry};
use crate::oas::{PropertyDefinition, SchemaDefinition};
use crate::type_mapping::{ResolvedType, TableTypeMapper, TypeMapper};
use indexmap::IndexMap;

/// A model plus the special imports it contributes to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedModel {
    /// The generated class.
    pub model: ModelRepresentation,
    /// This schema's share of the run-wide import flags.
    pub imports: SpecialImports,
}

/// Extracts a model using the table-driven type mapper from `config`.
pub fn extract_model(
    name: &str,
    schema: &SchemaDefinition,
    config: &GeneratorConfig,
) -> AppResult<ExtractedModel> {
    extract_model_with(name, schema, config, &TableTypeMapper::from_config(config))
}

/// Extracts a model with an explicit `TypeMapper`.
pub fn extract_model_with<M: TypeMapper>(
    name: &str,
    schema: &SchemaDefinition,
    config: &GeneratorConfig,
    mapper: &M,
) -> AppResult<ExtractedModel> {
    match schema {
        SchemaDefinition::Enumeration { values, primitive } => {
            extract_enumeration(name, values, primitive, config)
        }
        SchemaDefinition::Object { properties } => {
            extract_object(name, properties, config, mapper)
        }
    }
}

fn extract_enumeration(
    name: &str,
    values: &[String],
    primitive: &str,
    config: &GeneratorConfig,
) -> AppResult<ExtractedModel> {
    let base = config.types.get(primitive).ok_or_else(|| {
        AppError::mapping(
            name,
            "enum",
            format!("unknown primitive type '{}'", primitive),
        )
    })?;
    let header = format!("class {}({}, {}):", name, base, config.enum_base);

    let mut registry = MemberRegistry::new(name);
    let mut pairs = Vec::with_capacity(values.len());
    for value in values {
        let member = enum_member_name(value);
        registry.claim(&member)?;
        pairs.push((member, value));
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let members = pairs
        .into_iter()
        .map(|(member, value)| {
            format!("{}{} = \"{}\"", config.indent, member, escape_literal(value))
        })
        .collect();

    Ok(ExtractedModel {
        model: ModelRepresentation {
            name: name.to_string(),
            header,
            members,
            needs_reference: false,
        },
        imports: SpecialImports {
            enum_support: true,
            datetime_support: false,
        },
    })
}

fn extract_object<M: TypeMapper>(
    name: &str,
    properties: &IndexMap<String, PropertyDefinition>,
    config: &GeneratorConfig,
    mapper: &M,
) -> AppResult<ExtractedModel> {
    let header = format!("class {}({}):", name, config.base_model.name);

    let mut registry = MemberRegistry::new(name);
    let mut imports = SpecialImports::default();
    let mut needs_reference = false;
    let mut members = Vec::with_capacity(properties.len());

    for (property, definition) in properties {
        let ty = mapper.resolve(name, property, definition)?;
        needs_reference |= ty.needs_reference();
        imports.datetime_support |= ty.uses_datetime;

        let attribute = Attribute {
            name: MemberName::for_property(property, &config.reserved),
            ty,
            optional: definition.is_optional(),
        };
        registry.claim(&attribute.name.ident)?;
        members.push(attribute.render(&config.indent));
    }

    tracing::trace!(schema = name, members = members.len(), needs_reference, "extracted object");

    Ok(ExtractedModel {
        model: ModelRepresentation {
            name: name.to_string(),
            header,
            members,
            needs_reference,
        },
        imports,
    })
}

/// One member of an object model before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Attribute {
    name: MemberName,
    ty: ResolvedType,
    optional: bool,
}

impl Attribute {
    fn render(&self, indent: &str) -> String {
        let declaration = format!("{}{}: {}", indent, self.name.ident, self.ty);
        match (&self.name.alias, self.optional) {
            (Some(alias), true) => format!(
                "{} = Field(None, alias=\"{}\")",
                declaration,
                escape_literal(alias)
            ),
            (Some(alias), false) => {
                format!("{} = Field(alias=\"{}\")", declaration, escape_literal(alias))
            }
            (None, true) => format!("{} = None", declaration),
            (None, false) => declaration,
        }
    }
}
