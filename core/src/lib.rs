#![deny(missing_docs)]

//! # Swagger Models Core
//!
//! Core library for turning OpenAPI component schemas into pydantic models.
//!
//! Pipeline: schema document -> typed definitions -> extracted models ->
//! Basic/Complex catalog -> rendered module text.

/// Shared error types.
pub mod error;

/// Target-language settings.
pub mod config;

/// OpenAPI (OAS) input: documents, schemas and references.
pub mod oas;

/// Identifier derivation and collision checks.
pub mod naming;

/// Property type resolution.
pub mod type_mapping;

/// Intermediate model representations.
pub mod models;

/// Schema -> model extraction.
pub mod extractor;

/// Basic/Complex classification.
pub mod classifier;

/// Batch driver.
pub mod pipeline;

/// Module text rendering.
pub mod codegen;

pub use classifier::classify;
pub use codegen::{render_category, render_modules, RenderedModules};
pub use config::{
    CustomBaseModelSpec, EmitterConfig, GeneratorConfig, OptionValue, ReservedWords, TypeTable,
};
pub use error::{AppError, AppResult};
pub use extractor::{extract_model, extract_model_with, ExtractedModel};
pub use models::{
    GenerationOutput, ModelCatalog, ModelCategory, ModelRepresentation, SpecialImports,
};
pub use oas::{parse_schema_document, PropertyDefinition, SchemaDefinition, SchemaSet};
pub use pipeline::generate_models;
pub use type_mapping::{ResolvedType, TableTypeMapper, TypeMapper};

/// Parses `content` and renders both modules in one call.
///
/// Nothing is returned unless every schema was generated successfully.
pub fn generate_from_document(
    content: &str,
    generator: &GeneratorConfig,
    emitter: &EmitterConfig,
) -> AppResult<(GenerationOutput, RenderedModules)> {
    let schemas = parse_schema_document(content)?;
    let output = generate_models(&schemas, generator)?;
    let rendered = render_modules(&output, emitter);
    Ok((output, rendered))
}
