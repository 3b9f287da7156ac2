#![deny(missing_docs)]

//! # Generation Pipeline
//!
//! Runs extraction and classification over a whole schema set.
//!
//! Schemas are processed strictly in document order. Import flags are folded
//! across every schema, and the first error aborts the run, so callers either
//! get a complete [`GenerationOutput`] or nothing.

use crate::classifier::classify;
use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::extractor::extract_model;
use crate::models::{GenerationOutput, ModelCatalog, SpecialImports};
use crate::oas::SchemaSet;

/// Generates and classifies every schema in `schemas`.
///
/// # Arguments
///
/// * `schemas` - Schemas in document order.
/// * `config` - Target-language settings.
pub fn generate_models(
    schemas: &SchemaSet,
    config: &GeneratorConfig,
) -> AppResult<GenerationOutput> {
    let mut catalog = ModelCatalog::default();
    let mut imports = SpecialImports::default();

    for (name, schema) in schemas {
        let extracted = extract_model(name, schema, config)?;
        imports |= extracted.imports;

        let (category, model) = classify(extracted.model);
        tracing::debug!(
            schema = %name,
            %category,
            members = model.members.len(),
            "classified model"
        );
        catalog.push(category, model);
    }

    tracing::info!(
        basic = catalog.basic.len(),
        complex = catalog.complex.len(),
        enum_support = imports.enum_support,
        datetime_support = imports.datetime_support,
        "generated models"
    );

    Ok(GenerationOutput {
        catalog,
        imports,
        base_model: config.base_model.clone(),
        indent: config.indent.clone(),
    })
}
