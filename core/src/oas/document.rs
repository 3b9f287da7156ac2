#![deny(missing_docs)]

//! # Schema Document Loading
//!
//! Reads the schema collection out of an OpenAPI 3 (`components.schemas`) or
//! Swagger 2 (`definitions`) document given as JSON or YAML text.

use crate::error::{AppError, AppResult};
use crate::oas::schemas::{SchemaDefinition, SchemaSet};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Minimal view of the document root; everything but the schema maps is ignored.
#[derive(Debug, Deserialize)]
struct ShimDocument {
    components: Option<ShimComponents>,
    /// Swagger 2.0 location of the schemas.
    definitions: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct ShimComponents {
    schemas: Option<IndexMap<String, Value>>,
}

/// Parses a JSON or YAML document and returns its schemas in document order.
///
/// YAML is a superset of JSON, so a single parser handles both.
pub fn parse_schema_document(content: &str) -> AppResult<SchemaSet> {
    let shim: ShimDocument = serde_yaml::from_str(content)
        .map_err(|e| AppError::Document(format!("Failed to parse document: {}", e)))?;

    let raw = shim
        .components
        .and_then(|c| c.schemas)
        .or(shim.definitions)
        .ok_or_else(|| {
            AppError::Document(
                "No `components.schemas` or `definitions` found in document".into(),
            )
        })?;

    schemas_from_values(raw)
}

/// Validates an already-parsed `name -> schema` mapping.
pub fn schemas_from_values(raw: IndexMap<String, Value>) -> AppResult<SchemaSet> {
    let mut schemas = SchemaSet::with_capacity(raw.len());
    for (name, value) in raw {
        let definition = SchemaDefinition::from_value(&name, value)?;
        schemas.insert(name, definition);
    }
    tracing::debug!(count = schemas.len(), "loaded schema definitions");
    Ok(schemas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_openapi3_yaml() {
        let yaml = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths: {}
components:
  schemas:
    User:
      type: object
      properties:
        id:
          type: integer
    Status:
      type: string
      enum: [active, inActive]
"#;
        let schemas = parse_schema_document(yaml).unwrap();
        let names: Vec<&str> = schemas.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["User", "Status"]);
        assert!(schemas["Status"].is_enumeration());
    }

    #[test]
    fn test_parse_json_document() {
        let json = r##"{
            "openapi": "3.0.1",
            "components": {"schemas": {
                "Widget": {"type": "object", "properties": {"name": {"type": "string"}}}
            }}
        }"##;
        let schemas = parse_schema_document(json).unwrap();
        assert_eq!(schemas.len(), 1);
    }

    #[test]
    fn test_parse_swagger2_definitions() {
        let yaml = r#"
swagger: "2.0"
definitions:
  Pet:
    type: object
    properties:
      name: { type: string }
"#;
        let schemas = parse_schema_document(yaml).unwrap();
        assert!(schemas.contains_key("Pet"));
    }

    #[test]
    fn test_missing_schemas() {
        let err = parse_schema_document("openapi: 3.0.0\npaths: {}\n").unwrap_err();
        assert!(matches!(err, AppError::Document(_)));
    }

    #[test]
    fn test_invalid_text() {
        let err = parse_schema_document("{ not: [valid").unwrap_err();
        assert!(matches!(err, AppError::Document(_)));
    }
}
