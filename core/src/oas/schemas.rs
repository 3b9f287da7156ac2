#![deny(missing_docs)]

//! # Schema Definitions
//!
//! Typed view of a single `components.schemas` entry.
//!
//! Raw JSON values are first read through permissive shim structs and then
//! validated into [`SchemaDefinition`] / [`PropertyDefinition`], so every
//! shape problem is reported with the schema (and property) it came from.

use crate::error::{AppError, AppResult};
use crate::oas::refs::extract_ref_name;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ordered collection of schemas, keyed by schema name in document order.
pub type SchemaSet = IndexMap<String, SchemaDefinition>;

/// A schema is either an enumeration or an object; never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaDefinition {
    /// `enum` + `type`.
    Enumeration {
        /// Literal values in document order.
        values: Vec<String>,
        /// Primitive type name of the values (e.g. `string`).
        primitive: String,
    },
    /// `properties`.
    Object {
        /// Properties in document order.
        properties: IndexMap<String, PropertyDefinition>,
    },
}

/// A single property of an object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    /// What the property points at.
    pub kind: PropertyKind,
    /// `nullable` key present.
    pub nullable: bool,
    /// `readOnly` key present.
    pub read_only: bool,
}

/// Variant of a property, decided by `$ref`, then `type`, then `format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// `$ref` to another schema (stores the target schema name).
    Reference(String),
    /// A scalar with an optional `format`.
    Primitive {
        /// The OpenAPI type name.
        type_name: String,
        /// The OpenAPI format, if any.
        format: Option<String>,
    },
    /// `type: array`.
    Array(ItemKind),
}

/// The `items` of an array property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// `$ref` to another schema.
    Reference(String),
    /// A scalar; any `format` on items is not consulted.
    Primitive(String),
}

impl PropertyDefinition {
    /// Builds a plain property of the given kind.
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            nullable: false,
            read_only: false,
        }
    }

    /// True when the member should default to `None`.
    pub fn is_optional(&self) -> bool {
        self.nullable || self.read_only
    }
}

impl SchemaDefinition {
    /// Returns true for enumeration schemas.
    pub fn is_enumeration(&self) -> bool {
        matches!(self, SchemaDefinition::Enumeration { .. })
    }

    /// Validates a raw JSON schema value into a definition.
    ///
    /// # Arguments
    ///
    /// * `name` - Schema name, used in error messages.
    /// * `value` - The raw schema object.
    pub fn from_value(name: &str, value: Value) -> AppResult<Self> {
        let shim: ShimSchema = serde_json::from_value(value)
            .map_err(|e| AppError::shape(name, format!("unreadable schema: {}", e)))?;

        match (shim.enum_values, shim.properties) {
            (Some(_), Some(_)) => Err(AppError::shape(
                name,
                "declares both `enum` and `properties`",
            )),
            (Some(values), None) => {
                let primitive = shim
                    .schema_type
                    .ok_or_else(|| AppError::shape(name, "enumeration without `type`"))?;
                let values = values
                    .into_iter()
                    .map(|v| match v {
                        Value::String(s) => Ok(s),
                        other => Err(AppError::shape(
                            name,
                            format!("enumeration value {} is not a string", other),
                        )),
                    })
                    .collect::<AppResult<Vec<_>>>()?;
                Ok(SchemaDefinition::Enumeration { values, primitive })
            }
            (None, Some(raw_properties)) => {
                let mut properties = IndexMap::with_capacity(raw_properties.len());
                for (prop_name, raw) in raw_properties {
                    let shim: ShimProperty = serde_json::from_value(raw).map_err(|e| {
                        let reason = format!("unreadable property: {}", e);
                        AppError::mapping(name, &prop_name, reason)
                    })?;
                    let def = PropertyDefinition::from_shim(name, &prop_name, shim)?;
                    properties.insert(prop_name, def);
                }
                Ok(SchemaDefinition::Object { properties })
            }
            (None, None) => Err(AppError::shape(
                name,
                "expected either `enum` or `properties`",
            )),
        }
    }
}

impl PropertyDefinition {
    fn from_shim(schema: &str, property: &str, shim: ShimProperty) -> AppResult<Self> {
        let kind = if let Some(r) = shim.reference {
            PropertyKind::Reference(ref_target(schema, property, &r)?)
        } else {
            match shim.schema_type.as_deref() {
                None => {
                    return Err(AppError::mapping(
                        schema,
                        property,
                        "neither `$ref` nor `type` is present",
                    ))
                }
                Some("array") => {
                    let items = shim.items.ok_or_else(|| {
                        AppError::mapping(schema, property, "array without `items`")
                    })?;
                    PropertyKind::Array(ItemKind::from_shim(schema, property, *items)?)
                }
                Some(type_name) => PropertyKind::Primitive {
                    type_name: type_name.to_string(),
                    format: shim.format,
                },
            }
        };

        Ok(Self {
            kind,
            nullable: shim.nullable.is_some(),
            read_only: shim.read_only.is_some(),
        })
    }
}

impl ItemKind {
    fn from_shim(schema: &str, property: &str, shim: ShimProperty) -> AppResult<Self> {
        if let Some(r) = shim.reference {
            return Ok(ItemKind::Reference(ref_target(schema, property, &r)?));
        }
        shim.schema_type.map(ItemKind::Primitive).ok_or_else(|| {
            AppError::mapping(schema, property, "array `items` has neither `$ref` nor `type`")
        })
    }
}

fn ref_target(schema: &str, property: &str, reference: &str) -> AppResult<String> {
    extract_ref_name(reference).ok_or_else(|| {
        AppError::mapping(
            schema,
            property,
            format!("malformed reference '{}'", reference),
        )
    })
}

/// Permissive view of a schema object. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct ShimSchema {
    #[serde(rename = "enum")]
    enum_values: Option<Vec<Value>>,
    #[serde(rename = "type")]
    schema_type: Option<String>,
    /// Read one by one so errors can name the property.
    properties: Option<IndexMap<String, Value>>,
}

/// Permissive view of a property (or array items) object.
///
/// `nullable` / `readOnly` are kept as raw values: only their presence matters.
#[derive(Debug, Deserialize)]
struct ShimProperty {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    #[serde(rename = "type")]
    schema_type: Option<String>,
    format: Option<String>,
    items: Option<Box<ShimProperty>>,
    #[serde(default, deserialize_with = "present")]
    nullable: Option<Value>,
    #[serde(rename = "readOnly", default, deserialize_with = "present")]
    read_only: Option<Value>,
}

/// Maps any present value, `null` included, to `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enumeration_shape() {
        let def = SchemaDefinition::from_value(
            "Status",
            json!({"type": "string", "enum": ["active", "inActive"]}),
        )
        .unwrap();
        assert_eq!(
            def,
            SchemaDefinition::Enumeration {
                values: vec!["active".into(), "inActive".into()],
                primitive: "string".into(),
            }
        );
    }

    #[test]
    fn test_object_preserves_property_order() {
        let def = SchemaDefinition::from_value(
            "User",
            json!({
                "type": "object",
                "properties": {
                    "zeta": {"type": "string"},
                    "alpha": {"type": "integer"},
                    "mid": {"$ref": "#/components/schemas/Status"}
                }
            }),
        )
        .unwrap();
        let SchemaDefinition::Object { properties } = def else {
            panic!("Expected object")
        };
        let names: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            properties["mid"].kind,
            PropertyKind::Reference("Status".into())
        );
    }

    #[test]
    fn test_both_shapes_rejected() {
        let err = SchemaDefinition::from_value(
            "Weird",
            json!({"type": "string", "enum": ["a"], "properties": {}}),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::SchemaShape { .. }));
    }

    #[test]
    fn test_neither_shape_rejected() {
        let err = SchemaDefinition::from_value("Empty", json!({"type": "object"})).unwrap_err();
        match err {
            AppError::SchemaShape { schema, .. } => assert_eq!(schema, "Empty"),
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_non_string_enum_value_rejected() {
        let err =
            SchemaDefinition::from_value("Code", json!({"type": "integer", "enum": [1, 2]}))
                .unwrap_err();
        assert!(matches!(err, AppError::SchemaShape { .. }));
    }

    #[test]
    fn test_nullable_detected_by_presence() {
        let def = SchemaDefinition::from_value(
            "Note",
            json!({"properties": {
                "a": {"type": "string", "nullable": false},
                "b": {"type": "string", "readOnly": true},
                "c": {"type": "string"}
            }}),
        )
        .unwrap();
        let SchemaDefinition::Object { properties } = def else {
            panic!("Expected object")
        };
        assert!(properties["a"].is_optional());
        assert!(properties["b"].is_optional());
        assert!(!properties["c"].is_optional());
    }

    #[test]
    fn test_explicit_null_counts_as_present() {
        let def = SchemaDefinition::from_value(
            "Note",
            json!({"properties": {
                "a": {"type": "string", "nullable": null},
                "b": {"type": "string", "readOnly": null}
            }}),
        )
        .unwrap();
        let SchemaDefinition::Object { properties } = def else {
            panic!("Expected object")
        };
        assert!(properties["a"].nullable);
        assert!(properties["b"].read_only);
    }

    #[test]
    fn test_empty_yaml_value_counts_as_present() {
        let raw: Value = serde_yaml::from_str(
            "properties:\n  a:\n    type: string\n    nullable:\n",
        )
        .unwrap();
        let def = SchemaDefinition::from_value("Note", raw).unwrap();
        let SchemaDefinition::Object { properties } = def else {
            panic!("Expected object")
        };
        assert!(properties["a"].is_optional());
    }

    #[test]
    fn test_malformed_property_names_property() {
        let cases = vec![
            json!({"type": ["string", "null"]}),
            json!({"$ref": 42}),
            json!("string"),
        ];
        for raw in cases {
            let err = SchemaDefinition::from_value(
                "User",
                json!({"properties": {"id": {"type": "integer"}, "nick": raw}}),
            )
            .unwrap_err();
            match err {
                AppError::SchemaMapping {
                    schema, property, ..
                } => {
                    assert_eq!(schema, "User");
                    assert_eq!(property, "nick");
                }
                other => panic!("Unexpected error: {}", other),
            }
        }
    }

    #[test]
    fn test_property_without_type_is_mapping_error() {
        let err = SchemaDefinition::from_value(
            "User",
            json!({"properties": {"blob": {"description": "no type"}}}),
        )
        .unwrap_err();
        match err {
            AppError::SchemaMapping {
                schema, property, ..
            } => {
                assert_eq!(schema, "User");
                assert_eq!(property, "blob");
            }
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_array_items() {
        let def = SchemaDefinition::from_value(
            "Box",
            json!({"properties": {
                "widgets": {"type": "array", "items": {"$ref": "#/components/schemas/Widget"}},
                "tags": {"type": "array", "items": {"type": "string"}}
            }}),
        )
        .unwrap();
        let SchemaDefinition::Object { properties } = def else {
            panic!("Expected object")
        };
        assert_eq!(
            properties["widgets"].kind,
            PropertyKind::Array(ItemKind::Reference("Widget".into()))
        );
        assert_eq!(
            properties["tags"].kind,
            PropertyKind::Array(ItemKind::Primitive("string".into()))
        );
    }

    #[test]
    fn test_array_without_items_is_mapping_error() {
        let err = SchemaDefinition::from_value(
            "Box",
            json!({"properties": {"things": {"type": "array"}}}),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::SchemaMapping { .. }));
    }
}
