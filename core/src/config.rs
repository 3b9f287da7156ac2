#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Target-language knobs injected into the pipeline: the primitive type table,
//! the reserved identifier set, the shared base model and the emitted import
//! lines. `Default` impls reproduce the pydantic profile.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Python keywords (`keyword.kwlist`).
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Maps OpenAPI primitive type names to target type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    entries: IndexMap<String, String>,
}

impl Default for TypeTable {
    /// `number` maps to `int`, matching the generated models this tool has always produced.
    fn default() -> Self {
        let entries = [
            ("string", "str"),
            ("integer", "int"),
            ("number", "int"),
            ("boolean", "bool"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { entries }
    }
}

impl TypeTable {
    /// Replaces (or adds) a single entry.
    pub fn with_mapping(mut self, openapi_type: &str, target: &str) -> Self {
        self.entries
            .insert(openapi_type.to_string(), target.to_string());
        self
    }

    /// Looks up the target name for an OpenAPI primitive.
    pub fn get(&self, openapi_type: &str) -> Option<&str> {
        self.entries.get(openapi_type).map(String::as_str)
    }
}

/// Identifiers that cannot be used verbatim as member names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords(BTreeSet<String>);

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new(PYTHON_KEYWORDS.iter().copied())
    }
}

impl ReservedWords {
    /// Builds a set from any list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    /// Whether `name` is reserved.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

/// A literal value in the base model's `Config` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Rendered as `True` / `False`.
    Bool(bool),
    /// Rendered as a decimal integer.
    Int(i64),
    /// Rendered double-quoted.
    Str(String),
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Bool(true) => write!(f, "True"),
            OptionValue::Bool(false) => write!(f, "False"),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Str(s) => write!(f, "\"{}\"", crate::naming::escape_literal(s)),
        }
    }
}

/// The shared superclass of every object model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBaseModelSpec {
    /// Class name (e.g. `CustomModel`).
    pub name: String,
    /// `Config` options in declaration order.
    pub options: IndexMap<String, OptionValue>,
}

impl Default for CustomBaseModelSpec {
    fn default() -> Self {
        let options = [
            "allow_population_by_field_name",
            "arbitrary_types_allowed",
            "use_enum_values",
        ]
        .into_iter()
        .map(|k| (k.to_string(), OptionValue::Bool(true)))
        .collect();
        Self {
            name: "CustomModel".to_string(),
            options,
        }
    }
}

/// Settings consumed by the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Primitive type table.
    pub types: TypeTable,
    /// Reserved member identifiers.
    pub reserved: ReservedWords,
    /// Target name for `string` + `format: date-time`.
    pub datetime_type: String,
    /// Capability mixed into enumeration headers (`class X(str, Enum)`).
    pub enum_base: String,
    /// Superclass of object models.
    pub base_model: CustomBaseModelSpec,
    /// Member indentation.
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            types: TypeTable::default(),
            reserved: ReservedWords::default(),
            datetime_type: "datetime".to_string(),
            enum_base: "Enum".to_string(),
            base_model: CustomBaseModelSpec::default(),
            indent: "    ".to_string(),
        }
    }
}

/// Settings consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Emitted when any enumeration was generated.
    pub enum_import: String,
    /// Emitted when any datetime member was generated.
    pub datetime_import: String,
    /// Always emitted into the basic module.
    pub base_import: String,
    /// Dotted module path of the basic module, star-imported by the complex module.
    pub basic_module_path: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            enum_import: "from enum import Enum".to_string(),
            datetime_import: "from datetime import datetime".to_string(),
            base_import: "from pydantic import BaseModel, Field".to_string(),
            basic_module_path: "Files.BasicModels".to_string(),
        }
    }
}
