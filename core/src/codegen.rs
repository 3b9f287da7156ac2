#![deny(missing_docs)]

//! # Code Generation
//!
//! Renders a [`GenerationOutput`] into the text of the two generated modules.
//!
//! This is a pure renderer: which imports appear and where each model goes
//! has already been decided by the pipeline.
//! - Basic module: conditional imports, the base model, then Basic models.
//! - Complex module: a star import of the basic module, then Complex models.
//!
//! Top-level blocks are separated by two blank lines and each module ends
//! with a newline.

use crate::config::{CustomBaseModelSpec, EmitterConfig};
use crate::models::{GenerationOutput, ModelCategory, ModelRepresentation};

const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Text of both generated modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModules {
    /// Module holding Basic models and the base model.
    pub basic: String,
    /// Module holding Complex models.
    pub complex: String,
}

impl RenderedModules {
    /// The text for `category`.
    pub fn get(&self, category: ModelCategory) -> &str {
        match category {
            ModelCategory::Basic => &self.basic,
            ModelCategory::Complex => &self.complex,
        }
    }
}

/// Renders both modules into memory.
pub fn render_modules(output: &GenerationOutput, config: &EmitterConfig) -> RenderedModules {
    RenderedModules {
        basic: render_category(output, ModelCategory::Basic, config),
        complex: render_category(output, ModelCategory::Complex, config),
    }
}

/// Renders the module for a single category.
pub fn render_category(
    output: &GenerationOutput,
    category: ModelCategory,
    config: &EmitterConfig,
) -> String {
    let mut blocks = Vec::new();

    match category {
        ModelCategory::Basic => {
            let mut imports = Vec::new();
            if output.imports.enum_support {
                imports.push(config.enum_import.as_str());
            }
            if output.imports.datetime_support {
                imports.push(config.datetime_import.as_str());
            }
            imports.push(config.base_import.as_str());
            blocks.push(imports.join("\n"));
            blocks.push(render_base_model(&output.base_model, &output.indent));
        }
        ModelCategory::Complex => {
            blocks.push(format!("from {} import *", config.basic_module_path));
        }
    }

    for model in output.catalog.get(category) {
        blocks.push(render_model(model, &output.indent));
    }

    let mut code = blocks.join(BLOCK_SEPARATOR);
    code.push('\n');
    code
}

/// Renders the shared base model with its `Config` block.
pub fn render_base_model(spec: &CustomBaseModelSpec, indent: &str) -> String {
    let mut code = format!("class {}(BaseModel):\n", spec.name);
    if spec.options.is_empty() {
        code.push_str(&format!("{}pass", indent));
        return code;
    }

    code.push_str(&format!("{}class Config:", indent));
    for (option, value) in &spec.options {
        code.push_str(&format!("\n{}{}{} = {}", indent, indent, option, value));
    }
    code
}

/// Joins a model's lines; an empty body becomes `pass`.
fn render_model(model: &ModelRepresentation, indent: &str) -> String {
    let mut code = model.lines().collect::<Vec<_>>().join("\n");
    if model.members.is_empty() {
        code.push_str(&format!("\n{}pass", indent));
    }
    code
}
