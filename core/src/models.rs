#![deny(missing_docs)]

//! # Model Representations
//!
//! Intermediate Representation (IR) handed from the extractor to the
//! classifier and, finally, to the renderer.

use crate::config::CustomBaseModelSpec;
use std::fmt;
use std::ops::BitOrAssign;

/// A generated class: header line plus member lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRepresentation {
    /// Schema name, also the class name.
    pub name: String,
    /// `class Name(Base):`
    pub header: String,
    /// Indented member lines, in emission order.
    pub members: Vec<String>,
    /// True iff a member refers to another generated model.
    pub needs_reference: bool,
}

impl ModelRepresentation {
    /// Header followed by members.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(self.members.iter().map(String::as_str))
    }
}

/// Imports that are only emitted when some model needs them.
///
/// Folded with `|=` across a run; flags only ever go from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialImports {
    /// An enumeration was generated.
    pub enum_support: bool,
    /// A datetime member was generated.
    pub datetime_support: bool,
}

impl BitOrAssign for SpecialImports {
    fn bitor_assign(&mut self, rhs: Self) {
        self.enum_support |= rhs.enum_support;
        self.datetime_support |= rhs.datetime_support;
    }
}

/// The output group a model is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    /// No references to other generated models.
    Basic,
    /// References at least one other generated model.
    Complex,
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelCategory::Basic => write!(f, "basic"),
            ModelCategory::Complex => write!(f, "complex"),
        }
    }
}

/// Models filed by category, each list in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    /// Basic models.
    pub basic: Vec<ModelRepresentation>,
    /// Complex models.
    pub complex: Vec<ModelRepresentation>,
}

impl ModelCatalog {
    /// Appends `model` to the list for `category`.
    pub fn push(&mut self, category: ModelCategory, model: ModelRepresentation) {
        match category {
            ModelCategory::Basic => self.basic.push(model),
            ModelCategory::Complex => self.complex.push(model),
        }
    }

    /// The list for `category`.
    pub fn get(&self, category: ModelCategory) -> &[ModelRepresentation] {
        match category {
            ModelCategory::Basic => &self.basic,
            ModelCategory::Complex => &self.complex,
        }
    }

    /// Looks a model up by name in either list.
    pub fn find(&self, name: &str) -> Option<(ModelCategory, &ModelRepresentation)> {
        self.basic
            .iter()
            .find(|m| m.name == name)
            .map(|m| (ModelCategory::Basic, m))
            .or_else(|| {
                self.complex
                    .iter()
                    .find(|m| m.name == name)
                    .map(|m| (ModelCategory::Complex, m))
            })
    }
}

/// Everything the renderer needs; no further decisions are left to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Classified models.
    pub catalog: ModelCatalog,
    /// Imports required by the basic module.
    pub imports: SpecialImports,
    /// Base model declared in the basic module.
    pub base_model: CustomBaseModelSpec,
    /// Indentation the members were rendered with; reused for generated blocks.
    pub indent: String,
}
