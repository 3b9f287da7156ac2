#![deny(missing_docs)]

//! # Category Classification
//!
//! Files a model under Basic or Complex. The decision reads only
//! `needs_reference`, which the extractor sets once all members are built.

use crate::models::{ModelCategory, ModelRepresentation};

/// Returns the category for `model` and hands the model back for storage.
pub fn classify(model: ModelRepresentation) -> (ModelCategory, ModelRepresentation) {
    let category = if model.needs_reference {
        ModelCategory::Complex
    } else {
        ModelCategory::Basic
    };
    (category, model)
}
