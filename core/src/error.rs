//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Every variant is fatal for a generation run: the pipeline stops at the
//! first error and no module text is produced.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A schema is neither a valid enumeration nor a valid object shape.
    #[from(ignore)]
    #[display("Schema '{schema}' has an invalid shape: {reason}")]
    SchemaShape {
        /// Name of the offending schema.
        schema: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A property type cannot be resolved to a target type.
    #[from(ignore)]
    #[display("Cannot map property '{property}' of schema '{schema}': {reason}")]
    SchemaMapping {
        /// Name of the schema owning the property.
        schema: String,
        /// Name of the property (as written in the document).
        property: String,
        /// Why the mapping failed.
        reason: String,
    },

    /// A derived or renamed member name clashes with another member of the same model.
    #[from(ignore)]
    #[display("Member '{member}' is declared more than once in schema '{schema}'")]
    IdentifierCollision {
        /// Name of the schema.
        schema: String,
        /// The clashing generated member name.
        member: String,
    },

    /// The input document could not be read as a schema collection.
    #[from(ignore)]
    #[display("Document Error: {_0}")]
    Document(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for [`AppError::SchemaShape`].
    pub fn shape(schema: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::SchemaShape {
            schema: schema.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`AppError::SchemaMapping`].
    pub fn mapping(
        schema: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AppError::SchemaMapping {
            schema: schema.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }
}
