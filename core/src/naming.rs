#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Derivation of generated identifiers: enum member names, reserved word
//! escaping, and per-model collision checks.

use crate::config::ReservedWords;
use crate::error::{AppError, AppResult};
use std::collections::HashSet;

/// Suffix appended to member names that collide with a reserved identifier.
pub const RESERVED_SUFFIX: char = '_';

/// Converts an enum literal into a member name.
///
/// An underscore is inserted before every uppercase character except the
/// first one, then the whole string is upper-cased.
///
/// e.g. `inActive` -> `IN_ACTIVE`, `ActivePost` -> `ACTIVE_POST`
pub fn enum_member_name(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 4);
    for (i, c) in value.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_uppercase());
    }
    result
}

/// A member identifier plus the wire name it stands for, when they differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberName {
    /// Identifier used in generated code.
    pub ident: String,
    /// Original property name, set only when `ident` was renamed.
    pub alias: Option<String>,
}

impl MemberName {
    /// Renames `property` if it is reserved.
    pub fn for_property(property: &str, reserved: &ReservedWords) -> Self {
        if reserved.contains(property) {
            Self {
                ident: format!("{}{}", property, RESERVED_SUFFIX),
                alias: Some(property.to_string()),
            }
        } else {
            Self {
                ident: property.to_string(),
                alias: None,
            }
        }
    }

    /// The name this member serializes to.
    pub fn wire_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.ident)
    }
}

/// Tracks member identifiers already claimed within one model.
#[derive(Debug)]
pub struct MemberRegistry<'a> {
    schema: &'a str,
    seen: HashSet<String>,
}

impl<'a> MemberRegistry<'a> {
    /// Starts an empty registry for `schema`.
    pub fn new(schema: &'a str) -> Self {
        Self {
            schema,
            seen: HashSet::new(),
        }
    }

    /// Claims `ident`, failing if it was already taken.
    pub fn claim(&mut self, ident: &str) -> AppResult<()> {
        if self.seen.insert(ident.to_string()) {
            Ok(())
        } else {
            Err(AppError::IdentifierCollision {
                schema: self.schema.to_string(),
                member: ident.to_string(),
            })
        }
    }
}

/// Escapes a value for use inside a double-quoted literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
