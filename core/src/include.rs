//! The `include=` directive.
//!
//! A comma-separated list of relation names the client wants embedded in
//! each returned item. Relations are resolved against the schema's declared
//! relations (not its orderable fields), case-insensitively, with the same
//! all-or-nothing policy as `order=`.

use crate::error::{InvalidToken, join_tokens};
use crate::schema::{AllowList, FieldSchema};
use serde::Serialize;
use thiserror::Error;

/// Validated relation names, in the order requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IncludeRequest(Vec<String>);

impl IncludeRequest {
    /// Wrap already-validated relation names.
    #[must_use]
    pub const fn new(relations: Vec<String>) -> Self {
        Self(relations)
    }

    /// Nothing extra to include.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Canonical relation names.
    #[must_use]
    pub fn relations(&self) -> &[String] {
        &self.0
    }

    /// True when no relation was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `relation` was requested (case-insensitive).
    #[must_use]
    pub fn contains(&self, relation: &str) -> bool {
        let wanted = relation.to_lowercase();
        self.0.iter().any(|r| r.to_lowercase() == wanted)
    }
}

/// Why a single include token was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IncludeTokenError {
    /// The name matches no declared relation.
    #[error("'{token}' is not a known relation")]
    UnknownRelation {
        /// The name as sent by the client.
        token: String,
    },

    /// The relation exists but is not in the endpoint's allow-list.
    #[error("including '{relation}' is not allowed")]
    DisallowedRelation {
        /// Canonical name of the matched relation.
        relation: String,
    },
}

/// Rejection of an entire `include` directive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid include directive: {}", join_tokens(.errors))]
pub struct IncludeRejection {
    errors: Vec<InvalidToken<IncludeTokenError>>,
}

impl IncludeRejection {
    /// Build a rejection from the collected token errors.
    #[must_use]
    pub const fn new(errors: Vec<InvalidToken<IncludeTokenError>>) -> Self {
        Self { errors }
    }

    /// Every invalid token, in input order.
    #[must_use]
    pub fn errors(&self) -> &[InvalidToken<IncludeTokenError>] {
        &self.errors
    }
}

/// Resolve a raw `include` value against a schema's relations.
///
/// # Errors
///
/// Returns [`IncludeRejection`] if any token names an unknown relation or
/// one outside a non-empty `allowed` list.
pub fn resolve(
    raw_value: Option<&str>,
    schema: &FieldSchema,
    allowed: &AllowList,
) -> Result<IncludeRequest, IncludeRejection> {
    let Some(raw) = raw_value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(IncludeRequest::empty());
    };

    let mut relations = Vec::new();
    let mut errors = Vec::new();

    for (position, token) in raw.split(',').map(str::trim).enumerate() {
        let resolved = match schema.resolve_relation(token) {
            None => Err(IncludeTokenError::UnknownRelation {
                token: token.to_string(),
            }),
            Some(relation) if !allowed.permits(relation) => {
                Err(IncludeTokenError::DisallowedRelation {
                    relation: relation.to_string(),
                })
            }
            Some(relation) => Ok(relation.to_string()),
        };

        match resolved {
            Ok(relation) => relations.push(relation),
            Err(error) => errors.push(InvalidToken::new(position, error)),
        }
    }

    if errors.is_empty() {
        Ok(IncludeRequest::new(relations))
    } else {
        Err(IncludeRejection::new(errors))
    }
}
