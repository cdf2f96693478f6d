//! The `order=` directive.
//!
//! An order directive is a comma-separated list of tokens of the form
//! `[+|-]<field>`. Each token becomes one [`OrderDescriptor`]; the resulting
//! [`OrderRequest`] keeps the tokens in the order the client sent them, so
//! the first descriptor is the primary sort key.
//!
//! # Rules
//!
//! - Absent or blank input means "no explicit ordering" and yields an empty
//!   request.
//! - `-field` is descending, `+field` and `field` are ascending.
//! - Field names are matched case-insensitively and replaced by the
//!   schema's canonical casing.
//! - A non-empty allow-list further restricts the usable fields.
//! - One invalid token rejects the whole directive. Partial orderings are
//!   never produced.
//! - Duplicate fields are kept as separate descriptors.
//!
//! # Example
//!
//! ```
//! use rest_directives_core::order::{self, OrderDescriptor};
//! use rest_directives_core::schema::{AllowList, FieldSchema};
//!
//! let schema = FieldSchema::new(["a", "b", "c"]);
//! let request = order::resolve(Some("b,-a,+c"), &schema, &AllowList::unrestricted()).unwrap();
//!
//! assert_eq!(
//!     request.descriptors(),
//!     &[
//!         OrderDescriptor::asc("b"),
//!         OrderDescriptor::desc("a"),
//!         OrderDescriptor::asc("c"),
//!     ]
//! );
//! ```

use crate::error::{InvalidToken, join_tokens};
use crate::schema::{AllowList, FieldSchema};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Sort direction of a single term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// One sort term: a canonical field name and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderDescriptor {
    field_name: String,
    ascending: bool,
}

impl OrderDescriptor {
    /// Create a descriptor.
    #[must_use]
    pub fn new(field_name: impl Into<String>, ascending: bool) -> Self {
        Self {
            field_name: field_name.into(),
            ascending,
        }
    }

    /// Ascending descriptor.
    #[must_use]
    pub fn asc(field_name: impl Into<String>) -> Self {
        Self::new(field_name, true)
    }

    /// Descending descriptor.
    #[must_use]
    pub fn desc(field_name: impl Into<String>) -> Self {
        Self::new(field_name, false)
    }

    /// Canonical field name, as declared in the schema.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// True for ascending order.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Direction as an enum, for query builders that prefer one.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        if self.ascending {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// A validated ordering: primary key first, then tie-breakers.
///
/// An empty request means the client asked for no explicit ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderRequest(Vec<OrderDescriptor>);

impl OrderRequest {
    /// Wrap already-validated descriptors.
    #[must_use]
    pub const fn new(descriptors: Vec<OrderDescriptor>) -> Self {
        Self(descriptors)
    }

    /// No explicit ordering.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Descriptors in priority order.
    #[must_use]
    pub fn descriptors(&self) -> &[OrderDescriptor] {
        &self.0
    }

    /// True when no ordering was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of sort terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate descriptors in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, OrderDescriptor> {
        self.0.iter()
    }

    /// Take the descriptors.
    #[must_use]
    pub fn into_inner(self) -> Vec<OrderDescriptor> {
        self.0
    }
}

impl<'a> IntoIterator for &'a OrderRequest {
    type Item = &'a OrderDescriptor;
    type IntoIter = std::slice::Iter<'a, OrderDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Why a single order token was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderTokenError {
    /// The unsigned name matches no schema field.
    #[error("'{token}' is not a known field")]
    UnknownField {
        /// The unsigned name as sent by the client.
        token: String,
    },

    /// The field exists but is not in the endpoint's allow-list.
    #[error("ordering by '{field}' is not allowed")]
    DisallowedField {
        /// Canonical name of the matched field.
        field: String,
    },
}

/// Rejection of an entire `order` directive.
///
/// Lists every invalid token, in input order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid order directive: {}", join_tokens(.errors))]
pub struct OrderRejection {
    errors: Vec<InvalidToken<OrderTokenError>>,
}

impl OrderRejection {
    /// Build a rejection from the collected token errors.
    #[must_use]
    pub const fn new(errors: Vec<InvalidToken<OrderTokenError>>) -> Self {
        Self { errors }
    }

    /// Every invalid token, in input order.
    #[must_use]
    pub fn errors(&self) -> &[InvalidToken<OrderTokenError>] {
        &self.errors
    }
}

/// Resolve a raw `order` value against a schema and allow-list.
///
/// `raw_value` is the parameter value exactly as received, after the single
/// URL decoding done by the query-string parser.
///
/// # Errors
///
/// Returns [`OrderRejection`] if any token names an unknown field or a
/// field outside a non-empty `allowed` list.
pub fn resolve(
    raw_value: Option<&str>,
    schema: &FieldSchema,
    allowed: &AllowList,
) -> Result<OrderRequest, OrderRejection> {
    let Some(raw) = raw_value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(OrderRequest::empty());
    };

    let mut descriptors = Vec::new();
    let mut errors = Vec::new();

    for (position, token) in raw.split(',').map(str::trim).enumerate() {
        match resolve_token(token, schema, allowed) {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(error) => errors.push(InvalidToken::new(position, error)),
        }
    }

    if errors.is_empty() {
        Ok(OrderRequest::new(descriptors))
    } else {
        Err(OrderRejection::new(errors))
    }
}

fn resolve_token(
    token: &str,
    schema: &FieldSchema,
    allowed: &AllowList,
) -> Result<OrderDescriptor, OrderTokenError> {
    let (unsigned, ascending) = split_sign(token);

    let field = schema
        .resolve_field(unsigned)
        .ok_or_else(|| OrderTokenError::UnknownField {
            token: unsigned.to_string(),
        })?;

    if !allowed.permits(field) {
        return Err(OrderTokenError::DisallowedField {
            field: field.to_string(),
        });
    }

    Ok(OrderDescriptor::new(field, ascending))
}

// Only one leading sign is consumed; "--a" looks up "-a".
fn split_sign(token: &str) -> (&str, bool) {
    if let Some(rest) = token.strip_prefix('-') {
        (rest, false)
    } else if let Some(rest) = token.strip_prefix('+') {
        (rest, true)
    } else {
        (token, true)
    }
}
