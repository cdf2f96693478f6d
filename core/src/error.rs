//! Rejection types shared by the directive resolvers.
//!
//! Every resolver reports failures as values, never panics. Per-token
//! failures are collected into one rejection for the whole directive, so a
//! single bad term rejects the request.

use crate::include::IncludeRejection;
use crate::order::OrderRejection;
use crate::page::PageRejection;
use std::fmt;
use thiserror::Error;

/// One invalid token and its position in the comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidToken<E> {
    position: usize,
    error: E,
}

impl<E> InvalidToken<E> {
    /// Pair an error with the zero-based token position it came from.
    #[must_use]
    pub const fn new(position: usize, error: E) -> Self {
        Self { position, error }
    }

    /// Zero-based position of the token in the raw value.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// What was wrong with the token.
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }
}

impl<E: fmt::Display> fmt::Display for InvalidToken<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token {}: {}", self.position, self.error)
    }
}

pub(crate) fn join_tokens<E: fmt::Display>(errors: &[InvalidToken<E>]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Which directive a rejection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `order=`
    Order,
    /// `include=`
    Include,
    /// `page=` / `page_size=`
    Page,
}

impl DirectiveKind {
    /// Lowercase name, suitable for log fields and metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Include => "include",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of a list request's directives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// The `order` directive was invalid.
    #[error(transparent)]
    Order(#[from] OrderRejection),

    /// The `include` directive was invalid.
    #[error(transparent)]
    Include(#[from] IncludeRejection),

    /// The paging directives were invalid.
    #[error(transparent)]
    Page(#[from] PageRejection),
}

impl DirectiveError {
    /// The directive that was rejected.
    #[must_use]
    pub const fn kind(&self) -> DirectiveKind {
        match self {
            Self::Order(_) => DirectiveKind::Order,
            Self::Include(_) => DirectiveKind::Include,
            Self::Page(_) => DirectiveKind::Page,
        }
    }
}
