//! # REST Directives Core
//!
//! Parsing and validation of the query-string directives that list
//! endpoints accept:
//!
//! - `order=-createdAt,name` → [`OrderRequest`]
//! - `include=author,reviews` → [`IncludeRequest`]
//! - `page=2&page_size=50` → [`PageRequest`]
//!
//! Every resolver is a pure function of its arguments. It takes the raw
//! client string plus an explicitly declared [`FieldSchema`] and returns
//! either a validated directive or a rejection value. Nothing here touches
//! a data store or an HTTP response. That belongs to the caller (see
//! `rest-directives-web` for the axum integration).
//!
//! ## Guarantees
//!
//! - Field and relation names are matched case-insensitively and replaced
//!   by their canonical, declared casing.
//! - One invalid token rejects the whole directive. Partial results are
//!   never returned.
//! - Blank input means "nothing requested": empty ordering, no includes,
//!   first page with the default size.
//! - Token order is preserved and duplicates are kept.
//!
//! ## Example
//!
//! ```
//! use rest_directives_core::prelude::*;
//!
//! let schema = FieldSchema::new(["Name", "CreatedAt"]);
//! let allowed = AllowList::unrestricted();
//!
//! let order = resolve_order(Some("-createdat, name"), &schema, &allowed).unwrap();
//! assert_eq!(order.descriptors()[0], OrderDescriptor::desc("CreatedAt"));
//! assert_eq!(order.descriptors()[1], OrderDescriptor::asc("Name"));
//!
//! assert!(resolve_order(Some("name,password"), &schema, &allowed).is_err());
//! ```

pub mod config;
pub mod directives;
pub mod error;
pub mod include;
pub mod order;
pub mod page;
pub mod query;
pub mod schema;

pub use config::{ConfigError, DirectiveConfig, PagingConfig, ParameterNames};
pub use directives::{ListDirectives, ListRules};
pub use error::{DirectiveError, DirectiveKind, InvalidToken};
pub use include::{IncludeRejection, IncludeRequest, IncludeTokenError, resolve as resolve_include};
pub use order::{
    OrderDescriptor, OrderRejection, OrderRequest, OrderTokenError, SortDirection,
    resolve as resolve_order,
};
pub use page::{PageParameter, PageRejection, PageRequest, resolve as resolve_page};
pub use query::QueryParams;
pub use schema::{AllowList, FieldSchema, Schema};

/// Commonly used types and resolvers.
pub mod prelude {
    pub use crate::{
        AllowList, DirectiveConfig, DirectiveError, FieldSchema, IncludeRequest, ListDirectives,
        ListRules, OrderDescriptor, OrderRequest, PageRequest, QueryParams, Schema, resolve_include,
        resolve_order, resolve_page,
    };
}
