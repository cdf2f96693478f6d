//! List directive extractor.
//!
//! [`ListQuery<E>`] resolves `order`, `include`, `page` and `page_size` from
//! the request's query string before the handler runs. A rejected request
//! never reaches the handler body: the extractor answers `400 Bad Request`
//! itself.
//!
//! # Examples
//!
//! ```ignore
//! use rest_directives_macros::Schema;
//! use rest_directives_web::{ListEndpoint, ListQuery};
//!
//! #[derive(Schema, Serialize)]
//! struct Book {
//!     #[schema(rename = "Title")]
//!     title: String,
//!     #[schema(rename = "PublishedAt")]
//!     published_at: String,
//!     #[schema(relation)]
//!     author: Option<Author>,
//! }
//!
//! struct BookList;
//!
//! impl ListEndpoint for BookList {
//!     type Resource = Book;
//!     const ORDERABLE: &'static [&'static str] = &["Title"];
//! }
//!
//! async fn list_books(query: ListQuery<BookList>) -> Result<Json<Vec<Book>>, AppError> {
//!     tracing::info!(order = ?query.order(), "Listing books");
//!     Ok(Json(repo.list(&query).await?))
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use rest_directives_core::{
    DirectiveConfig, ListDirectives, ListRules, QueryParams, schema::Schema,
};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// A list endpoint: the resource it returns and what clients may ask for.
///
/// Empty allow-lists (the default) accept everything the resource's
/// schema declares.
pub trait ListEndpoint {
    /// The resource whose schema names are resolved against.
    type Resource: Schema;

    /// Fields this endpoint may be ordered by.
    const ORDERABLE: &'static [&'static str] = &[];

    /// Relations this endpoint may include.
    const INCLUDABLE: &'static [&'static str] = &[];

    /// Resolution rules for this endpoint.
    #[must_use]
    fn rules() -> ListRules<'static> {
        ListRules::for_schema::<Self::Resource>()
            .orderable(Self::ORDERABLE)
            .includable(Self::INCLUDABLE)
    }
}

/// Validated list directives for endpoint `E`.
///
/// The configuration comes from a `DirectiveConfig` request extension
/// (for example `Router::layer(Extension(config))`) or
/// `DirectiveConfig::default()` when none is installed. An installed
/// configuration that fails validation is a server fault (`500`), not a
/// client one.
pub struct ListQuery<E> {
    directives: ListDirectives,
    endpoint: PhantomData<fn() -> E>,
}

impl<E> ListQuery<E> {
    /// Take the resolved directives.
    #[must_use]
    pub fn into_inner(self) -> ListDirectives {
        self.directives
    }

    /// The resolved directives.
    #[must_use]
    pub const fn directives(&self) -> &ListDirectives {
        &self.directives
    }
}

impl<E> Clone for ListQuery<E> {
    fn clone(&self) -> Self {
        Self {
            directives: self.directives.clone(),
            endpoint: PhantomData,
        }
    }
}

impl<E> fmt::Debug for ListQuery<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListQuery")
            .field("directives", &self.directives)
            .finish()
    }
}

impl<E> Deref for ListQuery<E> {
    type Target = ListDirectives;

    fn deref(&self) -> &Self::Target {
        &self.directives
    }
}

#[async_trait]
impl<S, E> FromRequestParts<S> for ListQuery<E>
where
    S: Send + Sync,
    E: ListEndpoint + 'static,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        let params = QueryParams::from(pairs);

        let config = parts
            .extensions
            .get::<DirectiveConfig>()
            .cloned()
            .unwrap_or_default();

        if let Err(error) = config.validate() {
            return Err(AppError::internal("Directive configuration is invalid")
                .with_source(error.into()));
        }

        match ListDirectives::resolve(&params, &E::rules(), &config) {
            Ok(directives) => Ok(Self {
                directives,
                endpoint: PhantomData,
            }),
            Err(error) => {
                let directive = error.kind().as_str();
                tracing::debug!(
                    directive,
                    path = %parts.uri.path(),
                    reason = %error,
                    "Rejected list directives"
                );
                metrics::counter!("directives.rejected", "directive" => directive).increment(1);
                Err(error.into())
            }
        }
    }
}
