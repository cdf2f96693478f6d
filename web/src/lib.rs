//! Axum integration for REST list directives.
//!
//! The directive resolvers in `rest-directives-core` are pure functions.
//! This crate is the imperative shell around them:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← Query string decoding
//! │  - ListQuery<E> extractor               │  ← 400 on rejection
//! │  - PagedResponse<T>                     │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - order / include / page resolvers     │  ← Testable at memory speed
//! │  - FieldSchema, AllowList               │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** `ListQuery<E>`: decode the query string once, resolve the
//!    directives against `E`'s schema and allow-lists
//! 3. **Reject** invalid directives with `400 Bad Request` (the handler
//!    body never runs, so no query is issued)
//! 4. **Hand** the validated `ListDirectives` to the data layer
//! 5. **Return** a `PagedResponse`
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use rest_directives_web::{AppError, ListEndpoint, ListQuery, PagedResponse};
//!
//! async fn list_books(
//!     State(repo): State<BookRepo>,
//!     query: ListQuery<BookList>,
//! ) -> Result<PagedResponse<Book>, AppError> {
//!     let (books, total) = repo.list(query.directives()).await?;
//!     Ok(PagedResponse::new(books, total))
//! }
//!
//! let app = Router::new()
//!     .route("/api/v1/books", get(list_books))
//!     .layer(Extension(rest_directives_web::config::from_env()?))
//!     .with_state(repo);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod response;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{ListEndpoint, ListQuery};
pub use response::PagedResponse;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
