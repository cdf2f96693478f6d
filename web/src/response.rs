//! Paged list responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `200 OK` with one page of items and the total across all pages.
///
/// # Response
///
/// ```json
/// {
///   "items": [ ... ],
///   "total_items": 137
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedResponse<T> {
    items: Vec<T>,
    total_items: u64,
}

impl<T> PagedResponse<T> {
    /// Wrap one page of items.
    #[must_use]
    pub const fn new(items: Vec<T>, total_items: u64) -> Self {
        Self { items, total_items }
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items across every page.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }
}

impl<T: Serialize> IntoResponse for PagedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
