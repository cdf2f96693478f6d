//! End-to-end tests for a list endpoint built on `ListQuery`.
//!
//! Run with: `cargo test -p rest-directives-web --test list_endpoint`

#![allow(clippy::expect_used, clippy::unwrap_used)] // Test code can use unwrap/expect

use axum::{Extension, Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use rest_directives_core::DirectiveConfig;
use rest_directives_macros::Schema;
use rest_directives_web::{ListEndpoint, ListQuery, PagedResponse, WebResult};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Schema, Serialize, Clone)]
struct Book {
    #[schema(rename = "Title")]
    title: String,
    #[schema(rename = "PublishedAt")]
    published_at: u32,
    #[schema(relation, rename = "Author")]
    author: Option<String>,
    #[schema(skip)]
    isbn: String,
}

struct BookList;

impl ListEndpoint for BookList {
    type Resource = Book;
}

struct RecentBooks;

impl ListEndpoint for RecentBooks {
    type Resource = Book;
    const ORDERABLE: &'static [&'static str] = &["publishedAt"];
    const INCLUDABLE: &'static [&'static str] = &["author"];
}

async fn echo_directives(query: ListQuery<BookList>) -> axum::Json<Value> {
    axum::Json(serde_json::to_value(query.directives()).expect("directives serialize"))
}

async fn recent_books(query: ListQuery<RecentBooks>) -> WebResult<PagedResponse<Book>> {
    let mut books = vec![
        Book {
            title: "Dune".to_string(),
            published_at: 1965,
            author: None,
            isbn: String::new(),
        },
        Book {
            title: "Neuromancer".to_string(),
            published_at: 1984,
            author: None,
            isbn: String::new(),
        },
    ];

    for descriptor in query.order().iter().rev() {
        if descriptor.field_name() == "PublishedAt" {
            books.sort_by_key(|b| b.published_at);
            if !descriptor.is_ascending() {
                books.reverse();
            }
        }
    }

    if query.include().contains("Author") {
        for book in &mut books {
            book.author = Some("unknown".to_string());
        }
    }

    let total = books.len() as u64;
    let page_size = query.page().page_size() as usize;
    books.truncate(page_size);
    Ok(PagedResponse::new(books, total))
}

fn server() -> TestServer {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let app = Router::new()
        .route("/books", get(echo_directives))
        .route("/books/recent", get(recent_books));
    TestServer::new(app).expect("test server starts")
}

#[tokio::test]
async fn test_no_directives_uses_defaults() {
    let response = server().get("/books").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "order": [],
            "include": [],
            "page": { "page": 1, "page_size": 25 }
        })
    );
}

#[tokio::test]
async fn test_directives_are_resolved_to_canonical_names() {
    let response = server()
        .get("/books")
        .add_query_param("order", "-publishedat, title")
        .add_query_param("include", "AUTHOR")
        .add_query_param("page", "3")
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "order": [
                { "field_name": "PublishedAt", "ascending": false },
                { "field_name": "Title", "ascending": true }
            ],
            "include": ["Author"],
            "page": { "page": 3, "page_size": 25 }
        })
    );
}

#[tokio::test]
async fn test_unknown_field_is_bad_request() {
    let response = server()
        .get("/books")
        .add_query_param("order", "title,isbn")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "INVALID_ORDER");
    assert_eq!(
        body["message"],
        "invalid order directive: token 1: 'isbn' is not a known field"
    );
}

#[tokio::test]
async fn test_sign_only_token_is_bad_request() {
    let response = server().get("/books").add_query_param("order", "-").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_endpoint_allow_lists() {
    let server = server();

    let response = server
        .get("/books/recent")
        .add_query_param("order", "title")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_ORDER");

    let response = server
        .get("/books/recent")
        .add_query_param("order", "-PUBLISHEDAT")
        .add_query_param("include", "author")
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "items": [
                { "title": "Neuromancer", "published_at": 1984, "author": "unknown", "isbn": "" },
                { "title": "Dune", "published_at": 1965, "author": "unknown", "isbn": "" }
            ],
            "total_items": 2
        })
    );
}

#[tokio::test]
async fn test_bad_page_is_bad_request() {
    let response = server().get("/books").add_query_param("page", "zero").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_PAGE");
}

#[tokio::test]
async fn test_config_extension_changes_limits_and_names() {
    let mut config = DirectiveConfig::default();
    config.paging.default_page_size = 1;
    config.paging.max_page_size = 1;
    config.parameters.order = "sort".to_string();

    let app = Router::new()
        .route("/books/recent", get(recent_books))
        .layer(Extension(config));
    let server = TestServer::new(app).expect("test server starts");

    let response = server
        .get("/books/recent")
        .add_query_param("sort", "publishedAt")
        .await;
    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["items"][0]["title"], "Dune");
    assert_eq!(body["total_items"], 2);

    let response = server
        .get("/books/recent")
        .add_query_param("page_size", "2")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
