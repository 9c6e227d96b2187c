//! Book resource routes.
//!
//! Books are created together with their author in a single request and
//! served back as a flattened view joining both rows.
//!
//! ## Routes
//!
//! - `GET    /books` - List books (paginated, creation order)
//! - `POST   /books` - Create a book together with its author
//! - `DELETE /books/{id}` - Delete a book

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use folio_core::model::{Author, Book, BookId, NewAuthor, NewBook};
use folio_core::store::Page;

use crate::error::{ApiError, ApiErrorBody};
use crate::server::AppState;

/// Request to create a book together with its author.
///
/// Both payloads are required; fields are optional at the serde level so
/// that missing ones surface as a `VALIDATION` error instead of a bare
/// deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    /// Book fields.
    pub book: Option<BookPayload>,
    /// Author fields.
    pub author: Option<AuthorPayload>,
}

/// Book fields accepted on create.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookPayload {
    /// Book title.
    pub title: Option<String>,
}

/// Author fields accepted on create.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorPayload {
    /// Author first name.
    pub first_name: Option<String>,
    /// Author last name.
    pub last_name: Option<String>,
    /// Author age; accepted as an integer or a numeric string.
    pub age: Option<AgeField>,
}

/// Wire representation of an author age.
///
/// Clients send either a JSON integer or a numeric string (`46` or `"46"`);
/// both coerce to the same stored integer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AgeField {
    /// Already an integer.
    Integer(i64),
    /// Numeric string, e.g. `"67"`.
    Text(String),
}

impl AgeField {
    fn coerce(self) -> Result<i64, ApiError> {
        match self {
            Self::Integer(age) => Ok(age),
            Self::Text(raw) => raw.trim().parse::<i64>().map_err(|_| {
                ApiError::validation(format!("author.age is not an integer: {raw:?}"))
            }),
        }
    }
}

/// Flattened book view combining a book row with its author.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookView {
    /// Book ID.
    #[schema(value_type = i64)]
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Author display name (`"<first_name> <last_name>"`).
    pub author_name: String,
    /// Author age.
    pub author_age: i64,
}

impl BookView {
    fn project(book: Book, author: &Author) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_name: author.full_name(),
            author_age: author.age,
        }
    }
}

/// Pagination query parameters for the list endpoint.
///
/// Extracted as raw strings: malformed values coerce to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    /// Maximum number of books to return.
    pub limit: Option<String>,
    /// Number of leading books to skip.
    pub offset: Option<String>,
}

impl ListBooksQuery {
    /// Coerces wire parameters into a storage window.
    ///
    /// Unparseable or non-positive `limit` behaves as absent; unparseable
    /// `offset` (including negative values) behaves as zero.
    fn page(&self) -> Page {
        let limit = self
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0);
        let offset = self
            .offset
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(0);
        Page { limit, offset }
    }
}

/// Book route group.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", delete(delete_book))
}

/// List books.
///
/// GET /api/v1/books
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    params(
        ("limit" = Option<String>, Query, description = "Maximum number of books to return"),
        ("offset" = Option<String>, Query, description = "Number of leading books to skip"),
    ),
    responses(
        (status = 200, description = "Books listed in creation order", body = [BookView]),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBooksQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = query.page();
    tracing::debug!(limit = ?page.limit, offset = page.offset, "Listing books");

    let books = state.books.list_books(page).await.map_err(ApiError::from)?;

    let mut views = Vec::with_capacity(books.len());
    for book in books {
        let author = state
            .authors
            .get_author(book.author_id)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| {
                ApiError::internal(format!(
                    "book {} references missing author {}",
                    book.id, book.author_id
                ))
            })?;
        views.push(BookView::project(book, &author));
    }

    Ok(Json(views))
}

/// Create a book together with its author.
///
/// POST /api/v1/books
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookView),
        (status = 400, description = "Validation failed", body = ApiErrorBody),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (new_author, title) = validate_create(req)?;

    tracing::info!(title = %title, "Creating book");

    // The author row must exist before the book row that references it.
    // The two inserts share no transaction; a failure between them leaves
    // the author behind.
    let author = state
        .authors
        .create_author(new_author)
        .await
        .map_err(ApiError::from)?;
    let book = state
        .books
        .create_book(NewBook {
            title,
            author_id: author.id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(BookView::project(book, &author))))
}

/// Delete a book.
///
/// DELETE /api/v1/books/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID"),
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Not found", body = ApiErrorBody),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(book = id, "Deleting book");

    state
        .books
        .delete_book(BookId::new(id))
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

fn validate_create(req: CreateBookRequest) -> Result<(NewAuthor, String), ApiError> {
    let book = require_present(req.book, "book")?;
    let author = require_present(req.author, "author")?;

    let title = require_non_empty(book.title, "book.title")?;
    let first_name = require_non_empty(author.first_name, "author.first_name")?;
    let last_name = require_non_empty(author.last_name, "author.last_name")?;
    let age = require_present(author.age, "author.age")?.coerce()?;

    Ok((
        NewAuthor {
            first_name,
            last_name,
            age,
        },
        title,
    ))
}

fn require_present<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("missing required field: {field}")))
}

fn require_non_empty(value: Option<String>, field: &str) -> Result<String, ApiError> {
    let value = require_present(value, field)?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::validation(format!(
            "missing required field: {field}"
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use folio_core::model::AuthorId;

    use super::*;

    fn query(limit: Option<&str>, offset: Option<&str>) -> ListBooksQuery {
        ListBooksQuery {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
        }
    }

    #[test]
    fn page_defaults_to_full_listing() {
        assert_eq!(query(None, None).page(), Page::all());
    }

    #[test]
    fn page_parses_valid_limit_and_offset() {
        assert_eq!(
            query(Some("2"), Some("1")).page(),
            Page {
                limit: Some(2),
                offset: 1,
            }
        );
    }

    #[test]
    fn page_coerces_malformed_values_to_defaults() {
        assert_eq!(query(Some("abc"), Some("-1")).page(), Page::all());
        assert_eq!(query(Some("0"), Some("xyz")).page(), Page::all());
        assert_eq!(query(Some("-3"), None).page(), Page::all());
    }

    #[test]
    fn age_coerces_integer_and_numeric_string() {
        assert_eq!(AgeField::Integer(46).coerce().expect("coerce"), 46);
        assert_eq!(
            AgeField::Text("67".to_string()).coerce().expect("coerce"),
            67
        );
    }

    #[test]
    fn age_rejects_non_numeric_string() {
        let err = AgeField::Text("old".to_string())
            .coerce()
            .expect_err("should fail");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION");
    }

    #[test]
    fn validate_create_names_the_missing_field() {
        let req = CreateBookRequest {
            book: Some(BookPayload { title: None }),
            author: Some(AuthorPayload {
                first_name: Some("Andy".to_string()),
                last_name: Some("Weir".to_string()),
                age: Some(AgeField::Integer(67)),
            }),
        };
        let err = validate_create(req).expect_err("should fail");
        assert_eq!(err.code(), "VALIDATION");
        assert!(err.message().contains("book.title"));
    }

    #[test]
    fn validate_create_rejects_blank_strings() {
        let req = CreateBookRequest {
            book: Some(BookPayload {
                title: Some("  ".to_string()),
            }),
            author: Some(AuthorPayload {
                first_name: Some("Andy".to_string()),
                last_name: Some("Weir".to_string()),
                age: Some(AgeField::Integer(67)),
            }),
        };
        let err = validate_create(req).expect_err("should fail");
        assert!(err.message().contains("book.title"));
    }

    #[test]
    fn view_flattens_book_and_author() {
        let author = Author {
            id: AuthorId::new(1),
            first_name: "George".to_string(),
            last_name: "Orwell".to_string(),
            age: 46,
        };
        let book = Book {
            id: BookId::new(1),
            title: "Time Machine".to_string(),
            author_id: author.id,
        };

        let view = BookView::project(book, &author);
        let encoded = serde_json::to_value(&view).expect("serialize view");
        assert_eq!(
            encoded,
            serde_json::json!({
                "id": 1,
                "title": "Time Machine",
                "author_name": "George Orwell",
                "author_age": 46,
            })
        );
    }
}
