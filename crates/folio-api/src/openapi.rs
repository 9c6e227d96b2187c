//! `OpenAPI` (3.x) specification generation for `folio-api`.
//!
//! The generated spec is served at `/openapi.json` and can be used to
//! generate external clients or to detect breaking API changes in CI.

use utoipa::OpenApi;

/// `OpenAPI` documentation for the Folio REST API (`/api/v1/*`).
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        description = "Folio book catalog REST API"
    ),
    paths(
        crate::routes::books::list_books,
        crate::routes::books::create_book,
        crate::routes::books::delete_book,
        crate::routes::openapi::get_openapi_json,
    ),
    components(
        schemas(
            crate::error::ApiErrorBody,
            crate::routes::books::CreateBookRequest,
            crate::routes::books::BookPayload,
            crate::routes::books::AuthorPayload,
            crate::routes::books::AgeField,
            crate::routes::books::BookView,
        )
    ),
    tags(
        (name = "books", description = "Book resource operations"),
        (name = "openapi", description = "API specification"),
    ),
)]
pub struct ApiDoc;

/// Returns the generated `OpenAPI` spec.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Returns the generated `OpenAPI` spec serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen).
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_covers_all_book_operations() {
        let spec = openapi();
        let paths = &spec.paths.paths;
        assert!(paths.contains_key("/api/v1/books"));
        assert!(paths.contains_key("/api/v1/books/{id}"));
        assert!(paths.contains_key("/openapi.json"));
    }

    #[test]
    fn spec_serializes_to_json() {
        let json = openapi_json().expect("serialize spec");
        assert!(json.contains("Folio API"));
    }
}
