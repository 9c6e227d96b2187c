//! Handler for the `OpenAPI` specification endpoint.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::error::{ApiError, ApiErrorBody};
use crate::openapi::openapi_json;

/// Returns the Folio `OpenAPI` spec as JSON.
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "openapi",
    responses(
        (
            status = 200,
            description = "OpenAPI specification for the Folio API",
            body = String,
            content_type = "application/json"
        ),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub async fn get_openapi_json() -> Response {
    match openapi_json() {
        Ok(spec) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], spec).into_response(),
        Err(err) => {
            ApiError::internal(format!("failed to serialize OpenAPI spec: {err}")).into_response()
        }
    }
}
