//! # folio-api
//!
//! HTTP composition layer for the Folio book service.
//!
//! This crate provides the API surface for Folio, handling:
//!
//! - **Routing**: HTTP endpoint configuration
//! - **Wire Formats**: Request validation and the flattened book view
//! - **Error Mapping**: Core errors translated to HTTP statuses
//! - **Observability**: Request tracing and health checks
//!
//! ## Design Principles
//!
//! This crate is a **thin composition layer** with no storage policy.
//! Entities and the persistence seam live in `folio-core`; this crate is
//! the only component with knowledge of the wire format.
//!
//! ## Endpoints
//!
//! ```text
//! GET    /health              - Health check
//! GET    /ready               - Readiness check
//! GET    /openapi.json        - OpenAPI specification
//! GET    /api/v1/books        - List books (paginated, creation order)
//! POST   /api/v1/books        - Create a book together with its author
//! DELETE /api/v1/books/{id}   - Delete a book
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_api::server::Server;
//!
//! let server = Server::builder().http_port(8080).build();
//! server.serve().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod server;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::server::Server;
}
