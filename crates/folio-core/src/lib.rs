//! # folio-core
//!
//! Core abstractions for the Folio book service.
//!
//! This crate provides the foundational types used across all Folio components:
//!
//! - **Entity Model**: Authors and the Books that reference them
//! - **Store Traits**: Abstract persistence interfaces for both entities
//! - **Error Types**: Shared error definitions and result types
//! - **Observability**: Structured logging initialization
//!
//! ## Crate Boundary
//!
//! `folio-core` knows nothing about HTTP. Wire formats, status codes, and
//! request validation live in `folio-api`; this crate owns the entities,
//! the storage seam, and the error taxonomy they share.
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//!
//! let store = MemoryStore::new();
//! // Use store behind the AuthorStore/BookStore traits...
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod model;
pub mod observability;
pub mod store;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use folio_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::model::{Author, AuthorId, Book, BookId, NewAuthor, NewBook};
    pub use crate::store::{AuthorStore, BookStore, MemoryStore, Page};
}

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use model::{Author, AuthorId, Book, BookId, NewAuthor, NewBook};
pub use observability::{LogFormat, init_logging};
pub use store::{AuthorStore, BookStore, MemoryStore, Page};
