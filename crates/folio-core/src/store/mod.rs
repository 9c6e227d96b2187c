//! Storage traits for authors and books.
//!
//! These traits are the persistence seam: handlers depend on them, never on
//! a concrete backend. Every operation is a blocking-complete async call
//! that returns only once the mutation or read is visible. Identifier
//! assignment is a store capability, not business logic.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Author, AuthorId, Book, BookId, NewAuthor, NewBook};

pub mod memory;

pub use memory::MemoryStore;

/// A pagination window over an ordered listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of rows to return; `None` returns everything.
    pub limit: Option<usize>,
    /// Number of leading rows to skip.
    pub offset: usize,
}

impl Page {
    /// A window covering the entire listing.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            limit: None,
            offset: 0,
        }
    }
}

/// Persistence operations for author rows.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Persists a new author and returns the row with its assigned id.
    async fn create_author(&self, author: NewAuthor) -> Result<Author>;

    /// Fetches an author by id, or `None` if no such row exists.
    async fn get_author(&self, id: AuthorId) -> Result<Option<Author>>;
}

/// Persistence operations for book rows.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persists a new book and returns the row with its assigned id.
    async fn create_book(&self, book: NewBook) -> Result<Book>;

    /// Lists books in creation (id) order within the given window.
    ///
    /// An offset past the end of the listing yields an empty vector, not an
    /// error.
    async fn list_books(&self, page: Page) -> Result<Vec<Book>>;

    /// Deletes exactly one book.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ResourceNotFound`] when no such row exists.
    async fn delete_book(&self, id: BookId) -> Result<()>;
}
