//! In-memory store implementation.
//!
//! This module provides [`MemoryStore`], a simple in-memory implementation
//! of the [`AuthorStore`] and [`BookStore`] traits suitable for testing and
//! development.
//!
//! ## Limitations
//!
//! - **NOT suitable for production**: No durability, no cross-process
//!   coordination
//! - **Single-process only**: State is not shared across process boundaries
//! - **No persistence**: All rows are lost when the process exits

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::model::{Author, AuthorId, Book, BookId, NewAuthor, NewBook};
use crate::store::{AuthorStore, BookStore, Page};

/// In-memory author/book store.
///
/// Thread-safe via an `RwLock` over both tables. Each table keeps its own
/// monotonic id sequence; sequences survive deletions, so identifiers are
/// never reused.
///
/// ## Example
///
/// ```rust
/// use folio_core::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// // Use store behind the AuthorStore/BookStore traits...
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    authors: BTreeMap<AuthorId, Author>,
    books: BTreeMap<BookId, Book>,
    last_author_id: i64,
    last_book_id: i64,
}

/// Converts a lock poison error to a storage error.
fn poison_err<T>(_: PoisonError<T>) -> Error {
    Error::storage("lock poisoned")
}

impl MemoryStore {
    /// Creates a new, empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of author rows currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn author_count(&self) -> Result<usize> {
        let count = {
            let tables = self.tables.read().map_err(poison_err)?;
            tables.authors.len()
        };
        Ok(count)
    }

    /// Returns the number of book rows currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn book_count(&self) -> Result<usize> {
        let count = {
            let tables = self.tables.read().map_err(poison_err)?;
            tables.books.len()
        };
        Ok(count)
    }
}

#[async_trait]
impl AuthorStore for MemoryStore {
    async fn create_author(&self, author: NewAuthor) -> Result<Author> {
        let mut tables = self.tables.write().map_err(poison_err)?;
        tables.last_author_id += 1;
        let row = Author {
            id: AuthorId::new(tables.last_author_id),
            first_name: author.first_name,
            last_name: author.last_name,
            age: author.age,
        };
        tables.authors.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_author(&self, id: AuthorId) -> Result<Option<Author>> {
        let result = {
            let tables = self.tables.read().map_err(poison_err)?;
            tables.authors.get(&id).cloned()
        };
        Ok(result)
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn create_book(&self, book: NewBook) -> Result<Book> {
        let mut tables = self.tables.write().map_err(poison_err)?;
        tables.last_book_id += 1;
        let row = Book {
            id: BookId::new(tables.last_book_id),
            title: book.title,
            author_id: book.author_id,
        };
        tables.books.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_books(&self, page: Page) -> Result<Vec<Book>> {
        let tables = self.tables.read().map_err(poison_err)?;
        // BTreeMap iteration order is id order, which is creation order.
        let rows = tables.books.values().skip(page.offset);
        let rows = match page.limit {
            Some(limit) => rows.take(limit).cloned().collect(),
            None => rows.cloned().collect(),
        };
        Ok(rows)
    }

    async fn delete_book(&self, id: BookId) -> Result<()> {
        let mut tables = self.tables.write().map_err(poison_err)?;
        if tables.books.remove(&id).is_none() {
            return Err(Error::resource_not_found("book", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orwell() -> NewAuthor {
        NewAuthor {
            first_name: "George".to_string(),
            last_name: "Orwell".to_string(),
            age: 46,
        }
    }

    async fn seed_book(store: &MemoryStore, title: &str) -> Book {
        let author = store.create_author(orwell()).await.expect("create author");
        store
            .create_book(NewBook {
                title: title.to_string(),
                author_id: author.id,
            })
            .await
            .expect("create book")
    }

    #[tokio::test]
    async fn ids_are_assigned_in_creation_order() {
        let store = MemoryStore::new();
        let first = seed_book(&store, "Time Machine").await;
        let second = seed_book(&store, "Yo yo").await;
        assert_eq!(first.id, BookId::new(1));
        assert_eq!(second.id, BookId::new(2));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_deletion() {
        let store = MemoryStore::new();
        let first = seed_book(&store, "Time Machine").await;
        store.delete_book(first.id).await.expect("delete book");
        let second = seed_book(&store, "Yo yo").await;
        assert_eq!(second.id, BookId::new(2));
    }

    #[tokio::test]
    async fn list_returns_books_in_creation_order() {
        let store = MemoryStore::new();
        seed_book(&store, "Time Machine").await;
        seed_book(&store, "Yo yo").await;

        let books = store.list_books(Page::all()).await.expect("list books");
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Time Machine", "Yo yo"]);
    }

    #[tokio::test]
    async fn list_applies_limit_and_offset_window() {
        let store = MemoryStore::new();
        for title in ["a", "b", "c", "d"] {
            seed_book(&store, title).await;
        }

        let window = store
            .list_books(Page {
                limit: Some(2),
                offset: 1,
            })
            .await
            .expect("list books");
        let titles: Vec<&str> = window.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn list_with_offset_past_end_is_empty() {
        let store = MemoryStore::new();
        seed_book(&store, "Time Machine").await;

        let books = store
            .list_books(Page {
                limit: None,
                offset: 5,
            })
            .await
            .expect("list books");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_book_but_keeps_author() {
        let store = MemoryStore::new();
        let book = seed_book(&store, "Time Machine").await;

        store.delete_book(book.id).await.expect("delete book");

        assert_eq!(store.book_count().expect("book count"), 0);
        assert_eq!(store.author_count().expect("author count"), 1);
    }

    #[tokio::test]
    async fn delete_of_missing_book_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .delete_book(BookId::new(42))
            .await
            .expect_err("delete should fail");
        assert!(matches!(
            err,
            Error::ResourceNotFound {
                resource_type: "book",
                ..
            }
        ));
    }
}
