//! Entity model for the Folio catalog.
//!
//! Identifiers are strongly typed so an author id can never be handed to a
//! book lookup. Both are thin wrappers over the store-assigned `i64`
//! sequence value: monotonically increasing in creation order, never reused
//! after deletion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for an author row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(i64);

impl AuthorId {
    /// Creates an author ID from a raw sequence value.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the underlying sequence value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a book row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Creates a book ID from a raw sequence value.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the underlying sequence value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted author row.
///
/// Authors are created only as a side effect of book creation and are never
/// updated or deleted; deleting a book leaves its author behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Store-assigned identifier.
    pub id: AuthorId,
    /// Author first name.
    pub first_name: String,
    /// Author last name.
    pub last_name: String,
    /// Author age in years.
    pub age: i64,
}

impl Author {
    /// Returns the author's display name (`"<first_name> <last_name>"`).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Author fields supplied on creation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    /// Author first name.
    pub first_name: String,
    /// Author last name.
    pub last_name: String,
    /// Author age in years.
    pub age: i64,
}

/// A persisted book row.
///
/// Every book references exactly one author, which existed at the time the
/// book was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Store-assigned identifier.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// The referenced author.
    pub author_id: AuthorId,
}

/// Book fields supplied on creation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    /// Book title.
    pub title: String,
    /// The referenced author.
    pub author_id: AuthorId,
}
