//! Error types and result aliases for Folio.
//!
//! This module defines the shared error taxonomy used across all Folio
//! components. Errors are structured for programmatic handling; the HTTP
//! layer translates each variant to a status code without local recovery.

use std::fmt;

/// The result type used throughout Folio.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Folio operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was missing or malformed.
    #[error("validation failed: {message}")]
    Validation {
        /// Description of what failed validation.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource_type} with id {id}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// A storage operation failed.
    #[error("storage error: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
        /// The underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal invariant did not hold.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl Error {
    /// Creates a new validation error with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a new resource not found error.
    #[must_use]
    pub fn resource_not_found(resource_type: &'static str, id: impl fmt::Display) -> Self {
        Self::ResourceNotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a new storage error with the given message.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new storage error with a source cause.
    #[must_use]
    pub fn storage_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_not_found_includes_type_and_id() {
        let error = Error::resource_not_found("book", 42);
        assert_eq!(error.to_string(), "not found: book with id 42");
    }

    #[test]
    fn validation_display_carries_message() {
        let error = Error::validation("missing required field: title");
        assert_eq!(
            error.to_string(),
            "validation failed: missing required field: title"
        );
    }
}
