//! Error types for the query crate.
//!
//! Running a query never fails. These errors only come out of the strict
//! query-string parser, where user input has to be rejected instead of
//! silently normalized.

use thiserror::Error;

/// Errors produced while parsing query state from a query string.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query string has a bad `%XX` escape, decodes to invalid UTF-8,
    /// or has a parameter with an empty key.
    #[error("invalid query string: {0}")]
    InvalidEncoding(String),

    /// The `page` parameter is not a positive integer.
    #[error("invalid page '{0}': expected a positive integer")]
    InvalidPage(String),

    /// The `size` parameter is not a positive integer.
    #[error("invalid page size '{0}': expected a positive integer")]
    InvalidPageSize(String),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
