//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures on client input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}
