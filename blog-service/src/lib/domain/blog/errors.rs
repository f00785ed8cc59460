use thiserror::Error;

use crate::domain::blog::models::BlogId;

/// Error for BlogId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogIdError {
    #[error("malformatted id: {0}")]
    InvalidFormat(String),
}

/// Error for BlogTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogTitleError {
    #[error("title must not be empty")]
    Empty,

    #[error("title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for BlogUrl validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogUrlError {
    #[error("url must not be empty")]
    Empty,

    #[error("url too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all blog-related operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    // Value object validation errors (automatically converted via #[from])
    #[error("invalid blog id: {0}")]
    InvalidBlogId(#[from] BlogIdError),

    #[error("invalid title: {0}")]
    InvalidTitle(#[from] BlogTitleError),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] BlogUrlError),

    // Domain-level errors
    #[error("blog not found: {0}")]
    NotFound(String),

    #[error("not authorized to delete this blog")]
    NotOwner(BlogId),

    // Infrastructure errors
    #[error("store error: {0}")]
    StoreError(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}
