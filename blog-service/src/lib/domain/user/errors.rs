use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("malformatted id: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)")]
    InvalidCharacters,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("invalid user id: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    // Domain-level errors
    #[error("user not found: {0}")]
    NotFound(String),

    #[error("user not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("username must be unique")]
    UsernameAlreadyExists(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("store error: {0}")]
    StoreError(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}
