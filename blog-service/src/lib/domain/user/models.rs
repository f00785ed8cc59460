use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::blog::models::BlogId;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// User aggregate entity.
///
/// Created on registration. Mutated only to append owned-blog references;
/// never deleted.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub name: Option<String>,
    pub password_hash: String,
    pub blogs: Vec<BlogId>,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric,
/// underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains characters outside alphanumeric, `_`, `-`
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.len();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub name: Option<String>,
    pub password: String,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `name` - Optional display name
    /// * `password` - Plain text password (hashed by the service)
    pub fn new(username: Username, name: Option<String>, password: String) -> Self {
        Self {
            username,
            name,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_valid_names() {
        for name in ["root", "m-luukkai", "user_42"] {
            assert!(Username::new(name.to_string()).is_ok());
        }
    }

    #[test]
    fn test_username_rejects_short_names() {
        let result = Username::new("ab".to_string());
        assert!(matches!(result, Err(UsernameError::TooShort { .. })));
    }

    #[test]
    fn test_username_rejects_invalid_chars() {
        let result = Username::new("root user".to_string());
        assert!(matches!(result, Err(UsernameError::InvalidCharacters)));
    }

    #[test]
    fn test_user_id_from_string() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
