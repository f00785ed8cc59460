use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::blog::errors::BlogIdError;
use crate::domain::blog::errors::BlogTitleError;
use crate::domain::blog::errors::BlogUrlError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Blog unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub Uuid);

impl BlogId {
    /// Generate a new random blog ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a blog ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BlogIdError> {
        Uuid::parse_str(s)
            .map(BlogId)
            .map_err(|e| BlogIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog aggregate entity.
///
/// Lifecycle: nonexistent -> created -> updated* -> deleted. Delete is
/// terminal.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: BlogTitle,
    pub author: Option<String>,
    pub url: BlogUrl,
    pub likes: u32,
    pub user: UserId,
    pub created_at: DateTime<Utc>,
}

/// Blog title value object with validation.
///
/// Ensures title is non-empty and within 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTitle(String);

impl BlogTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated blog title.
    ///
    /// # Arguments
    /// * `title` - Raw title string
    ///
    /// # Errors
    /// * `Empty` - Title is empty
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, BlogTitleError> {
        let length = title.len();
        if length == 0 {
            Err(BlogTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(BlogTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Blog URL value object with validation.
///
/// Ensures the URL is non-empty and within 2000 characters. No scheme
/// validation; any non-empty string is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogUrl(String);

impl BlogUrl {
    const MAX_LENGTH: usize = 2000;

    /// Create a new validated blog URL.
    ///
    /// # Errors
    /// * `Empty` - URL is empty
    /// * `TooLong` - URL exceeds 2000 characters
    pub fn new(url: String) -> Result<Self, BlogUrlError> {
        let length = url.len();
        if length == 0 {
            Err(BlogUrlError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(BlogUrlError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(url))
        }
    }

    /// Get URL as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A blog together with its owner record expanded.
///
/// The owner is `None` when the referenced user no longer resolves, which
/// serializes as a null owner on the wire.
#[derive(Debug, Clone)]
pub struct PopulatedBlog {
    pub blog: Blog,
    pub owner: Option<User>,
}

/// Command to create a blog.
#[derive(Debug)]
pub struct CreateBlogCommand {
    pub title: BlogTitle,
    pub author: Option<String>,
    pub url: BlogUrl,
    pub likes: Option<u32>,
}

/// Command to update an existing blog with optional validated fields.
///
/// All fields are optional to support partial updates; only provided fields
/// replace stored values. This is the like-increment path as well.
#[derive(Debug, Default)]
pub struct UpdateBlogCommand {
    pub title: Option<BlogTitle>,
    pub author: Option<String>,
    pub url: Option<BlogUrl>,
    pub likes: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_title_rejects_empty() {
        assert!(matches!(
            BlogTitle::new(String::new()),
            Err(BlogTitleError::Empty)
        ));
    }

    #[test]
    fn test_blog_title_rejects_too_long() {
        let result = BlogTitle::new("x".repeat(201));
        assert!(matches!(result, Err(BlogTitleError::TooLong { .. })));
    }

    #[test]
    fn test_blog_url_accepts_plain_strings() {
        let url = BlogUrl::new("https://reactpatterns.com/".to_string()).unwrap();
        assert_eq!(url.as_str(), "https://reactpatterns.com/");
    }

    #[test]
    fn test_blog_id_from_string() {
        let id = BlogId::new();
        assert_eq!(BlogId::from_string(&id.to_string()).unwrap(), id);
        assert!(BlogId::from_string("5a3d5da59070081a82a3445").is_err());
    }
}
