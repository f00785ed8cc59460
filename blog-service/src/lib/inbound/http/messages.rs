use serde::Serialize;

use crate::domain::blog::models::PopulatedBlog;
use crate::domain::user::models::User;

/// Wire representation of a blog with its owner expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogData {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
    pub user: Option<OwnerData>,
}

/// Owner fields exposed on a blog: identifier, username, and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerData {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

impl From<&PopulatedBlog> for BlogData {
    fn from(populated: &PopulatedBlog) -> Self {
        Self {
            id: populated.blog.id.to_string(),
            title: populated.blog.title.as_str().to_string(),
            author: populated.blog.author.clone(),
            url: populated.blog.url.as_str().to_string(),
            likes: populated.blog.likes,
            user: populated.owner.as_ref().map(OwnerData::from),
        }
    }
}

impl From<&User> for OwnerData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            name: user.name.clone(),
        }
    }
}

/// Wire representation of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<String>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            name: user.name.clone(),
            blogs: user.blogs.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Wire representation of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginData {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}
