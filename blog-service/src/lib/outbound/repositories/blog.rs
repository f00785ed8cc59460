use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogRepository;

/// In-process blog collection keyed by identifier.
///
/// Per-operation atomicity under a single collection lock; last-write-wins
/// for concurrent writers. `list_all` returns a stable order (creation time,
/// then id) so repeated reads without writes are identical.
pub struct MemoryBlogRepository {
    blogs: RwLock<HashMap<Uuid, Blog>>,
}

impl MemoryBlogRepository {
    /// Create an empty blog collection.
    pub fn new() -> Self {
        Self {
            blogs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        let mut blogs = self.blogs.write().await;
        blogs.insert(blog.id.0, blog.clone());
        Ok(blog)
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogError> {
        let blogs = self.blogs.read().await;
        let mut all: Vec<Blog> = blogs.values().cloned().collect();
        all.sort_by_key(|b| (b.created_at, b.id.0));
        Ok(all)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, BlogError> {
        let mut blogs = self.blogs.write().await;

        if !blogs.contains_key(&blog.id.0) {
            return Err(BlogError::NotFound(blog.id.to_string()));
        }

        blogs.insert(blog.id.0, blog.clone());
        Ok(blog)
    }

    async fn delete(&self, id: BlogId) -> Result<(), BlogError> {
        let mut blogs = self.blogs.write().await;

        blogs
            .remove(&id.0)
            .map(|_| ())
            .ok_or(BlogError::NotFound(id.to_string()))
    }
}
