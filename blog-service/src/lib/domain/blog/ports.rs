use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::PopulatedBlog;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::user::models::UserId;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// List every blog with its owner expanded.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn list_blogs(&self) -> Result<Vec<PopulatedBlog>, BlogError>;

    /// Retrieve a single blog by identifier, owner expanded.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `StoreError` - Store operation failed
    async fn get_blog(&self, id: BlogId) -> Result<PopulatedBlog, BlogError>;

    /// Create a new blog owned by the authenticated user.
    ///
    /// Appends the new blog's id to the owner's owned-blog list.
    ///
    /// # Arguments
    /// * `command` - Validated blog fields
    /// * `owner` - Authenticated user creating the blog
    ///
    /// # Returns
    /// Created blog with owner expanded
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn create_blog(
        &self,
        command: CreateBlogCommand,
        owner: UserId,
    ) -> Result<PopulatedBlog, BlogError>;

    /// Replace the provided fields of an existing blog.
    ///
    /// No ownership check: any caller may update, which is what the
    /// like-increment path relies on.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `StoreError` - Store operation failed
    async fn update_blog(
        &self,
        id: BlogId,
        command: UpdateBlogCommand,
    ) -> Result<PopulatedBlog, BlogError>;

    /// Remove a blog. Only its owner may do so.
    ///
    /// The owner's owned-blog list is not pruned.
    ///
    /// # Arguments
    /// * `id` - Blog to delete
    /// * `actor` - Authenticated user attempting the delete
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `NotOwner` - Actor is not the blog's owner
    /// * `StoreError` - Store operation failed
    async fn delete_blog(&self, id: BlogId, actor: UserId) -> Result<(), BlogError>;
}

/// Persistence operations for the blog collection.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    /// Insert a new blog document.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// Retrieve blog by identifier.
    ///
    /// # Returns
    /// Optional blog entity (None if not found)
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError>;

    /// Retrieve all blogs.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Blog>, BlogError>;

    /// Replace an existing blog document.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `StoreError` - Store operation failed
    async fn update(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// Remove a blog permanently.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `StoreError` - Store operation failed
    async fn delete(&self, id: BlogId) -> Result<(), BlogError>;
}
