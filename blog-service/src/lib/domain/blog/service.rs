use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::PopulatedBlog;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for blog operations.
///
/// Holds the blog collection and the user collection: creating a blog
/// appends a reference to the owner's record, and reads expand the owner.
pub struct BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    blogs: Arc<BR>,
    users: Arc<UR>,
}

impl<BR, UR> BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    /// Create a new blog service with injected repositories.
    pub fn new(blogs: Arc<BR>, users: Arc<UR>) -> Self {
        Self { blogs, users }
    }

    async fn populate(&self, blog: Blog) -> Result<PopulatedBlog, BlogError> {
        let owner = self
            .users
            .find_by_id(&blog.user)
            .await
            .map_err(store_error)?;
        Ok(PopulatedBlog { blog, owner })
    }
}

fn store_error(err: UserError) -> BlogError {
    BlogError::StoreError(err.to_string())
}

#[async_trait]
impl<BR, UR> BlogServicePort for BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    async fn list_blogs(&self) -> Result<Vec<PopulatedBlog>, BlogError> {
        let blogs = self.blogs.list_all().await?;

        let owner_ids: Vec<UserId> = blogs.iter().map(|b| b.user).collect();
        let owners: HashMap<UserId, User> = self
            .users
            .find_by_ids(&owner_ids)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(blogs
            .into_iter()
            .map(|blog| {
                let owner = owners.get(&blog.user).cloned();
                PopulatedBlog { blog, owner }
            })
            .collect())
    }

    async fn get_blog(&self, id: BlogId) -> Result<PopulatedBlog, BlogError> {
        let blog = self
            .blogs
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id.to_string()))?;

        self.populate(blog).await
    }

    async fn create_blog(
        &self,
        command: CreateBlogCommand,
        owner: UserId,
    ) -> Result<PopulatedBlog, BlogError> {
        let blog = Blog {
            id: BlogId::new(),
            title: command.title,
            author: command.author,
            url: command.url,
            likes: command.likes.unwrap_or(0),
            user: owner,
            created_at: Utc::now(),
        };

        let created = self.blogs.create(blog).await?;

        // Keep the owner's owned-blog list in step with the collection. A
        // missing owner record at this point is tolerated, not fatal.
        match self.users.find_by_id(&owner).await.map_err(store_error)? {
            Some(mut user) => {
                user.blogs.push(created.id);
                if let Err(e) = self.users.update(user).await {
                    tracing::warn!(
                        blog_id = %created.id,
                        user_id = %owner,
                        error = %e,
                        "Failed to append blog reference to owner"
                    );
                }
            }
            None => {
                tracing::warn!(
                    blog_id = %created.id,
                    user_id = %owner,
                    "Blog owner vanished before reference append"
                );
            }
        }

        self.populate(created).await
    }

    async fn update_blog(
        &self,
        id: BlogId,
        command: UpdateBlogCommand,
    ) -> Result<PopulatedBlog, BlogError> {
        let mut blog = self
            .blogs
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id.to_string()))?;

        if let Some(title) = command.title {
            blog.title = title;
        }
        if let Some(author) = command.author {
            blog.author = Some(author);
        }
        if let Some(url) = command.url {
            blog.url = url;
        }
        if let Some(likes) = command.likes {
            blog.likes = likes;
        }

        let updated = self.blogs.update(blog).await?;
        self.populate(updated).await
    }

    async fn delete_blog(&self, id: BlogId, actor: UserId) -> Result<(), BlogError> {
        let blog = self
            .blogs
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id.to_string()))?;

        if blog.user != actor {
            return Err(BlogError::NotOwner(id));
        }

        // The owner's reference list is intentionally left stale here.
        self.blogs.delete(id).await
    }
}
