use thiserror::Error;

use crate::api::ApiClient;
use crate::api::ApiClientError;
use crate::api::Blog;
use crate::api::NewBlog;
use crate::api::RegisteredUser;
use crate::session::Session;
use crate::session::SessionStore;
use crate::session::SessionStoreError;

/// Error type for application operations.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error("not signed in")]
    NotSignedIn,

    #[error("no blog with id {0}")]
    UnknownBlog(String),
}

/// Top-level application state.
///
/// Owns the session explicitly instead of reaching for ambient storage: the
/// persisted blob is read once at construction and every later change flows
/// through this struct. Mutations update the in-memory blog list on success
/// rather than refetching.
pub struct App {
    api: ApiClient,
    store: SessionStore,
    session: Option<Session>,
    pub blogs: Vec<Blog>,
}

impl App {
    /// Build the application, rehydrating any persisted session.
    ///
    /// # Errors
    /// * `SessionStoreError` - Persisted blob exists but is unreadable
    pub fn new(mut api: ApiClient, store: SessionStore) -> Result<Self, SessionStoreError> {
        let session = store.load()?;
        if let Some(session) = &session {
            api.set_token(Some(session.token.clone()));
        }

        Ok(Self {
            api,
            store,
            session,
            blogs: Vec::new(),
        })
    }

    /// Current session, if signed in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Create a new account. Does not sign in.
    pub async fn register(
        &self,
        username: &str,
        name: Option<&str>,
        password: &str,
    ) -> Result<RegisteredUser, AppError> {
        Ok(self.api.register(username, name, password).await?)
    }

    /// Sign in, persist the session, and attach its token.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AppError> {
        let response = self.api.login(username, password).await?;

        let session = Session {
            token: response.token,
            username: response.username,
            name: response.name,
        };
        self.store.save(&session)?;
        self.api.set_token(Some(session.token.clone()));
        self.session = Some(session);

        Ok(())
    }

    /// Discard the persisted session and detach the token.
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.store.clear()?;
        self.api.set_token(None);
        self.session = None;
        Ok(())
    }

    /// Replace the in-memory list with the server's.
    pub async fn refresh(&mut self) -> Result<&[Blog], AppError> {
        self.blogs = self.api.list_blogs().await?;
        Ok(&self.blogs)
    }

    /// Create a blog and append it to the in-memory list.
    pub async fn create_blog(
        &mut self,
        title: &str,
        author: Option<&str>,
        url: &str,
    ) -> Result<Blog, AppError> {
        if self.session.is_none() {
            return Err(AppError::NotSignedIn);
        }

        let created = self
            .api
            .create_blog(&NewBlog {
                title: title.to_string(),
                author: author.map(str::to_string),
                url: url.to_string(),
            })
            .await?;

        self.blogs.push(created.clone());
        Ok(created)
    }

    /// Bump a blog's like counter by one and update the in-memory copy.
    pub async fn like_blog(&mut self, id: &str) -> Result<Blog, AppError> {
        if self.blogs.is_empty() {
            self.refresh().await?;
        }

        let current = self
            .blogs
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::UnknownBlog(id.to_string()))?;

        let updated = self.api.set_likes(id, current.likes + 1).await?;

        if let Some(stored) = self.blogs.iter_mut().find(|b| b.id == id) {
            *stored = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a blog and drop it from the in-memory list.
    pub async fn delete_blog(&mut self, id: &str) -> Result<(), AppError> {
        if self.session.is_none() {
            return Err(AppError::NotSignedIn);
        }

        self.api.delete_blog(id).await?;
        self.blogs.retain(|b| b.id != id);
        Ok(())
    }
}
