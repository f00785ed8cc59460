use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Wire representation of a blog as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
    pub user: Option<Owner>,
}

/// Expanded owner fields on a blog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

/// Fields for creating a blog.
#[derive(Debug, Clone, Serialize)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

/// Created user payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<String>,
}

/// Error type for REST calls.
///
/// Failed calls surface immediately; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

/// REST client for the blog service.
///
/// Holds the bearer token of the active session, when there is one, and
/// attaches it to every request.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for a service base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Attach or detach the bearer token used on subsequent calls.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ApiClientError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    /// Register a new account.
    pub async fn register(
        &self,
        username: &str,
        name: Option<&str>,
        password: &str,
    ) -> Result<RegisteredUser, ApiClientError> {
        let response = self
            .request(reqwest::Method::POST, "/api/users")
            .json(&serde_json::json!({
                "username": username,
                "name": name,
                "password": password,
            }))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Exchange credentials for a session.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiClientError> {
        let response = self
            .request(reqwest::Method::POST, "/api/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch every blog.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiClientError> {
        let response = self.request(reqwest::Method::GET, "/api/blogs").send().await?;
        Self::decode(response).await
    }

    /// Create a blog. Requires a token.
    pub async fn create_blog(&self, new_blog: &NewBlog) -> Result<Blog, ApiClientError> {
        let response = self
            .request(reqwest::Method::POST, "/api/blogs")
            .json(new_blog)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Replace a blog's like counter.
    pub async fn set_likes(&self, id: &str, likes: u32) -> Result<Blog, ApiClientError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/api/blogs/{}", id))
            .json(&serde_json::json!({ "likes": likes }))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Delete a blog. Requires the owner's token.
    pub async fn delete_blog(&self, id: &str) -> Result<(), ApiClientError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/api/blogs/{}", id))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ApiClientError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

/// Pull the `{"error": ...}` message out of a failure body, falling back to
/// the bare status when the body is not the expected shape.
fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("HTTP {}", status))
}
