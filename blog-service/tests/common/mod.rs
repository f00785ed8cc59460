use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use blog_service::domain::blog::service::BlogService;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::outbound::repositories::MemoryBlogRepository;
use blog_service::outbound::repositories::MemoryUserRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
///
/// Every spawn gets its own empty in-process store, so tests are isolated
/// without any external database.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(MemoryUserRepository::new());
        let blog_repository = Arc::new(MemoryBlogRepository::new());

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let blog_service = Arc::new(BlogService::new(blog_repository, user_repository));
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));

        let router = create_router(blog_service, user_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register a user and return the created user body
    pub async fn register(
        &self,
        username: &str,
        name: &str,
        password: &str,
    ) -> serde_json::Value {
        let response = self
            .post("/api/users")
            .json(&serde_json::json!({
                "username": username,
                "name": name,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse register response")
    }

    /// Register a user and log them in, returning the bearer token
    pub async fn register_and_login(&self, username: &str, name: &str, password: &str) -> String {
        self.register(username, name, password).await;

        let response = self
            .post("/api/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse login response");
        body["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }

    /// Create a blog with the given token and return its response body
    pub async fn create_blog(&self, token: &str, title: &str, url: &str) -> serde_json::Value {
        let response = self
            .post_authenticated("/api/blogs", token)
            .json(&serde_json::json!({
                "title": title,
                "author": "Test Author",
                "url": url,
            }))
            .send()
            .await
            .expect("Failed to execute create blog request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse blog response")
    }

    /// Count of blogs currently in the store
    pub async fn blog_count(&self) -> usize {
        let response = self
            .get("/api/blogs")
            .send()
            .await
            .expect("Failed to execute list request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse list response");
        body.as_array().expect("List response is not an array").len()
    }
}
