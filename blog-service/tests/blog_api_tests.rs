mod common;

use auth::Claims;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_blogs_are_returned_with_owner_expanded() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    app.create_blog(&token, "React patterns", "https://reactpatterns.com/")
        .await;
    app.create_blog(&token, "Go To Statement Considered Harmful", "https://example.com/goto")
        .await;

    let response = app
        .get("/api/blogs")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let blogs = body.as_array().expect("Expected an array");
    assert_eq!(blogs.len(), 2);

    for blog in blogs {
        assert!(blog["id"].is_string());
        assert_eq!(blog["user"]["username"], "root");
        assert_eq!(blog["user"]["name"], "Root User");
        assert!(blog["user"]["id"].is_string());
    }
}

#[tokio::test]
async fn test_list_is_idempotent_without_writes() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    for i in 0..3 {
        app.create_blog(&token, &format!("Blog {}", i), "https://example.com/")
            .await;
    }

    let first: serde_json::Value = app
        .get("/api/blogs")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let second: serde_json::Value = app
        .get("/api/blogs")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_create_blog_with_valid_token() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    let count_before = app.blog_count().await;

    let response = app
        .post_authenticated("/api/blogs", &token)
        .json(&json!({
            "title": "React patterns",
            "author": "Michael Chan",
            "url": "https://reactpatterns.com/",
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "React patterns");
    assert_eq!(body["author"], "Michael Chan");
    assert_eq!(body["url"], "https://reactpatterns.com/");
    assert_eq!(body["likes"], 0);
    assert_eq!(body["user"]["username"], "root");

    assert_eq!(app.blog_count().await, count_before + 1);
}

#[tokio::test]
async fn test_create_blog_without_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register_and_login("root", "Root User", "sekret").await;

    let count_before = app.blog_count().await;

    let response = app
        .post("/api/blogs")
        .json(&json!({
            "title": "this will not be added",
            "url": "https://example.com/",
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());

    assert_eq!(app.blog_count().await, count_before);
}

#[tokio::test]
async fn test_create_blog_with_garbage_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register_and_login("root", "Root User", "sekret").await;

    let response = app
        .post_authenticated("/api/blogs", "invalid.token.here")
        .json(&json!({
            "title": "this will not be added",
            "url": "https://example.com/",
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(app.blog_count().await, 0);
}

#[tokio::test]
async fn test_create_blog_with_token_for_unknown_user_is_unauthorized() {
    let app = TestApp::spawn().await;

    // Correctly signed token whose subject never registered
    let claims = Claims::for_user(uuid::Uuid::new_v4(), "ghost");
    let token = app.jwt_handler.encode(&claims).expect("Failed to encode token");

    let response = app
        .post_authenticated("/api/blogs", &token)
        .json(&json!({
            "title": "this will not be added",
            "url": "https://example.com/",
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_blog_requires_title_and_url() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    let missing_title = app
        .post_authenticated("/api/blogs", &token)
        .json(&json!({ "url": "https://example.com/" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing_title.status(), StatusCode::BAD_REQUEST);

    let missing_url = app
        .post_authenticated("/api/blogs", &token)
        .json(&json!({ "title": "No url" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing_url.status(), StatusCode::BAD_REQUEST);

    let empty_title = app
        .post_authenticated("/api/blogs", &token)
        .json(&json!({ "title": "", "url": "https://example.com/" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(empty_title.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.blog_count().await, 0);
}

#[tokio::test]
async fn test_get_single_blog() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    let created = app
        .create_blog(&token, "React patterns", "https://reactpatterns.com/")
        .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .get(&format!("/api/blogs/{}", id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], *id);
    assert_eq!(body["title"], "React patterns");
}

#[tokio::test]
async fn test_get_single_blog_failures() {
    let app = TestApp::spawn().await;

    let malformed = app
        .get("/api/blogs/5a3d5da59070081a82a3445")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    let nonexistent = app
        .get(&format!("/api/blogs/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(nonexistent.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_likes_without_auth() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    let created = app
        .create_blog(&token, "React patterns", "https://reactpatterns.com/")
        .await;
    let id = created["id"].as_str().unwrap();

    // Anyone may update; this is the like-increment path
    let response = app
        .put(&format!("/api/blogs/{}", id))
        .json(&json!({ "likes": 11 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["likes"], 11);
    // Untouched fields survive a partial update
    assert_eq!(body["title"], "React patterns");
    assert_eq!(body["user"]["username"], "root");
}

#[tokio::test]
async fn test_update_failures() {
    let app = TestApp::spawn().await;

    let malformed = app
        .put("/api/blogs/not-a-uuid")
        .json(&json!({ "likes": 1 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    let nonexistent = app
        .put(&format!("/api/blogs/{}", uuid::Uuid::new_v4()))
        .json(&json!({ "likes": 1 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(nonexistent.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_failure_ordering() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    let created = app
        .create_blog(&token, "React patterns", "https://reactpatterns.com/")
        .await;
    let id = created["id"].as_str().unwrap();

    // Malformed id wins over everything, even without a token
    let malformed = app
        .delete("/api/blogs/not-a-uuid")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    // A well-formed id that matches nothing is 404 before any auth check
    let nonexistent = app
        .delete(&format!("/api/blogs/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(nonexistent.status(), StatusCode::NOT_FOUND);

    // Existing blog without credentials is 401
    let no_token = app
        .delete(&format!("/api/blogs/{}", id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(app.blog_count().await, 1);
}

#[tokio::test]
async fn test_delete_by_non_owner_is_forbidden() {
    let app = TestApp::spawn().await;
    let owner_token = app.register_and_login("root", "Root User", "sekret").await;
    let other_token = app
        .register_and_login("mluukkai", "Matti Luukkainen", "salainen")
        .await;

    let created = app
        .create_blog(&owner_token, "React patterns", "https://reactpatterns.com/")
        .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .delete_authenticated(&format!("/api/blogs/{}", id), &other_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The blog survives the rejected delete
    assert_eq!(app.blog_count().await, 1);
}

#[tokio::test]
async fn test_delete_by_owner_removes_blog() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("root", "Root User", "sekret").await;

    let created = app
        .create_blog(&token, "React patterns", "https://reactpatterns.com/")
        .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .delete_authenticated(&format!("/api/blogs/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(app.blog_count().await, 0);

    // Delete is terminal
    let again = app
        .delete_authenticated(&format!("/api/blogs/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
