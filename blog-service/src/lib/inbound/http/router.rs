use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_blog::create_blog;
use super::handlers::create_user::create_user;
use super::handlers::delete_blog::delete_blog;
use super::handlers::get_blog::get_blog;
use super::handlers::list_blogs::list_blogs;
use super::handlers::update_blog::update_blog;
use super::middleware::identify;
use crate::domain::blog::service::BlogService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::MemoryBlogRepository;
use crate::outbound::repositories::MemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService<MemoryBlogRepository, MemoryUserRepository>>,
    pub user_service: Arc<UserService<MemoryUserRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    blog_service: Arc<BlogService<MemoryBlogRepository, MemoryUserRepository>>,
    user_service: Arc<UserService<MemoryUserRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        blog_service,
        user_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/login", post(authenticate))
        .route("/api/users", post(create_user))
        .route("/api/blogs", get(list_blogs))
        .route("/api/blogs/:blog_id", get(get_blog))
        .route("/api/blogs/:blog_id", put(update_blog));

    let token_routes = Router::new()
        .route("/api/blogs", post(create_blog))
        .route("/api/blogs/:blog_id", delete(delete_blog))
        .route_layer(middleware::from_fn_with_state(state.clone(), identify));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(token_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
