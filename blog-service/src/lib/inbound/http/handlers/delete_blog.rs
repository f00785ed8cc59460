use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Failure ordering is part of the contract: malformed id (400), then
/// missing blog (404), then missing credentials (401), then ownership (403).
pub async fn delete_blog(
    State(state): State<AppState>,
    auth_user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;

    state.blog_service.get_blog(blog_id).await?;

    let Some(Extension(auth_user)) = auth_user else {
        return Err(ApiError::Unauthorized("authentication required".to_string()));
    };

    state
        .blog_service
        .delete_blog(blog_id, auth_user.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
