use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::BlogData;
use crate::inbound::http::router::AppState;

pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;

    state
        .blog_service
        .get_blog(blog_id)
        .await
        .map_err(ApiError::from)
        .map(|ref populated| ApiSuccess::new(StatusCode::OK, populated.into()))
}
