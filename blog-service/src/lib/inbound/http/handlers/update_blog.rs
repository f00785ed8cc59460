use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::errors::BlogTitleError;
use crate::domain::blog::errors::BlogUrlError;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::BlogTitle;
use crate::domain::blog::models::BlogUrl;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::BlogData;
use crate::inbound::http::router::AppState;

pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;

    state
        .blog_service
        .update_blog(blog_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref populated| ApiSuccess::new(StatusCode::OK, populated.into()))
}

/// HTTP request body for a partial blog update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBlogRequest {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<u32>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateBlogRequestError {
    #[error("invalid title: {0}")]
    Title(#[from] BlogTitleError),

    #[error("invalid url: {0}")]
    Url(#[from] BlogUrlError),
}

impl UpdateBlogRequest {
    fn try_into_command(self) -> Result<UpdateBlogCommand, ParseUpdateBlogRequestError> {
        let title = self.title.map(BlogTitle::new).transpose()?;
        let url = self.url.map(BlogUrl::new).transpose()?;

        Ok(UpdateBlogCommand {
            title,
            author: self.author,
            url,
            likes: self.likes,
        })
    }
}

impl From<ParseUpdateBlogRequestError> for ApiError {
    fn from(err: ParseUpdateBlogRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
