use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::blog::errors::BlogTitleError;
use crate::domain::blog::errors::BlogUrlError;
use crate::domain::blog::models::BlogTitle;
use crate::domain::blog::models::BlogUrl;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::BlogData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_blog(
    State(state): State<AppState>,
    auth_user: Option<Extension<AuthenticatedUser>>,
    Json(body): Json<CreateBlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let Some(Extension(auth_user)) = auth_user else {
        return Err(ApiError::Unauthorized("authentication required".to_string()));
    };

    state
        .blog_service
        .create_blog(body.try_into_command()?, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref populated| ApiSuccess::new(StatusCode::CREATED, populated.into()))
}

/// HTTP request body for creating a blog (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBlogRequest {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<u32>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBlogRequestError {
    #[error("title and url are required")]
    MissingFields,

    #[error("invalid title: {0}")]
    Title(#[from] BlogTitleError),

    #[error("invalid url: {0}")]
    Url(#[from] BlogUrlError),
}

impl CreateBlogRequest {
    fn try_into_command(self) -> Result<CreateBlogCommand, ParseCreateBlogRequestError> {
        let (Some(title), Some(url)) = (self.title, self.url) else {
            return Err(ParseCreateBlogRequestError::MissingFields);
        };

        let title = BlogTitle::new(title)?;
        let url = BlogUrl::new(url)?;

        Ok(CreateBlogCommand {
            title,
            author: self.author,
            url,
            likes: self.likes,
        })
    }
}

impl From<ParseCreateBlogRequestError> for ApiError {
    fn from(err: ParseCreateBlogRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
