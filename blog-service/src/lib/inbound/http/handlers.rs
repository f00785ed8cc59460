use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::blog::errors::BlogError;
use crate::domain::user::errors::UserError;

pub mod authenticate;
pub mod create_blog;
pub mod create_user;
pub mod delete_blog;
pub mod get_blog;
pub mod list_blogs;
pub mod update_blog;

/// Successful response: a status code and the bare JSON body the REST
/// contract specifies (no envelope).
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error taxonomy surfaced to callers.
///
/// Maps ValidationError -> 400, AuthError -> 401, ForbiddenError -> 403,
/// NotFoundError -> 404; everything infrastructural is a 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BlogError::NotOwner(_) => ApiError::Forbidden(err.to_string()),
            BlogError::InvalidBlogId(_)
            | BlogError::InvalidTitle(_)
            | BlogError::InvalidUrl(_) => ApiError::BadRequest(err.to_string()),
            BlogError::StoreError(_) | BlogError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            // Duplicate usernames are a registration validation failure (400).
            UserError::UsernameAlreadyExists(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::StoreError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}
