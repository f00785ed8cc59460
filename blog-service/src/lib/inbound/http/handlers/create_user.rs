use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::user::errors::UsernameError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::UserData;
use crate::inbound::http::router::AppState;

const MIN_PASSWORD_LENGTH: usize = 3;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: Option<String>,
    name: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateUserRequestError {
    #[error("username and password are required")]
    MissingFields,

    #[error("invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseCreateUserRequestError> {
        let (Some(username), Some(password)) = (self.username, self.password) else {
            return Err(ParseCreateUserRequestError::MissingFields);
        };

        let username = Username::new(username)?;
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(ParseCreateUserRequestError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(CreateUserCommand::new(username, self.name, password))
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
