use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::LoginData;
use crate::inbound::http::router::AppState;

// One generic message for every credential failure: callers cannot tell an
// unknown username apart from a wrong password.
const INVALID_CREDENTIALS: &str = "invalid username or password";

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<LoginData>, ApiError> {
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    let claims = auth::Claims::for_user(user.id, user.username.as_str());

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginData {
            token: result.access_token,
            username: user.username.as_str().to_string(),
            name: user.name,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}
