use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiErrorBody;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated user through the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Bearer-token extraction middleware.
///
/// A request with no Authorization header passes through unauthenticated and
/// each handler decides whether that is a 401. A header that is present but
/// malformed, carries an invalid signature, or names a user that no longer
/// exists is rejected here with 401.
pub async fn identify(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(auth_header) = req.headers().get(http::header::AUTHORIZATION) else {
        return Ok(next.run(req).await);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("invalid authorization header"))?;

    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(unauthorized(
            "invalid authorization header format, expected: Bearer <token>",
        ));
    };

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized("token invalid")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        unauthorized("token invalid")
    })?;

    // Resolve the subject to a live user record
    let user = state.user_service.get_user(&user_id).await.map_err(|e| {
        tracing::warn!(user_id = %user_id, error = %e, "Token user not resolvable");
        unauthorized("invalid token user")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username.as_str().to_string(),
    });

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
