use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims embedded in a session token.
///
/// Carries the user identifier and username. There is deliberately no `exp`
/// claim: sessions persist until the client discards the token at logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Username the token was issued for
    pub username: String,
}

impl Claims {
    /// Create claims for a freshly authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier (becomes `sub`)
    /// * `username` - Username to embed alongside the identifier
    ///
    /// # Returns
    /// Claims with sub, iat, and username set
    pub fn for_user(user_id: impl ToString, username: impl Into<String>) -> Self {
        Self {
            sub: user_id.to_string(),
            iat: Utc::now().timestamp(),
            username: username.into(),
        }
    }
}
