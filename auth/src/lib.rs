//! Authentication utilities for the blog-list backend
//!
//! Provides the credential infrastructure the HTTP service builds on:
//! - Password hashing (Argon2id)
//! - Signed session tokens (HS256 JWT, no embedded expiry)
//! - An `Authenticator` coordinating both
//!
//! Session tokens carry the user identifier and username only. They have no
//! expiration claim: a session stays valid until the client discards it at
//! logout.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("sekret").unwrap();
//! assert!(hasher.verify("sekret", &hash).unwrap());
//! ```
//!
//! ## Session tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", "root");
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.username, "root");
//! ```
//!
//! ## Complete login flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("sekret").unwrap();
//!
//! // Login: verify and issue a token
//! let claims = Claims::for_user("user123", "root");
//! let result = auth.authenticate("sekret", &hash, &claims).unwrap();
//!
//! // Protected call: validate the bearer token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
