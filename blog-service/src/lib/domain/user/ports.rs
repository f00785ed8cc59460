use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, display name, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `StoreError` - Store operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `StoreError` - Store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `StoreError` - Store operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
}

/// Persistence operations for the user collection.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new user document.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `StoreError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve multiple users by identifiers.
    ///
    /// # Returns
    /// Vector of found users (missing IDs are skipped without error)
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;

    /// Replace an existing user document.
    ///
    /// # Arguments
    /// * `user` - User entity with updated fields
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `StoreError` - Store operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;
}
