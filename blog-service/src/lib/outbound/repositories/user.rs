use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// In-process user collection keyed by identifier.
///
/// Each operation takes the collection lock once, so writes are atomic per
/// operation and concurrent writers get last-write-wins, matching the store
/// semantics the service is written against. Username uniqueness is enforced
/// at insert and update.
pub struct MemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    /// Create an empty user collection.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.username == username).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| users.get(&id.0).cloned())
            .collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }
}
