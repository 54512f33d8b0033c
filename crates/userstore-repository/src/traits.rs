//! Repository trait definitions.

use async_trait::async_trait;
use userstore_core::{NewUser, User, UserId, UserStoreResult, UserUpdate};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> UserStoreResult<Option<User>>;

    /// Finds all users.
    async fn find_all(&self) -> UserStoreResult<Vec<User>>;

    /// Inserts a new user and returns its id.
    async fn insert(&self, user: &NewUser) -> UserStoreResult<UserId>;

    /// Applies a sparse update to an existing user.
    async fn update(&self, update: &UserUpdate) -> UserStoreResult<bool>;

    /// Deletes a user by ID.
    async fn delete(&self, id: UserId) -> UserStoreResult<bool>;

    /// Counts all users.
    async fn count(&self) -> UserStoreResult<u64>;
}
