//! UserDao trait: low-level user data access abstraction.
//!
//! [`UserRepository`] delegates to a `UserDao` to fulfil its operations.
//!
//! [`UserRepository`]: crate::traits::UserRepository

use async_trait::async_trait;
use userstore_core::{NewUser, User, UserId, UserStoreResult, UserUpdate};

/// Low-level user data access object.
///
/// Every method is one independent request/response cycle: one connection,
/// one statement.
#[async_trait]
pub trait UserDao: Send + Sync {
    /// Finds a user by ID. `None` when no row matches.
    async fn find_by_id(&self, id: UserId) -> UserStoreResult<Option<User>>;

    /// Returns every user in table scan order.
    async fn find_all(&self) -> UserStoreResult<Vec<User>>;

    /// Inserts a user and returns the database-assigned id.
    async fn insert(&self, user: &NewUser) -> UserStoreResult<UserId>;

    /// Writes the present fields of `update`. Returns `true` if a row
    /// changed.
    ///
    /// Rejected with a validation error, before any connection is
    /// acquired, when no field is present.
    async fn update(&self, update: &UserUpdate) -> UserStoreResult<bool>;

    /// Deletes a user by ID. Returns `true` if a row was deleted.
    async fn delete(&self, id: UserId) -> UserStoreResult<bool>;

    /// Counts all users.
    async fn count(&self) -> UserStoreResult<u64>;
}
