//! `UserRepositoryImpl`: repository layer implementation.
//!
//! Implements the [`UserRepository`] interface by delegating to a
//! [`UserDao`].
//!
//! [`UserRepository`]: crate::traits::UserRepository
//! [`UserDao`]: crate::dao::UserDao

use crate::{dao::UserDao, traits::UserRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use userstore_core::{NewUser, User, UserId, UserStoreResult, UserUpdate};

/// Repository implementation that orchestrates [`UserDao`] access.
///
/// [`UserDao`]: crate::dao::UserDao
pub struct UserRepositoryImpl {
    user_dao: Arc<dyn UserDao>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>) -> Self {
        Self { user_dao }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: UserId) -> UserStoreResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        self.user_dao.find_by_id(id).await
    }

    async fn find_all(&self) -> UserStoreResult<Vec<User>> {
        debug!("Repository: find_all");
        self.user_dao.find_all().await
    }

    async fn insert(&self, user: &NewUser) -> UserStoreResult<UserId> {
        debug!("Repository: insert user {}", user.name);
        self.user_dao.insert(user).await
    }

    async fn update(&self, update: &UserUpdate) -> UserStoreResult<bool> {
        debug!("Repository: update user {}", update.id);
        self.user_dao.update(update).await
    }

    async fn delete(&self, id: UserId) -> UserStoreResult<bool> {
        debug!("Repository: delete user {}", id);
        self.user_dao.delete(id).await
    }

    async fn count(&self) -> UserStoreResult<u64> {
        self.user_dao.count().await
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}
