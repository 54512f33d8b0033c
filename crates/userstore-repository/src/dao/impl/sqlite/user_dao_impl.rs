//! SQLite implementation of [`UserDao`].

use super::statements::{self, build_update};
use crate::{dao::UserDao, ConnectionProvider};
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};
use userstore_core::{NewUser, User, UserId, UserStoreError, UserStoreResult, UserUpdate};

/// User DAO over a [`ConnectionProvider`].
///
/// Holds no connection between calls; each operation acquires one, runs a
/// single statement, and drops it before returning.
#[derive(Clone)]
pub struct SqliteUserDaoImpl {
    provider: Arc<dyn ConnectionProvider>,
}

impl SqliteUserDaoImpl {
    /// Creates a DAO drawing connections from `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId(row.id), row.name, row.email)
    }
}

#[async_trait]
impl UserDao for SqliteUserDaoImpl {
    async fn find_by_id(&self, id: UserId) -> UserStoreResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let mut conn = self.provider.acquire().await?;
        let row = sqlx::query_as::<_, UserRow>(statements::SELECT_BY_ID)
            .bind(id.into_inner())
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> UserStoreResult<Vec<User>> {
        debug!("Finding all users");

        let mut conn = self.provider.acquire().await?;
        let rows = sqlx::query_as::<_, UserRow>(statements::SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, user: &NewUser) -> UserStoreResult<UserId> {
        debug!("Inserting user: {}", user.name);

        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query(statements::INSERT)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&mut *conn)
            .await?;

        let id = UserId(result.last_insert_rowid());
        debug!("Inserted user {}", id);
        Ok(id)
    }

    async fn update(&self, update: &UserUpdate) -> UserStoreResult<bool> {
        debug!("Updating user: {}", update.id);

        let mut builder = build_update(update)?;
        let mut conn = self.provider.acquire().await?;
        let result = builder.build().execute(&mut *conn).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: UserId) -> UserStoreResult<bool> {
        debug!("Deleting user: {}", id);

        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query(statements::DELETE_BY_ID)
            .bind(id.into_inner())
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                warn!(user_id = %id, "Failed to delete user: {}", e);
                UserStoreError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> UserStoreResult<u64> {
        let mut conn = self.provider.acquire().await?;
        let count: i64 = sqlx::query_scalar(statements::COUNT)
            .fetch_one(&mut *conn)
            .await?;

        u64::try_from(count).map_err(|e| UserStoreError::internal(format!("Invalid row count: {}", e)))
    }
}

impl std::fmt::Debug for SqliteUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserDaoImpl").finish_non_exhaustive()
    }
}
