//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use userstore_config::DatabaseConfig;
use userstore_core::telemetry::{init_tracing, LoggingConfig};
use userstore_repository::{DatabasePool, SqliteUserDaoImpl, UserRepositoryImpl};

/// Test database wrapper.
///
/// Owns a temporary directory holding a fresh SQLite file; the file is
/// removed when the wrapper is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a migrated test database.
    pub async fn new() -> Self {
        Self::with_max_connections(5).await
    }

    /// Creates a migrated test database whose pool holds at most
    /// `max_connections` connections.
    pub async fn with_max_connections(max_connections: u32) -> Self {
        let db = Self::unmigrated(max_connections).await;
        db.pool
            .run_migrations()
            .await
            .expect("Failed to run migrations");
        db
    }

    /// Creates a test database without the `user` table.
    pub async fn unmigrated(max_connections: u32) -> Self {
        init_tracing(&LoggingConfig::default()).expect("Failed to init tracing");

        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("userstore_test.db").display()),
            min_connections: 0,
            max_connections,
            connect_timeout_secs: 2,
            idle_timeout_secs: 600,
            log_queries: true,
        };

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to open test database");

        Self {
            _dir: dir,
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns a DAO backed by this database.
    pub fn dao(&self) -> SqliteUserDaoImpl {
        SqliteUserDaoImpl::new(self.pool())
    }

    /// Returns a repository backed by this database.
    pub fn repository(&self) -> UserRepositoryImpl {
        UserRepositoryImpl::new(Arc::new(self.dao()))
    }
}
