//! Connection provider and database pool management.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{ConnectOptions, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};
use userstore_config::DatabaseConfig;
use userstore_core::{UserStoreError, UserStoreResult};

/// A connection handed out by a [`ConnectionProvider`].
///
/// The handle is owned by whoever acquired it and goes back to the pool
/// when dropped, on every exit path.
pub type Connection = PoolConnection<Sqlite>;

/// Supplies an open connection on demand.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Acquires a connection.
    ///
    /// Fails with [`UserStoreError::Connection`] when the database is
    /// unreachable, the pool is closed, or acquisition times out.
    async fn acquire(&self) -> UserStoreResult<Connection>;
}

/// Database pool wrapper.
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// One connection is opened eagerly so a bad URL or unreadable file
    /// fails here rather than on first use.
    pub async fn new(config: &DatabaseConfig) -> UserStoreResult<Self> {
        info!("Connecting to SQLite database...");

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| UserStoreError::Connection(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                UserStoreError::Connection(format!("Failed to connect: {}", e))
            })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Creates a `DatabasePool` around a pre-existing pool.
    #[must_use]
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> UserStoreResult<()> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(|e| UserStoreError::Connection(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Runs database migrations.
    pub async fn run_migrations(&self) -> UserStoreResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| UserStoreError::Query(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Closes the database pool. Later acquisitions fail.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    /// Returns true once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

#[async_trait]
impl ConnectionProvider for DatabasePool {
    async fn acquire(&self) -> UserStoreResult<Connection> {
        debug!(
            size = self.pool.size(),
            idle = self.pool.num_idle(),
            "Acquiring connection"
        );
        self.pool.acquire().await.map_err(|e| {
            warn!("Failed to acquire connection: {}", e);
            UserStoreError::Connection(e.to_string())
        })
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> UserStoreResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}
