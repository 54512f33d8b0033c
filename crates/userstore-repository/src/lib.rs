//! # Userstore Repository
//!
//! Layered data access for the `user` table:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn UserRepository>       (domain interface)
//! UserRepositoryImpl                 (delegates to a DAO)
//!   ↓  Arc<dyn UserDao>              (DAO interface)
//! SqliteUserDaoImpl                  (SQL + row mapping)
//!   ↓  Arc<dyn ConnectionProvider>   (one connection per call)
//! DatabasePool → SQLite
//! ```
//!
//! ```no_run
//! # async fn run() -> userstore_core::UserStoreResult<()> {
//! use std::sync::Arc;
//! use userstore_config::DatabaseConfig;
//! use userstore_core::NewUser;
//! use userstore_repository::{create_pool, SqliteUserDaoImpl, UserRepository, UserRepositoryImpl};
//!
//! let pool = create_pool(&DatabaseConfig::default()).await?;
//! pool.run_migrations().await?;
//! let repo = UserRepositoryImpl::new(Arc::new(SqliteUserDaoImpl::new(pool)));
//! let id = repo.insert(&NewUser::new("Kim", "kim@x.com")).await?;
//! assert!(repo.find_by_id(id).await?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use dao::{SqliteUserDaoImpl, UserDao};
pub use pool::*;
pub use r#impl::UserRepositoryImpl;
pub use traits::*;
