//! DAO (Data Access Object) layer.
//!
//! DAOs own SQL construction and connection lifecycle for one data
//! source. Each call acquires its own connection from a
//! [`ConnectionProvider`](crate::ConnectionProvider) and releases it before
//! returning.
//!
//! Hierarchy:
//! ```text
//! Caller → Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod r#impl;
pub mod user_dao;

pub use r#impl::SqliteUserDaoImpl;
pub use user_dao::UserDao;
