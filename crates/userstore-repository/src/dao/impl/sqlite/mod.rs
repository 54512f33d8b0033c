//! SQLite-backed DAOs.

mod statements;
mod user_dao_impl;

pub use user_dao_impl::SqliteUserDaoImpl;
