//! # Userstore Config
//!
//! Layered configuration for the user store: TOML files, a `.env` file,
//! and `USERSTORE__*` environment variables, validated before use.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
