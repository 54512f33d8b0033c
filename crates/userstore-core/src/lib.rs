//! # Userstore Core
//!
//! Core types and error definitions shared by the configuration and
//! repository crates: the [`User`] record family, the typed [`UserId`],
//! and the [`UserStoreError`] taxonomy.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;
