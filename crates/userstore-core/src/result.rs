//! Result type aliases for the user store.

use crate::UserStoreError;

/// A specialized `Result` type for user store operations.
pub type UserStoreResult<T> = Result<T, UserStoreError>;
