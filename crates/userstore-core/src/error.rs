//! Unified error type for the user store.

use thiserror::Error;

/// Errors raised by connection providers, DAOs and repositories.
///
/// `Connection` and `Query` are the two failure classes of a data access
/// call; the remaining variants refine or precede them.
#[derive(Error, Debug)]
pub enum UserStoreError {
    /// A usable connection could not be obtained.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement preparation or execution failed.
    #[error("Query error: {0}")]
    Query(String),

    /// A constraint rejected the statement (e.g. duplicate key).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Input rejected before any statement was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserStoreError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::Query(_) => "QUERY_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection<T: Into<String>>(message: T) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query<T: Into<String>>(message: T) -> Self {
        Self::Query(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// True for failures raised while executing a statement, including
    /// constraint violations.
    #[must_use]
    pub const fn is_query_error(&self) -> bool {
        matches!(self, Self::Query(_) | Self::Conflict(_))
    }

    /// Checks if this error is retriable.
    ///
    /// Only connection failures qualify; a failed statement is never
    /// retried.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for UserStoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => Self::Connection(err.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(db_err.message().to_string())
            }
            _ => Self::Query(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(UserStoreError::connection("refused").error_code(), "CONNECTION_ERROR");
        assert_eq!(UserStoreError::query("syntax").error_code(), "QUERY_ERROR");
        assert_eq!(UserStoreError::Conflict("dup".to_string()).error_code(), "CONFLICT");
        assert_eq!(UserStoreError::validation("empty").error_code(), "VALIDATION_ERROR");
        assert_eq!(
            UserStoreError::Configuration("bad".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(UserStoreError::internal("oops").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_query_error_classification() {
        assert!(UserStoreError::query("bad").is_query_error());
        assert!(UserStoreError::Conflict("dup".to_string()).is_query_error());
        assert!(!UserStoreError::connection("down").is_query_error());
        assert!(!UserStoreError::validation("empty").is_query_error());
    }

    #[test]
    fn test_retriable_errors() {
        assert!(UserStoreError::connection("connection lost").is_retriable());
        assert!(!UserStoreError::query("bad sql").is_retriable());
        assert!(!UserStoreError::Conflict("dup".to_string()).is_retriable());
    }

    #[test]
    fn test_error_display() {
        let err = UserStoreError::connection("pool closed");
        assert_eq!(err.to_string(), "Connection error: pool closed");

        let err = UserStoreError::validation("nothing to update");
        assert!(err.to_string().contains("nothing to update"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_from_sqlx_pool_errors_are_connection_errors() {
        let err: UserStoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, UserStoreError::Connection(_)));

        let err: UserStoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, UserStoreError::Connection(_)));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_from_sqlx_row_errors_are_query_errors() {
        let err: UserStoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, UserStoreError::Query(_)));

        let err: UserStoreError = sqlx::Error::ColumnNotFound("email".to_string()).into();
        assert!(matches!(err, UserStoreError::Query(_)));
    }
}
