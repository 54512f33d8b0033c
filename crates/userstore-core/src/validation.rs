//! Validation utilities.

use crate::UserStoreError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `UserStoreError` on failure.
    fn validate_request(&self) -> Result<(), UserStoreError> {
        self.validate().map_err(validation_errors_to_user_store_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `UserStoreError::Validation`.
///
/// Struct-level failures are reported under the `__all__` field by
/// `validator`; only their message is kept.
#[must_use]
pub fn validation_errors_to_user_store_error(errors: ValidationErrors) -> UserStoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                if *field == "__all__" {
                    message
                } else {
                    format!("{}: {}", field, message)
                }
            })
        })
        .collect();
    if messages.is_empty() {
        return UserStoreError::Validation(errors.to_string());
    }
    messages.sort();

    UserStoreError::Validation(messages.join("; "))
}
