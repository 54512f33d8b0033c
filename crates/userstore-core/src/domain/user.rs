//! User record types.

use crate::UserId;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// A stored user, mapped from one `user` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,
}

impl User {
    /// Creates a user record for an existing row.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for inserting a user. The id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Creates an insert payload.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attaches the id the database assigned to this payload.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Sparse update of an existing user.
///
/// A field is present when it is `Some` and non-empty; absent fields keep
/// their stored value. An update with no present field is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_assignment"))]
pub struct UserUpdate {
    /// Row to update.
    pub id: UserId,

    /// New name, if any.
    #[serde(default)]
    pub name: Option<String>,

    /// New email, if any.
    #[serde(default)]
    pub email: Option<String>,
}

impl UserUpdate {
    /// Starts an update for the given row with no fields set.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: None,
            email: None,
        }
    }

    /// Sets the new name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Present `(column, value)` pairs in column declaration order.
    #[must_use]
    pub fn assignments(&self) -> Vec<(&'static str, &str)> {
        [("name", self.name.as_deref()), ("email", self.email.as_deref())]
            .into_iter()
            .filter_map(|(column, value)| match value {
                Some(v) if !v.is_empty() => Some((column, v)),
                _ => None,
            })
            .collect()
    }

    /// Returns true if at least one field would be written.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.assignments().is_empty()
    }
}

impl From<User> for UserUpdate {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: Some(user.name),
            email: Some(user.email),
        }
    }
}

fn validate_has_assignment(update: &UserUpdate) -> Result<(), ValidationError> {
    if update.has_changes() {
        return Ok(());
    }
    let mut err = ValidationError::new("no_assignments");
    err.message = Some(Cow::Borrowed("update must set a non-empty name or email"));
    Err(err)
}
