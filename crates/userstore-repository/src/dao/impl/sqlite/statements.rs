//! SQL text for the `user` table.

use sqlx::{QueryBuilder, Sqlite};
use userstore_core::{UserStoreResult, UserUpdate, ValidateExt};

pub(crate) const SELECT_BY_ID: &str = "select * from user where id = ?";
pub(crate) const SELECT_ALL: &str = "select * from user";
pub(crate) const INSERT: &str = "insert into user (name, email) values (?, ?)";
pub(crate) const DELETE_BY_ID: &str = "delete from user where id = ?";
pub(crate) const COUNT: &str = "select count(*) from user";

/// Builds `update user set <col> = ?, ... where id = ?` from the present
/// fields of `update`, binding them in declaration order and the id last.
///
/// Fails with a validation error when no field is present, so a statement
/// with an empty `set` list is never produced.
pub fn build_update(update: &UserUpdate) -> UserStoreResult<QueryBuilder<'static, Sqlite>> {
    update.validate_request()?;

    let mut builder = QueryBuilder::new("update user set ");
    {
        let mut assignments = builder.separated(", ");
        for (column, value) in update.assignments() {
            assignments.push(format!("{} = ", column));
            assignments.push_bind_unseparated(value.to_owned());
        }
    }
    builder.push(" where id = ");
    builder.push_bind(update.id.into_inner());

    Ok(builder)
}
