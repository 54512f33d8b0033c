//! Domain records persisted by the user store.

pub mod user;

pub use user::{NewUser, User, UserUpdate};
