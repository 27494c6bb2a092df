//! User domain
//!
//! Record types, account validation rules, and the store trait that owns
//! user records.

mod entity;
mod store;
mod validation;

pub use entity::{DisplayUser, UserRecord};
pub use store::UserStore;
pub use validation::{
    validate_new_account, ValidationReason, MAX_PASSWORD_LENGTH, MAX_USER_ID_LENGTH,
    MIN_PASSWORD_LENGTH, MIN_USER_ID_LENGTH,
};

#[cfg(test)]
pub use store::MockUserStore;
