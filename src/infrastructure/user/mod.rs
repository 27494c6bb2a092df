//! User infrastructure module
//!
//! In-memory user store, password storage strategies, and the user service
//! that validates and orchestrates account operations.

mod password;
mod service;
mod store;

pub use password::{hasher_for, Argon2Hasher, PasswordHasher, PlainTextHasher};
pub use service::{CreateUserRequest, UserService};
pub use store::InMemoryUserStore;
