//! User Registry
//!
//! Account registration, lookup, and Basic authentication over HTTP,
//! backed by a concurrent in-memory user store.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{hasher_for, InMemoryUserStore, UserService};

/// Build the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let hasher = hasher_for(config.auth.password_storage);
    let store = Arc::new(InMemoryUserStore::new(hasher));
    let user_service = Arc::new(UserService::new(store));

    AppState::new(user_service)
}
