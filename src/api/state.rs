//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::user::{InMemoryUserStore, UserService};

/// User service type served by the HTTP layer
pub type AppUserService = UserService<InMemoryUserStore>;

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
}

impl AppState {
    pub fn new(user_service: Arc<AppUserService>) -> Self {
        Self { user_service }
    }
}
