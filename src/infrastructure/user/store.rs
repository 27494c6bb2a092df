//! In-memory user store backed by a sharded concurrent map

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use super::password::{PasswordHasher, PlainTextHasher};
use crate::domain::user::{UserRecord, UserStore};
use crate::domain::DomainError;

/// In-memory implementation of [`UserStore`]
///
/// Records live in a [`DashMap`], so operations on unrelated IDs only
/// contend when they hash to the same shard.
pub struct InMemoryUserStore {
    users: DashMap<String, UserRecord>,
    hasher: Arc<dyn PasswordHasher>,
}

impl InMemoryUserStore {
    /// Create an empty store that hashes passwords with `hasher`
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            users: DashMap::new(),
            hasher,
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new(Arc::new(PlainTextHasher::new()))
    }
}

impl fmt::Debug for InMemoryUserStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryUserStore")
            .field("users", &self.users.len())
            .field("hasher", &self.hasher)
            .finish()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: &str) -> Result<UserRecord, DomainError> {
        self.users
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::not_found(id))
    }

    async fn create_if_absent(&self, id: &str, password: &str) -> Result<UserRecord, DomainError> {
        // Hash outside the shard lock
        let stored = self.hasher.hash(password)?;

        match self.users.entry(id.to_string()) {
            Entry::Occupied(_) => Err(DomainError::already_exists(id)),
            Entry::Vacant(slot) => {
                let record = UserRecord::new(id, stored);
                slot.insert(record.clone());
                debug!(user_id = %id, "Stored new user record");
                Ok(record)
            }
        }
    }

    async fn verify_credentials(&self, id: &str, password: &str) -> Result<(), DomainError> {
        let stored = self
            .users
            .get(id)
            .map(|entry| entry.value().password().to_string());

        let verified = match stored {
            Some(stored) => self.hasher.verify(password, &stored),
            None => {
                // Same work as a wrong password
                self.hasher.verify(password, self.hasher.dummy_hash());
                false
            }
        };

        if verified {
            Ok(())
        } else {
            Err(DomainError::not_found(id))
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.users.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.len())
    }
}
