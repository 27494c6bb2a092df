//! User store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::UserRecord;
use crate::domain::DomainError;

/// Concurrent storage of user records keyed by user ID
///
/// Implementations must be safe to share between any number of concurrent
/// callers and must hand out clones, never references into their storage.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a user by ID
    ///
    /// Returns [`DomainError::NotFound`] when no record exists.
    async fn get(&self, id: &str) -> Result<UserRecord, DomainError>;

    /// Insert a new record unless the ID is already taken
    ///
    /// The check and the insert are a single atomic step: of any number of
    /// racing calls for one ID exactly one succeeds and every other call
    /// returns [`DomainError::AlreadyExists`].
    async fn create_if_absent(&self, id: &str, password: &str) -> Result<UserRecord, DomainError>;

    /// Check a password against the stored record
    ///
    /// An unknown ID and a wrong password both yield the same
    /// [`DomainError::NotFound`] value.
    async fn verify_credentials(&self, id: &str, password: &str) -> Result<(), DomainError>;

    /// Remove a record, returning whether one existed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, DomainError>;
}
