//! Password storage strategies

use std::fmt::Debug;
use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::config::PasswordStorage;
use crate::domain::DomainError;

/// Trait for turning a password into its stored form and checking it later
pub trait PasswordHasher: Send + Sync + Debug {
    /// Produce the stored form of a password
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against its stored form
    fn verify(&self, password: &str, stored: &str) -> bool;

    /// Stored form checked when the user is unknown, so that an unknown ID
    /// costs the same verification work as a wrong password
    fn dummy_hash(&self) -> &str;
}

/// Stores passwords as given and compares them directly
///
/// This is the service's default. It offers no protection if the store is
/// ever exposed; prefer [`Argon2Hasher`] outside of development.
#[derive(Debug, Clone, Default)]
pub struct PlainTextHasher;

impl PlainTextHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        password == stored
    }

    fn dummy_hash(&self) -> &str {
        ""
    }
}

static ARGON2_DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Argon2Hasher::new()
        .hash("user-registry-dummy")
        .unwrap_or_default()
});

/// Argon2-based password hasher with a random salt per password
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let parsed_hash = match PasswordHash::new(stored) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    fn dummy_hash(&self) -> &str {
        &ARGON2_DUMMY_HASH
    }
}

/// Build the hasher selected in configuration
pub fn hasher_for(storage: PasswordStorage) -> Arc<dyn PasswordHasher> {
    match storage {
        PasswordStorage::Plaintext => Arc::new(PlainTextHasher::new()),
        PasswordStorage::Argon2 => Arc::new(Argon2Hasher::new()),
    }
}
