//! Account creation rules

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_USER_ID_LENGTH: usize = 6;
pub const MAX_USER_ID_LENGTH: usize = 20;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 20;

/// Letters and digits only, for both user IDs and passwords
static ALPHANUMERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alphanumeric pattern is valid"));

/// Why an account request was rejected
///
/// The display strings double as the `cause` reported to HTTP clients.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("Required user_id and password")]
    RequiredFieldsMissing,

    #[error("Input length is incorrect")]
    LengthOutOfRange,

    #[error("Incorrect character pattern")]
    InvalidCharacters,

    #[error("Required user_id")]
    RequiredUserId,
}

/// Validate a new account's credentials
///
/// Rules are checked in order and the first failure wins:
/// 1. Both fields present
/// 2. User ID 6-20 bytes, password 8-20 bytes
/// 3. Both fields letters and digits only
pub fn validate_new_account(id: &str, password: &str) -> Result<(), ValidationReason> {
    if id.is_empty() || password.is_empty() {
        return Err(ValidationReason::RequiredFieldsMissing);
    }

    let id_len = id.len();
    let password_len = password.len();

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&password_len)
        || !(MIN_USER_ID_LENGTH..=MAX_USER_ID_LENGTH).contains(&id_len)
    {
        return Err(ValidationReason::LengthOutOfRange);
    }

    if !is_alphanumeric(id) || !is_alphanumeric(password) {
        return Err(ValidationReason::InvalidCharacters);
    }

    Ok(())
}

fn is_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC_PATTERN.is_match(input)
}
