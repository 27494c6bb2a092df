//! Response envelope shared by the user endpoints

use serde::{Deserialize, Serialize};

use crate::domain::DisplayUser;

/// Body of every user endpoint response
///
/// `user` is present on success, `cause` on rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<DisplayUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl ApiResponse {
    /// A response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user: None,
            cause: None,
        }
    }

    /// A response carrying a user
    pub fn with_user(message: impl Into<String>, user: DisplayUser) -> Self {
        Self {
            user: Some(user),
            ..Self::message(message)
        }
    }

    /// Attach a cause
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}
