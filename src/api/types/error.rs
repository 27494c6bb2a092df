//! HTTP error type for the user endpoints

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::response::ApiResponse;
use crate::domain::DomainError;

pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed";
pub const NOT_FOUND_MESSAGE: &str = "No user found";
pub const DUPLICATE_CAUSE: &str = "Already same user_id is used";

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiResponse::message(message),
        }
    }

    /// Add a cause
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.response = self.response.with_cause(cause);
        self
    }

    /// Replace the message, keeping status and cause
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.response.message = message.into();
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Authentication error, always with the same body
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, AUTH_FAILED_MESSAGE)
    }

    /// Permission error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Not found error
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.response)).into_response();

        if self.status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"user-registry\""),
            );
        }

        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { reason } => {
                Self::bad_request("Invalid request").with_cause(reason.to_string())
            }
            DomainError::AlreadyExists { .. } => {
                Self::bad_request("Account creation failed").with_cause(DUPLICATE_CAUSE)
            }
            DomainError::NotFound { .. } => Self::not_found(),
            DomainError::AuthFailed => Self::unauthorized(),
            DomainError::Internal { message } => {
                tracing::error!(error = %message, "Internal error while handling request");
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.message)
    }
}

impl std::error::Error for ApiError {}
