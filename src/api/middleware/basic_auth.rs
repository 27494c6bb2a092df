//! HTTP Basic authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_auth_attempt, UserEventOutcome};

/// Extractor that requires valid Basic credentials
///
/// Holds the authenticated user ID. Every failure, including a missing or
/// malformed header, is rejected with the same 401 response.
#[derive(Debug, Clone)]
pub struct RequireBasicAuth(pub String);

impl FromRequestParts<AppState> for RequireBasicAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some((id, password)) = parse_basic_credentials(&parts.headers) else {
            debug!("Missing or malformed Basic credentials");
            record_auth_attempt(UserEventOutcome::Rejected);
            return Err(ApiError::unauthorized());
        };

        match state.user_service.authenticate(&id, &password).await {
            Ok(()) => {
                record_auth_attempt(UserEventOutcome::Success);
                Ok(RequireBasicAuth(id))
            }
            Err(DomainError::AuthFailed) => {
                record_auth_attempt(UserEventOutcome::Failed);
                Err(ApiError::unauthorized())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Decode `Authorization: Basic base64(id:password)`
pub fn parse_basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, password) = decoded.split_once(':')?;

    Some((id.to_string(), password.to_string()))
}
