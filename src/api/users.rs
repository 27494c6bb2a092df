//! Account endpoints
//!
//! - `POST /signup` registers an account
//! - `GET /users/{user_id}` returns an account, Basic auth required
//! - `DELETE /users/{user_id}` removes the caller's own account, only
//!   mounted when deletion is enabled

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::info;

use crate::api::middleware::RequireBasicAuth;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_signup, UserEventOutcome};
use crate::infrastructure::user::CreateUserRequest;

/// Create the account router
pub fn create_users_router(allow_delete: bool) -> Router<AppState> {
    let user_routes = if allow_delete {
        get(get_user).delete(delete_user)
    } else {
        get(get_user)
    };

    Router::new()
        .route("/signup", post(signup))
        .route("/users/{user_id}", user_routes)
}

/// Signup request body
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub password: String,
}

/// Register an account
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let result = state
        .user_service
        .create_user(CreateUserRequest {
            id: request.user_id,
            password: request.password,
        })
        .await;

    match result {
        Ok(user) => {
            record_signup(UserEventOutcome::Success);
            Ok(Json(ApiResponse::with_user(
                "Account successfully created",
                user,
            )))
        }
        Err(e) => {
            record_signup(signup_outcome(&e));
            Err(ApiError::from(e).with_message("Account creation failed"))
        }
    }
}

fn signup_outcome(err: &DomainError) -> UserEventOutcome {
    match err {
        DomainError::Validation { .. } => UserEventOutcome::Rejected,
        DomainError::AlreadyExists { .. } => UserEventOutcome::Conflict,
        _ => UserEventOutcome::Failed,
    }
}

/// Look up an account
///
/// GET /users/{user_id}
///
/// Any authenticated user may read any account.
pub async fn get_user(
    RequireBasicAuth(_caller): RequireBasicAuth,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let user = state.user_service.get_user(&user_id).await?;

    Ok(Json(ApiResponse::with_user("User details by user_id", user)))
}

/// Remove the caller's own account
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    RequireBasicAuth(caller): RequireBasicAuth,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    if caller != user_id {
        return Err(ApiError::forbidden("No permission for update"));
    }

    state.user_service.delete_user(&user_id).await?;
    info!(user_id = %user_id, "Account removed via API");

    Ok(Json(ApiResponse::message("Account removed")))
}
