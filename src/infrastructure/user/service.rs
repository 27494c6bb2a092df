//! User service for registration, lookup, and authentication

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::user::{validate_new_account, DisplayUser, UserStore, ValidationReason};
use crate::domain::DomainError;

/// Request for creating a new account
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub id: String,
    pub password: String,
}

/// Validates account requests and translates store outcomes
///
/// Holds nothing but its store, so one instance can be shared by every
/// request handler.
#[derive(Debug)]
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserService<S> {
    /// Create a new user service
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a new account
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<DisplayUser, DomainError> {
        validate_new_account(&request.id, &request.password).map_err(|reason| {
            debug!(user_id = %request.id, reason = %reason, "Rejected account request");
            DomainError::validation(reason)
        })?;

        let record = self
            .store
            .create_if_absent(&request.id, &request.password)
            .await?;

        info!(user_id = %record.id(), "Account created");

        Ok(DisplayUser::from(record))
    }

    /// Look up an account by ID
    pub async fn get_user(&self, id: &str) -> Result<DisplayUser, DomainError> {
        if id.is_empty() {
            return Err(DomainError::validation(ValidationReason::RequiredUserId));
        }

        let record = self.store.get(id).await?;

        Ok(DisplayUser::from(record))
    }

    /// Check a user's credentials
    ///
    /// Every failure, whether the user is unknown or the password is wrong,
    /// comes back as [`DomainError::AuthFailed`].
    pub async fn authenticate(&self, id: &str, password: &str) -> Result<(), DomainError> {
        if id.is_empty() || password.is_empty() {
            return Err(DomainError::AuthFailed);
        }

        match self.store.verify_credentials(id, password).await {
            Ok(()) => Ok(()),
            Err(DomainError::NotFound { .. }) => {
                warn!(user_id = %id, "Authentication failed");
                Err(DomainError::AuthFailed)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove an account
    pub async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        if self.store.delete(id).await? {
            info!(user_id = %id, "Account removed");
            Ok(())
        } else {
            Err(DomainError::not_found(id))
        }
    }

    /// Count registered accounts
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserStore, UserRecord};
    use crate::infrastructure::user::store::InMemoryUserStore;

    fn create_service() -> UserService<InMemoryUserStore> {
        UserService::new(Arc::new(InMemoryUserStore::default()))
    }

    fn make_request(id: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            id: id.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = create_service();

        let created = service
            .create_user(make_request("TaroYamada", "PaSSwd4TY"))
            .await
            .unwrap();
        assert_eq!(created.id, "TaroYamada");
        assert_eq!(created.nickname, "TaroYamada");
        assert!(created.comment.is_empty());

        let fetched = service.get_user("TaroYamada").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_is_idempotent() {
        let service = create_service();
        service
            .create_user(make_request("TaroYamada", "PaSSwd4TY"))
            .await
            .unwrap();

        let first = service.get_user("TaroYamada").await.unwrap();
        let second = service.get_user("TaroYamada").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_missing_and_empty() {
        let service = create_service();

        assert_eq!(
            service.get_user("NoSuchUser").await,
            Err(DomainError::not_found("NoSuchUser"))
        );
        assert_eq!(
            service.get_user("").await,
            Err(DomainError::validation(ValidationReason::RequiredUserId))
        );
    }

    #[tokio::test]
    async fn test_create_validation_reasons() {
        let service = create_service();

        let cases = [
            ("", "PaSSwd4TY", ValidationReason::RequiredFieldsMissing),
            ("abcde", "PaSSwd4TY", ValidationReason::LengthOutOfRange),
            ("TaroYamada", "1234567", ValidationReason::LengthOutOfRange),
            ("taro-yamada", "PaSSwd4TY", ValidationReason::InvalidCharacters),
        ];

        for (id, password, reason) in cases {
            let result = service.create_user(make_request(id, password)).await;
            assert_eq!(result, Err(DomainError::validation(reason)), "id={:?}", id);
        }

        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let service = create_service();

        service
            .create_user(make_request("TaroYamada", "PaSSwd4TY"))
            .await
            .unwrap();

        let result = service
            .create_user(make_request("TaroYamada", "Another99"))
            .await;
        assert_eq!(result, Err(DomainError::already_exists("TaroYamada")));

        // Original credentials still work, the rejected ones do not
        assert!(service.authenticate("TaroYamada", "PaSSwd4TY").await.is_ok());
        assert_eq!(
            service.authenticate("TaroYamada", "Another99").await,
            Err(DomainError::AuthFailed)
        );
    }

    #[tokio::test]
    async fn test_authentication_scenario() {
        let service = create_service();

        service
            .create_user(make_request("TaroYamada", "PaSSwd4TY"))
            .await
            .unwrap();

        assert_eq!(
            service.authenticate("TaroYamada", "wrong").await,
            Err(DomainError::AuthFailed)
        );
        assert_eq!(service.authenticate("TaroYamada", "PaSSwd4TY").await, Ok(()));
        assert_eq!(
            service.get_user("NoSuchUser").await,
            Err(DomainError::not_found("NoSuchUser"))
        );
    }

    #[tokio::test]
    async fn test_authenticate_unknown_matches_wrong_password() {
        let service = create_service();
        service
            .create_user(make_request("TaroYamada", "PaSSwd4TY"))
            .await
            .unwrap();

        let unknown = service.authenticate("NoSuchUser", "PaSSwd4TY").await;
        let wrong = service.authenticate("TaroYamada", "NotMyPass").await;

        assert_eq!(unknown, wrong);
        assert_eq!(unknown, Err(DomainError::AuthFailed));
    }

    #[tokio::test]
    async fn test_authenticate_empty_credentials() {
        let service = create_service();

        assert_eq!(service.authenticate("", "").await, Err(DomainError::AuthFailed));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let service = create_service();
        service
            .create_user(make_request("TaroYamada", "PaSSwd4TY"))
            .await
            .unwrap();

        service.delete_user("TaroYamada").await.unwrap();

        assert_eq!(
            service.delete_user("TaroYamada").await,
            Err(DomainError::not_found("TaroYamada"))
        );
        assert_eq!(
            service.authenticate("TaroYamada", "PaSSwd4TY").await,
            Err(DomainError::AuthFailed)
        );
    }

    #[tokio::test]
    async fn test_get_uses_stored_nickname() {
        let mut store = MockUserStore::new();
        store
            .expect_get()
            .withf(|id: &str| id == "TaroYamada")
            .returning(|id| Ok(UserRecord::new(id, "PaSSwd4TY").with_nickname("Taro")));

        let service = UserService::new(Arc::new(store));

        let user = service.get_user("TaroYamada").await.unwrap();
        assert_eq!(user.nickname, "Taro");
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let mut store = MockUserStore::new();
        store
            .expect_create_if_absent()
            .returning(|_, _| Err(DomainError::internal("hasher unavailable")));
        store
            .expect_verify_credentials()
            .returning(|_, _| Err(DomainError::internal("hasher unavailable")));

        let service = UserService::new(Arc::new(store));

        let created = service
            .create_user(make_request("TaroYamada", "PaSSwd4TY"))
            .await;
        assert!(matches!(created, Err(DomainError::Internal { .. })));

        let auth = service.authenticate("TaroYamada", "PaSSwd4TY").await;
        assert!(matches!(auth, Err(DomainError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_validation_skips_store() {
        // No expectations: any store call would panic
        let store = MockUserStore::new();
        let service = UserService::new(Arc::new(store));

        let result = service.create_user(make_request("abc", "PaSSwd4TY")).await;
        assert_eq!(
            result,
            Err(DomainError::validation(ValidationReason::LengthOutOfRange))
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_create_user() {
        let service = Arc::new(create_service());

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .create_user(make_request("SameUser01", "PaSSwd4TY"))
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        let mut duplicates = 0;

        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(DomainError::AlreadyExists { .. }) => duplicates += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 49);
        assert_eq!(service.count().await.unwrap(), 1);
    }
}
