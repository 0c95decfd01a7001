//! Auth service integration tests.
//!
//! Drive the real `Authenticator` (hashing + token issuance) against an
//! in-memory user repository, so registration and login flows run
//! end-to-end without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jsonwebtoken::Algorithm;

use fitness_tracker_api::domain::{Password, User};
use fitness_tracker_api::errors::{AppError, AppResult};
use fitness_tracker_api::infra::repositories::{UserPatch, UserRepository};
use fitness_tracker_api::services::{AuthService, Authenticator, TokenCodec};
use fitness_tracker_api::types::PageParams;

const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

/// In-memory `UserRepository` with the same contract as the store: the
/// email uniqueness check inside `create` stands in for the unique index.
#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, page: PageParams) -> AppResult<Vec<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("User"));
        }
        let user = User::new(rows.len() as i32 + 1, name, email, password_hash);
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(user) = rows.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            user.name = name;
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok(rows.len() < before)
    }
}

fn authenticator() -> (Arc<InMemoryUsers>, Arc<TokenCodec>, Authenticator<InMemoryUsers>) {
    let users = Arc::new(InMemoryUsers::default());
    let codec = Arc::new(TokenCodec::new(SECRET, Algorithm::HS256, 3600));
    let auth = Authenticator::new(users.clone(), codec.clone());
    (users, codec, auth)
}

#[tokio::test]
async fn register_stores_a_salted_hash_not_the_plaintext() {
    let (users, _, auth) = authenticator();

    let user = auth
        .register(
            "Ann".to_string(),
            "ann@example.com".to_string(),
            "Password@123".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.email, "ann@example.com");
    assert!(user.id > 0);

    let stored = users.find_by_email("ann@example.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "Password@123");
    assert!(Password::from_hash(stored.password_hash).verify("Password@123"));
}

#[tokio::test]
async fn register_rejects_a_duplicate_email() {
    let (_, _, auth) = authenticator();

    auth.register(
        "Ann".to_string(),
        "ann@example.com".to_string(),
        "Password@123".to_string(),
    )
    .await
    .unwrap();

    let result = auth
        .register(
            "Ann Again".to_string(),
            "ann@example.com".to_string(),
            "Password@456".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn register_rejects_a_too_short_password() {
    let (users, _, auth) = authenticator();

    let result = auth
        .register(
            "Ann".to_string(),
            "ann@example.com".to_string(),
            "short".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    // Nothing was persisted
    assert!(users.find_by_email("ann@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn login_distinguishes_unknown_email_from_wrong_password() {
    let (_, _, auth) = authenticator();

    auth.register(
        "Ann".to_string(),
        "ann@example.com".to_string(),
        "Password@123".to_string(),
    )
    .await
    .unwrap();

    let unknown = auth
        .login("nobody@example.com".to_string(), "Password@123".to_string())
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound)));

    let wrong = auth
        .login("ann@example.com".to_string(), "WrongPassword1".to_string())
        .await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn login_issues_a_pair_with_the_marker_on_the_refresh_token_only() {
    let (_, codec, auth) = authenticator();

    let user = auth
        .register(
            "Ann".to_string(),
            "ann@example.com".to_string(),
            "Password@123".to_string(),
        )
        .await
        .unwrap();

    let pair = auth
        .login("ann@example.com".to_string(), "Password@123".to_string())
        .await
        .unwrap();

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);

    let access = codec.decode(&pair.access_token).unwrap();
    assert_eq!(access.user_id, user.id);
    assert!(!access.is_refresh());

    let refresh = codec.decode(&pair.refresh_token).unwrap();
    assert_eq!(refresh.user_id, user.id);
    assert!(refresh.is_refresh());
}
