//! Authentication service - user registration and login.
//!
//! Composes the credential hasher, the token codec and the user
//! repository. Route protection itself lives in the middleware; this
//! service only issues tokens.

use async_trait::async_trait;
use std::sync::Arc;

use super::token::{Claims, TokenCodec, TokenPair};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. The password is hashed before storage; the
    /// plaintext is never persisted or logged.
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Login and return an access/refresh token pair.
    async fn login(&self, email: String, password: String) -> AppResult<TokenPair>;
}

/// Concrete implementation of `AuthService`.
pub struct Authenticator<R: UserRepository> {
    users: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R: UserRepository> Authenticator<R> {
    pub fn new(users: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { users, codec }
    }

    /// Issue the access/refresh pair for a user id. Both tokens carry the
    /// user id; only the refresh token carries the marker claim.
    fn issue_tokens(&self, user_id: i32) -> AppResult<TokenPair> {
        let access_token = self.codec.encode(Claims::access(user_id))?;
        let refresh_token = self.codec.encode(Claims::refresh(user_id))?;
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl<R: UserRepository> AuthService for Authenticator<R> {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Check-then-act; a concurrent duplicate still surfaces as Conflict
        // via the unique index translation inside `create`.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.users.create(name, email, password_hash).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenPair> {
        // Unknown email and wrong password are reported separately,
        // matching the observed behavior of the service being replaced.
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::NotFound)?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&password) {
            return Err(AppError::InvalidCredentials);
        }

        self.issue_tokens(user.id)
    }
}
