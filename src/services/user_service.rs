//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{UserPatch, UserRepository};
use crate::types::PageParams;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List users with pagination
    async fn list_users(&self, page: PageParams) -> AppResult<Vec<User>>;

    /// Update user details
    async fn update_user(&self, id: i32, name: Option<String>) -> AppResult<User>;

    /// Delete user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of `UserService`.
pub struct UserManager<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_users(&self, page: PageParams) -> AppResult<Vec<User>> {
        self.users.list(page).await
    }

    async fn update_user(&self, id: i32, name: Option<String>) -> AppResult<User> {
        self.users
            .update(id, UserPatch { name })
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if self.users.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
