//! User repository - persistence for user accounts.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::base::{DeleteRepository, Patch, ReadRepository, WriteRepository};
use super::entities::user::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::AppResult;
use crate::types::PageParams;

/// Partial update for a user record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
}

impl Patch<user::ActiveModel> for UserPatch {
    fn apply(self, model: &mut user::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
    }
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn list(&self, page: PageParams) -> AppResult<Vec<User>>;

    /// Insert a new user. A concurrent duplicate email surfaces from the
    /// unique index and is translated to `Conflict`.
    async fn create(&self, name: String, email: String, password_hash: String)
        -> AppResult<User>;

    /// Partial update; `None` when the id has no match.
    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>>;

    /// Returns `false` when the id has no match.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed implementation of `UserRepository`.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<UserEntity, user::ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let model = ReadRepository::find_by_id(self, id).await?;
        Ok(model.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let model = self.find_by(user::Column::Email, email).await?;
        Ok(model.map(User::from))
    }

    async fn list(&self, page: PageParams) -> AppResult<Vec<User>> {
        let models = ReadRepository::list(self, page).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<User> {
        let model = user::ActiveModel {
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        self.insert(model)
            .await
            .map(User::from)
            .map_err(|e| e.translate_constraint("User"))
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>> {
        let model = self.patch(id, patch).await?;
        Ok(model.map(User::from))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        self.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, IntoActiveModel};

    fn sample_model() -> user::Model {
        user::Model {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        }
    }

    #[test]
    fn empty_patch_marks_nothing_changed() {
        let mut active = sample_model().into_active_model();
        UserPatch::default().apply(&mut active);
        assert!(!active.is_changed());
    }

    #[test]
    fn patch_sets_only_the_given_fields() {
        let mut active = sample_model().into_active_model();
        UserPatch {
            name: Some("Annie".to_string()),
        }
        .apply(&mut active);

        assert!(active.is_changed());
        assert_eq!(active.name.as_ref(), "Annie");
        // Email stays untouched by a name-only patch
        assert_eq!(active.email.as_ref(), "ann@example.com");
    }
}
