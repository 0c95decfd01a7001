//! Category repository - persistence for exercise categories.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::base::{DeleteRepository, Patch, ReadRepository, WriteRepository};
use super::entities::category::{self, Entity as CategoryEntity};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PageParams;

/// Partial update for a category record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Patch<category::ActiveModel> for CategoryPatch {
    fn apply(self, model: &mut category::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(description) = self.description {
            model.description = Set(Some(description));
        }
    }
}

/// Category repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self, page: PageParams) -> AppResult<Vec<category::Model>>;

    async fn get(&self, id: i32) -> AppResult<category::Model>;

    /// Fails with `Conflict` when a category with the same name exists.
    async fn create(&self, name: String, description: Option<String>)
        -> AppResult<category::Model>;

    async fn update(&self, id: i32, patch: CategoryPatch) -> AppResult<category::Model>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of `CategoryRepository`.
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<CategoryEntity> for CategoryStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<CategoryEntity, category::ActiveModel> for CategoryStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<CategoryEntity> for CategoryStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn list(&self, page: PageParams) -> AppResult<Vec<category::Model>> {
        ReadRepository::list(self, page).await
    }

    async fn get(&self, id: i32) -> AppResult<category::Model> {
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<category::Model> {
        if self
            .find_by(category::Column::Name, name.clone())
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Category"));
        }

        let model = category::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        };

        // The unique index backs the check above under concurrency
        self.insert(model)
            .await
            .map_err(|e| e.translate_constraint("Category"))
    }

    async fn update(&self, id: i32, patch: CategoryPatch) -> AppResult<category::Model> {
        self.patch(id, patch)
            .await
            .map_err(|e| e.translate_constraint("Category"))?
            .ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
