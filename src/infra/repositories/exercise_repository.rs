//! Exercise repository - persistence for the exercise catalog.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::base::{DeleteRepository, Patch, ReadRepository, WriteRepository};
use super::entities::exercise::{self, Entity as ExerciseEntity};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PageParams;

/// Fields required to create an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub muscle_group_id: i32,
}

/// Partial update for an exercise record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub muscle_group_id: Option<i32>,
}

impl Patch<exercise::ActiveModel> for ExercisePatch {
    fn apply(self, model: &mut exercise::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(description) = self.description {
            model.description = Set(Some(description));
        }
        if let Some(category_id) = self.category_id {
            model.category_id = Set(category_id);
        }
        if let Some(muscle_group_id) = self.muscle_group_id {
            model.muscle_group_id = Set(muscle_group_id);
        }
    }
}

/// Exercise repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    async fn list(&self, page: PageParams) -> AppResult<Vec<exercise::Model>>;

    /// All exercises belonging to one category.
    async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<exercise::Model>>;

    async fn get(&self, id: i32) -> AppResult<exercise::Model>;

    /// Fails with `Conflict` on a duplicate name and `BadRequest` when the
    /// category or muscle group does not exist.
    async fn create(&self, data: NewExercise) -> AppResult<exercise::Model>;

    async fn update(&self, id: i32, patch: ExercisePatch) -> AppResult<exercise::Model>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of `ExerciseRepository`.
pub struct ExerciseStore {
    db: DatabaseConnection,
}

impl ExerciseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<ExerciseEntity> for ExerciseStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<ExerciseEntity, exercise::ActiveModel> for ExerciseStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<ExerciseEntity> for ExerciseStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl ExerciseRepository for ExerciseStore {
    async fn list(&self, page: PageParams) -> AppResult<Vec<exercise::Model>> {
        ReadRepository::list(self, page).await
    }

    async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<exercise::Model>> {
        self.find_all_by(exercise::Column::CategoryId, category_id)
            .await
    }

    async fn get(&self, id: i32) -> AppResult<exercise::Model> {
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, data: NewExercise) -> AppResult<exercise::Model> {
        if self
            .find_by(exercise::Column::Name, data.name.clone())
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Exercise"));
        }

        let model = exercise::ActiveModel {
            name: Set(data.name),
            description: Set(data.description),
            category_id: Set(data.category_id),
            muscle_group_id: Set(data.muscle_group_id),
            ..Default::default()
        };

        self.insert(model)
            .await
            .map_err(|e| e.translate_constraint("Exercise"))
    }

    async fn update(&self, id: i32, patch: ExercisePatch) -> AppResult<exercise::Model> {
        self.patch(id, patch)
            .await
            .map_err(|e| e.translate_constraint("Exercise"))?
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
