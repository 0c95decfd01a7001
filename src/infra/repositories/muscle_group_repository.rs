//! Muscle group repository - persistence for muscle groups.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::base::{DeleteRepository, Patch, ReadRepository, WriteRepository};
use super::entities::muscle_group::{self, Entity as MuscleGroupEntity};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PageParams;

/// Partial update for a muscle group record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MuscleGroupPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Patch<muscle_group::ActiveModel> for MuscleGroupPatch {
    fn apply(self, model: &mut muscle_group::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(description) = self.description {
            model.description = Set(Some(description));
        }
    }
}

/// Muscle group repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MuscleGroupRepository: Send + Sync {
    async fn list(&self, page: PageParams) -> AppResult<Vec<muscle_group::Model>>;

    async fn get(&self, id: i32) -> AppResult<muscle_group::Model>;

    /// Name uniqueness is a repository-level check here; the schema does
    /// not carry a unique index for muscle group names.
    async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<muscle_group::Model>;

    async fn update(&self, id: i32, patch: MuscleGroupPatch) -> AppResult<muscle_group::Model>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of `MuscleGroupRepository`.
pub struct MuscleGroupStore {
    db: DatabaseConnection,
}

impl MuscleGroupStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<MuscleGroupEntity> for MuscleGroupStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<MuscleGroupEntity, muscle_group::ActiveModel> for MuscleGroupStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<MuscleGroupEntity> for MuscleGroupStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl MuscleGroupRepository for MuscleGroupStore {
    async fn list(&self, page: PageParams) -> AppResult<Vec<muscle_group::Model>> {
        ReadRepository::list(self, page).await
    }

    async fn get(&self, id: i32) -> AppResult<muscle_group::Model> {
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<muscle_group::Model> {
        if self
            .find_by(muscle_group::Column::Name, name.clone())
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Muscle group"));
        }

        let model = muscle_group::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        };

        self.insert(model).await
    }

    async fn update(&self, id: i32, patch: MuscleGroupPatch) -> AppResult<muscle_group::Model> {
        self.patch(id, patch).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, IntoActiveModel};

    #[test]
    fn empty_patch_marks_nothing_changed() {
        let model = muscle_group::Model {
            id: 3,
            name: "Chest".to_string(),
            description: Some("Pectorals".to_string()),
        };
        let mut active = model.into_active_model();
        MuscleGroupPatch::default().apply(&mut active);
        assert!(!active.is_changed());
    }
}
