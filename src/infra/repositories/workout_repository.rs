//! Workout repository - persistence for workout exercise entries.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::base::{DeleteRepository, Patch, ReadRepository, WriteRepository};
use super::entities::workout_exercise::{self, Entity as WorkoutEntity, WorkoutStatus};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PageParams;

/// Fields required to create a workout entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub exercise_id: i32,
    pub description: Option<String>,
    pub sets: i32,
    pub repetitions: i32,
    pub weight: Option<f64>,
    /// Defaults to `ToBeStarted` when not given.
    pub status: Option<WorkoutStatus>,
}

/// Partial update for a workout entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutPatch {
    pub description: Option<String>,
    pub sets: Option<i32>,
    pub repetitions: Option<i32>,
    pub weight: Option<f64>,
    pub status: Option<WorkoutStatus>,
}

impl Patch<workout_exercise::ActiveModel> for WorkoutPatch {
    fn apply(self, model: &mut workout_exercise::ActiveModel) {
        if let Some(description) = self.description {
            model.description = Set(Some(description));
        }
        if let Some(sets) = self.sets {
            model.sets = Set(sets);
        }
        if let Some(repetitions) = self.repetitions {
            model.repetitions = Set(repetitions);
        }
        if let Some(weight) = self.weight {
            model.weight = Set(Some(weight));
        }
        if let Some(status) = self.status {
            model.status = Set(status);
        }
    }
}

/// Workout repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    async fn list(&self, page: PageParams) -> AppResult<Vec<workout_exercise::Model>>;

    async fn get(&self, id: i32) -> AppResult<workout_exercise::Model>;

    /// Fails with `BadRequest` when the referenced exercise does not exist.
    async fn create(&self, data: NewWorkout) -> AppResult<workout_exercise::Model>;

    async fn update(&self, id: i32, patch: WorkoutPatch) -> AppResult<workout_exercise::Model>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of `WorkoutRepository`.
pub struct WorkoutStore {
    db: DatabaseConnection,
}

impl WorkoutStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<WorkoutEntity> for WorkoutStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<WorkoutEntity, workout_exercise::ActiveModel> for WorkoutStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<WorkoutEntity> for WorkoutStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl WorkoutRepository for WorkoutStore {
    async fn list(&self, page: PageParams) -> AppResult<Vec<workout_exercise::Model>> {
        ReadRepository::list(self, page).await
    }

    async fn get(&self, id: i32) -> AppResult<workout_exercise::Model> {
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, data: NewWorkout) -> AppResult<workout_exercise::Model> {
        let model = workout_exercise::ActiveModel {
            description: Set(data.description),
            exercise_id: Set(data.exercise_id),
            sets: Set(data.sets),
            repetitions: Set(data.repetitions),
            weight: Set(data.weight),
            status: Set(data.status.unwrap_or(WorkoutStatus::ToBeStarted)),
            ..Default::default()
        };

        self.insert(model)
            .await
            .map_err(|e| e.translate_constraint("Workout"))
    }

    async fn update(&self, id: i32, patch: WorkoutPatch) -> AppResult<workout_exercise::Model> {
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
