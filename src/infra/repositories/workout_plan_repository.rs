//! Workout plan repository - persistence for per-user workout plans.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue::Set, DatabaseConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::base::{DeleteRepository, Patch, ReadRepository, WriteRepository};
use super::entities::workout_plan::{self, Entity as WorkoutPlanEntity};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PageParams;

/// Fields required to create a workout plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutPlan {
    pub user_id: i32,
    /// Defaults to today when not given.
    pub date: Option<NaiveDate>,
    pub comments: String,
}

/// Partial update for a workout plan record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutPlanPatch {
    pub date: Option<NaiveDate>,
    pub comments: Option<String>,
}

impl Patch<workout_plan::ActiveModel> for WorkoutPlanPatch {
    fn apply(self, model: &mut workout_plan::ActiveModel) {
        if let Some(date) = self.date {
            model.date = Set(date);
        }
        if let Some(comments) = self.comments {
            model.comments = Set(comments);
        }
    }
}

/// Workout plan repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WorkoutPlanRepository: Send + Sync {
    async fn list(&self, page: PageParams) -> AppResult<Vec<workout_plan::Model>>;

    /// All plans owned by one user.
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<workout_plan::Model>>;

    async fn get(&self, id: i32) -> AppResult<workout_plan::Model>;

    /// Fails with `BadRequest` when the owning user does not exist.
    async fn create(&self, data: NewWorkoutPlan) -> AppResult<workout_plan::Model>;

    async fn update(&self, id: i32, patch: WorkoutPlanPatch)
        -> AppResult<workout_plan::Model>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of `WorkoutPlanRepository`.
pub struct WorkoutPlanStore {
    db: DatabaseConnection,
}

impl WorkoutPlanStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<WorkoutPlanEntity> for WorkoutPlanStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<WorkoutPlanEntity, workout_plan::ActiveModel> for WorkoutPlanStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<WorkoutPlanEntity> for WorkoutPlanStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl WorkoutPlanRepository for WorkoutPlanStore {
    async fn list(&self, page: PageParams) -> AppResult<Vec<workout_plan::Model>> {
        ReadRepository::list(self, page).await
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<workout_plan::Model>> {
        self.find_all_by(workout_plan::Column::UserId, user_id)
            .await
    }

    async fn get(&self, id: i32) -> AppResult<workout_plan::Model> {
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, data: NewWorkoutPlan) -> AppResult<workout_plan::Model> {
        let model = workout_plan::ActiveModel {
            user_id: Set(data.user_id),
            date: Set(data.date.unwrap_or_else(|| Utc::now().date_naive())),
            comments: Set(data.comments),
            ..Default::default()
        };

        self.insert(model)
            .await
            .map_err(|e| e.translate_constraint("Workout plan"))
    }

    async fn update(
        &self,
        id: i32,
        patch: WorkoutPlanPatch,
    ) -> AppResult<workout_plan::Model> {
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
        let model = workout_plan::Model {
            id: 2,
            user_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            comments: "Leg day".to_string(),
        };
        let mut active = model.into_active_model();
        WorkoutPlanPatch::default().apply(&mut active);
        assert!(!active.is_changed());
    }
}
