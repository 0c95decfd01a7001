//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories (generic base + per-entity specializations)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    CategoryRepository, CategoryStore, ExerciseRepository, ExerciseStore, MuscleGroupRepository,
    MuscleGroupStore, UserRepository, UserStore, WorkoutPlanRepository, WorkoutPlanStore,
    WorkoutRepository, WorkoutStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCategoryRepository, MockExerciseRepository, MockMuscleGroupRepository, MockUserRepository,
    MockWorkoutPlanRepository, MockWorkoutRepository,
};
