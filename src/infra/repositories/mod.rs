//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! The `base` traits carry the generic CRUD operations; domain
//! repositories specialize them with uniqueness checks and error
//! translation.

mod base;
mod category_repository;
pub mod entities;
mod exercise_repository;
mod muscle_group_repository;
mod user_repository;
mod workout_plan_repository;
mod workout_repository;

pub use base::{CrudRepository, DeleteRepository, Patch, ReadRepository, WriteRepository};
pub use category_repository::{CategoryPatch, CategoryRepository, CategoryStore};
pub use entities::WorkoutStatus;
pub use exercise_repository::{ExercisePatch, ExerciseRepository, ExerciseStore, NewExercise};
pub use muscle_group_repository::{MuscleGroupPatch, MuscleGroupRepository, MuscleGroupStore};
pub use user_repository::{UserPatch, UserRepository, UserStore};
pub use workout_plan_repository::{
    NewWorkoutPlan, WorkoutPlanPatch, WorkoutPlanRepository, WorkoutPlanStore,
};
pub use workout_repository::{NewWorkout, WorkoutPatch, WorkoutRepository, WorkoutStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use exercise_repository::MockExerciseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use muscle_group_repository::MockMuscleGroupRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use workout_plan_repository::MockWorkoutPlanRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use workout_repository::MockWorkoutRepository;
