//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod category;
pub mod exercise;
pub mod muscle_group;
pub mod user;
pub mod workout_exercise;
pub mod workout_plan;

pub use workout_exercise::WorkoutStatus;
