//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, category_handler, exercise_handler, muscle_group_handler, user_handler,
    workout_handler, workout_plan_handler,
};
use crate::domain::UserResponse;
use crate::infra::repositories::entities::{
    category, exercise, muscle_group, workout_exercise, workout_plan, WorkoutStatus,
};
use crate::services::TokenPair;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Fitness Workout Tracker API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fitness Workout Tracker",
        version = "1.0.0",
        description = "Fitness tracking API with JWT bearer authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Category endpoints
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::list_category_exercises,
        category_handler::create_category,
        category_handler::replace_category,
        category_handler::patch_category,
        category_handler::delete_category,
        // Exercise endpoints
        exercise_handler::list_exercises,
        exercise_handler::get_exercise,
        exercise_handler::create_exercise,
        exercise_handler::replace_exercise,
        exercise_handler::patch_exercise,
        exercise_handler::delete_exercise,
        // Muscle group endpoints
        muscle_group_handler::list_muscle_groups,
        muscle_group_handler::get_muscle_group,
        muscle_group_handler::create_muscle_group,
        muscle_group_handler::replace_muscle_group,
        muscle_group_handler::patch_muscle_group,
        muscle_group_handler::delete_muscle_group,
        // Workout endpoints
        workout_handler::list_workouts,
        workout_handler::get_workout,
        workout_handler::create_workout,
        workout_handler::replace_workout,
        workout_handler::patch_workout,
        workout_handler::delete_workout,
        // Workout plan endpoints
        workout_plan_handler::list_workout_plans,
        workout_plan_handler::list_my_workout_plans,
        workout_plan_handler::get_workout_plan,
        workout_plan_handler::create_workout_plan,
        workout_plan_handler::replace_workout_plan,
        workout_plan_handler::patch_workout_plan,
        workout_plan_handler::delete_workout_plan,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            TokenPair,
            MessageResponse,
            // Entity models
            category::Model,
            muscle_group::Model,
            exercise::Model,
            workout_exercise::Model,
            workout_plan::Model,
            WorkoutStatus,
            // Request types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            user_handler::UpdateUserRequest,
            category_handler::CreateCategoryRequest,
            category_handler::PatchCategoryRequest,
            exercise_handler::CreateExerciseRequest,
            exercise_handler::PatchExerciseRequest,
            muscle_group_handler::CreateMuscleGroupRequest,
            muscle_group_handler::PatchMuscleGroupRequest,
            workout_handler::CreateWorkoutRequest,
            workout_handler::ReplaceWorkoutRequest,
            workout_handler::PatchWorkoutRequest,
            workout_plan_handler::CreateWorkoutPlanRequest,
            workout_plan_handler::PatchWorkoutPlanRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "User management operations"),
        (name = "Categories", description = "Exercise category catalog"),
        (name = "Exercises", description = "Exercise catalog"),
        (name = "Muscle Groups", description = "Muscle group catalog"),
        (name = "Workouts", description = "Workout tracking"),
        (name = "Workout Plans", description = "Per-user workout planning")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
