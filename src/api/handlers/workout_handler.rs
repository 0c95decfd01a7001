//! Workout handlers. All routes sit behind the authentication gate.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::repositories::entities::{workout_exercise, WorkoutStatus};
use crate::infra::repositories::{NewWorkout, WorkoutPatch};
use crate::types::{MessageResponse, PageParams};

/// Workout creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    /// Id of the exercise performed
    #[schema(example = 1)]
    pub exercise_id: i32,
    /// Free-form notes
    pub description: Option<String>,
    /// Number of sets
    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    #[schema(example = 3)]
    pub sets: i32,
    /// Repetitions per set
    #[validate(range(min = 1, message = "Repetitions must be at least 1"))]
    #[schema(example = 12)]
    pub repetitions: i32,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Initial status, defaults to `to_be_started`
    pub status: Option<WorkoutStatus>,
}

/// Workout full update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplaceWorkoutRequest {
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    pub sets: i32,
    #[validate(range(min = 1, message = "Repetitions must be at least 1"))]
    pub repetitions: i32,
    pub weight: Option<f64>,
    pub status: WorkoutStatus,
}

/// Workout partial update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchWorkoutRequest {
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    pub sets: Option<i32>,
    #[validate(range(min = 1, message = "Repetitions must be at least 1"))]
    pub repetitions: Option<i32>,
    pub weight: Option<f64>,
    pub status: Option<WorkoutStatus>,
}

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route(
            "/:id",
            get(get_workout)
                .put(replace_workout)
                .patch(patch_workout)
                .delete(delete_workout),
        )
}

/// List workouts
#[utoipa::path(
    get,
    path = "/workouts",
    tag = "Workouts",
    params(PageParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of workouts", body = [workout_exercise::Model]),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn list_workouts(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<workout_exercise::Model>>> {
    let page = page.clamped(state.config.pagination_max_limit);
    Ok(Json(state.workouts.list(page).await?))
}

/// Get a workout by id
#[utoipa::path(
    get,
    path = "/workouts/{id}",
    tag = "Workouts",
    params(("id" = i32, Path, description = "Workout id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout found", body = workout_exercise::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<workout_exercise::Model>> {
    Ok(Json(state.workouts.get(id).await?))
}

/// Create a new workout
#[utoipa::path(
    post,
    path = "/workouts",
    tag = "Workouts",
    request_body = CreateWorkoutRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Workout created", body = workout_exercise::Model),
        (status = 400, description = "Validation error or unknown exercise"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn create_workout(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateWorkoutRequest>,
) -> AppResult<(StatusCode, Json<workout_exercise::Model>)> {
    let workout = state
        .workouts
        .create(NewWorkout {
            exercise_id: payload.exercise_id,
            description: payload.description,
            sets: payload.sets,
            repetitions: payload.repetitions,
            weight: payload.weight,
            status: payload.status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(workout)))
}

/// Replace a workout (full update)
#[utoipa::path(
    put,
    path = "/workouts/{id}",
    tag = "Workouts",
    params(("id" = i32, Path, description = "Workout id")),
    request_body = ReplaceWorkoutRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout updated", body = workout_exercise::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn replace_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ReplaceWorkoutRequest>,
) -> AppResult<Json<workout_exercise::Model>> {
    let patch = WorkoutPatch {
        description: payload.description,
        sets: Some(payload.sets),
        repetitions: Some(payload.repetitions),
        weight: payload.weight,
        status: Some(payload.status),
    };

    Ok(Json(state.workouts.update(id, patch).await?))
}

/// Update a workout (partial update)
#[utoipa::path(
    patch,
    path = "/workouts/{id}",
    tag = "Workouts",
    params(("id" = i32, Path, description = "Workout id")),
    request_body = PatchWorkoutRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout updated", body = workout_exercise::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn patch_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchWorkoutRequest>,
) -> AppResult<Json<workout_exercise::Model>> {
    let patch = WorkoutPatch {
        description: payload.description,
        sets: payload.sets,
        repetitions: payload.repetitions,
        weight: payload.weight,
        status: payload.status,
    };

    Ok(Json(state.workouts.update(id, patch).await?))
}

/// Delete a workout
#[utoipa::path(
    delete,
    path = "/workouts/{id}",
    tag = "Workouts",
    params(("id" = i32, Path, description = "Workout id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout deleted", body = MessageResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.workouts.delete(id).await?;

    Ok(Json(MessageResponse::new("Workout deleted")))
}
