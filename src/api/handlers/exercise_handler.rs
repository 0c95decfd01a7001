//! Exercise catalog handlers.

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
use crate::infra::repositories::entities::exercise;
use crate::infra::repositories::{ExercisePatch, NewExercise};
use crate::types::{MessageResponse, PageParams};

/// Exercise creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    /// Exercise name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[schema(example = "Bench press")]
    pub name: String,
    /// Exercise description
    pub description: Option<String>,
    /// Id of the category this exercise belongs to
    #[schema(example = 1)]
    pub category_id: i32,
    /// Id of the primary muscle group targeted
    #[schema(example = 1)]
    pub muscle_group_id: i32,
}

/// Exercise partial update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchExerciseRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub muscle_group_id: Option<i32>,
}

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route(
            "/:id",
            get(get_exercise)
                .put(replace_exercise)
                .patch(patch_exercise)
                .delete(delete_exercise),
        )
}

/// List exercises
#[utoipa::path(
    get,
    path = "/exercises",
    tag = "Exercises",
    params(PageParams),
    responses(
        (status = 200, description = "List of exercises", body = [exercise::Model])
    )
)]
pub async fn list_exercises(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<exercise::Model>>> {
    let page = page.clamped(state.config.pagination_max_limit);
    Ok(Json(state.exercises.list(page).await?))
}

/// Get an exercise by id
#[utoipa::path(
    get,
    path = "/exercises/{id}",
    tag = "Exercises",
    params(("id" = i32, Path, description = "Exercise id")),
    responses(
        (status = 200, description = "Exercise found", body = exercise::Model),
        (status = 404, description = "Exercise not found")
    )
)]
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<exercise::Model>> {
    Ok(Json(state.exercises.get(id).await?))
}

/// Create a new exercise
#[utoipa::path(
    post,
    path = "/exercises",
    tag = "Exercises",
    request_body = CreateExerciseRequest,
    responses(
        (status = 201, description = "Exercise created", body = exercise::Model),
        (status = 400, description = "Validation error or unknown category/muscle group"),
        (status = 409, description = "Exercise already exists")
    )
)]
pub async fn create_exercise(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateExerciseRequest>,
) -> AppResult<(StatusCode, Json<exercise::Model>)> {
    let exercise = state
        .exercises
        .create(NewExercise {
            name: payload.name,
            description: payload.description,
            category_id: payload.category_id,
            muscle_group_id: payload.muscle_group_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// Replace an exercise (full update)
#[utoipa::path(
    put,
    path = "/exercises/{id}",
    tag = "Exercises",
    params(("id" = i32, Path, description = "Exercise id")),
    request_body = CreateExerciseRequest,
    responses(
        (status = 200, description = "Exercise updated", body = exercise::Model),
        (status = 404, description = "Exercise not found")
    )
)]
pub async fn replace_exercise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateExerciseRequest>,
) -> AppResult<Json<exercise::Model>> {
    let patch = ExercisePatch {
        name: Some(payload.name),
        description: payload.description,
        category_id: Some(payload.category_id),
        muscle_group_id: Some(payload.muscle_group_id),
    };

    Ok(Json(state.exercises.update(id, patch).await?))
}

/// Update an exercise (partial update)
#[utoipa::path(
    patch,
    path = "/exercises/{id}",
    tag = "Exercises",
    params(("id" = i32, Path, description = "Exercise id")),
    request_body = PatchExerciseRequest,
    responses(
        (status = 200, description = "Exercise updated", body = exercise::Model),
        (status = 404, description = "Exercise not found")
    )
)]
pub async fn patch_exercise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchExerciseRequest>,
) -> AppResult<Json<exercise::Model>> {
    let patch = ExercisePatch {
        name: payload.name,
        description: payload.description,
        category_id: payload.category_id,
        muscle_group_id: payload.muscle_group_id,
    };

    Ok(Json(state.exercises.update(id, patch).await?))
}

/// Delete an exercise
#[utoipa::path(
    delete,
    path = "/exercises/{id}",
    tag = "Exercises",
    params(("id" = i32, Path, description = "Exercise id")),
    responses(
        (status = 200, description = "Exercise deleted", body = MessageResponse),
        (status = 404, description = "Exercise not found")
    )
)]
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.exercises.delete(id).await?;

    Ok(Json(MessageResponse::new("Exercise deleted")))
}
