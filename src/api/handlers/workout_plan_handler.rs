//! Workout plan handlers. All routes sit behind the authentication gate;
//! creation takes the owning user from the verified token claims.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::repositories::entities::workout_plan;
use crate::infra::repositories::{NewWorkoutPlan, WorkoutPlanPatch};
use crate::types::{MessageResponse, PageParams};

/// Workout plan creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutPlanRequest {
    /// Plan date, defaults to today
    #[schema(value_type = Option<String>, format = Date, example = "2025-03-01")]
    pub date: Option<NaiveDate>,
    /// Plan notes
    #[validate(length(min = 1, message = "Comments are required"))]
    #[schema(example = "Push day, focus on form")]
    pub comments: String,
}

/// Workout plan partial update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchWorkoutPlanRequest {
    #[schema(value_type = Option<String>, format = Date, example = "2025-03-01")]
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Comments are required"))]
    pub comments: Option<String>,
}

/// Create workout plan routes
pub fn workout_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workout_plans).post(create_workout_plan))
        .route("/mine", get(list_my_workout_plans))
        .route(
            "/:id",
            get(get_workout_plan)
                .put(replace_workout_plan)
                .patch(patch_workout_plan)
                .delete(delete_workout_plan),
        )
}

/// List workout plans
#[utoipa::path(
    get,
    path = "/workout-plans",
    tag = "Workout Plans",
    params(PageParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of workout plans", body = [workout_plan::Model]),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn list_workout_plans(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<workout_plan::Model>>> {
    let page = page.clamped(state.config.pagination_max_limit);
    Ok(Json(state.workout_plans.list(page).await?))
}

/// List the authenticated user's workout plans
#[utoipa::path(
    get,
    path = "/workout-plans/mine",
    tag = "Workout Plans",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's workout plans", body = [workout_plan::Model]),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn list_my_workout_plans(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<workout_plan::Model>>> {
    Ok(Json(
        state.workout_plans.list_for_user(current_user.id).await?,
    ))
}

/// Get a workout plan by id
#[utoipa::path(
    get,
    path = "/workout-plans/{id}",
    tag = "Workout Plans",
    params(("id" = i32, Path, description = "Workout plan id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout plan found", body = workout_plan::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout plan not found")
    )
)]
pub async fn get_workout_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<workout_plan::Model>> {
    Ok(Json(state.workout_plans.get(id).await?))
}

/// Create a new workout plan owned by the authenticated user
#[utoipa::path(
    post,
    path = "/workout-plans",
    tag = "Workout Plans",
    request_body = CreateWorkoutPlanRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Workout plan created", body = workout_plan::Model),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn create_workout_plan(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateWorkoutPlanRequest>,
) -> AppResult<(StatusCode, Json<workout_plan::Model>)> {
    let plan = state
        .workout_plans
        .create(NewWorkoutPlan {
            user_id: current_user.id,
            date: payload.date,
            comments: payload.comments,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

/// Replace a workout plan (full update)
#[utoipa::path(
    put,
    path = "/workout-plans/{id}",
    tag = "Workout Plans",
    params(("id" = i32, Path, description = "Workout plan id")),
    request_body = CreateWorkoutPlanRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout plan updated", body = workout_plan::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout plan not found")
    )
)]
pub async fn replace_workout_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateWorkoutPlanRequest>,
) -> AppResult<Json<workout_plan::Model>> {
    let patch = WorkoutPlanPatch {
        date: payload.date,
        comments: Some(payload.comments),
    };

    Ok(Json(state.workout_plans.update(id, patch).await?))
}

/// Update a workout plan (partial update)
#[utoipa::path(
    patch,
    path = "/workout-plans/{id}",
    tag = "Workout Plans",
    params(("id" = i32, Path, description = "Workout plan id")),
    request_body = PatchWorkoutPlanRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout plan updated", body = workout_plan::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout plan not found")
    )
)]
pub async fn patch_workout_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchWorkoutPlanRequest>,
) -> AppResult<Json<workout_plan::Model>> {
    let patch = WorkoutPlanPatch {
        date: payload.date,
        comments: payload.comments,
    };

    Ok(Json(state.workout_plans.update(id, patch).await?))
}

/// Delete a workout plan
#[utoipa::path(
    delete,
    path = "/workout-plans/{id}",
    tag = "Workout Plans",
    params(("id" = i32, Path, description = "Workout plan id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workout plan deleted", body = MessageResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workout plan not found")
    )
)]
pub async fn delete_workout_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.workout_plans.delete(id).await?;

    Ok(Json(MessageResponse::new("Workout plan deleted")))
}
