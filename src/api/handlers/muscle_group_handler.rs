//! Muscle group handlers. All routes sit behind the authentication gate.

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
use crate::infra::repositories::entities::muscle_group;
use crate::infra::repositories::MuscleGroupPatch;
use crate::types::{MessageResponse, PageParams};

/// Muscle group creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMuscleGroupRequest {
    /// Muscle group name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[schema(example = "Chest")]
    pub name: String,
    /// Muscle group description
    #[schema(example = "Exercises that target the pectoral muscles")]
    pub description: Option<String>,
}

/// Muscle group partial update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchMuscleGroupRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[schema(example = "Chest")]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Create muscle group routes
pub fn muscle_group_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_muscle_groups).post(create_muscle_group))
        .route(
            "/:id",
            get(get_muscle_group)
                .put(replace_muscle_group)
                .patch(patch_muscle_group)
                .delete(delete_muscle_group),
        )
}

/// List muscle groups
#[utoipa::path(
    get,
    path = "/muscle-groups",
    tag = "Muscle Groups",
    params(PageParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of muscle groups", body = [muscle_group::Model]),
        (status = 401, description = "Authentication required")
    )
)]
pub async fn list_muscle_groups(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<muscle_group::Model>>> {
    let page = page.clamped(state.config.pagination_max_limit);
    Ok(Json(state.muscle_groups.list(page).await?))
}

/// Get a muscle group by id
#[utoipa::path(
    get,
    path = "/muscle-groups/{id}",
    tag = "Muscle Groups",
    params(("id" = i32, Path, description = "Muscle group id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Muscle group found", body = muscle_group::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Muscle group not found")
    )
)]
pub async fn get_muscle_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<muscle_group::Model>> {
    Ok(Json(state.muscle_groups.get(id).await?))
}

/// Create a new muscle group
#[utoipa::path(
    post,
    path = "/muscle-groups",
    tag = "Muscle Groups",
    request_body = CreateMuscleGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Muscle group created", body = muscle_group::Model),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "Muscle group already exists")
    )
)]
pub async fn create_muscle_group(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMuscleGroupRequest>,
) -> AppResult<(StatusCode, Json<muscle_group::Model>)> {
    let muscle_group = state
        .muscle_groups
        .create(payload.name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(muscle_group)))
}

/// Replace a muscle group (full update)
#[utoipa::path(
    put,
    path = "/muscle-groups/{id}",
    tag = "Muscle Groups",
    params(("id" = i32, Path, description = "Muscle group id")),
    request_body = CreateMuscleGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Muscle group updated", body = muscle_group::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Muscle group not found")
    )
)]
pub async fn replace_muscle_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateMuscleGroupRequest>,
) -> AppResult<Json<muscle_group::Model>> {
    let patch = MuscleGroupPatch {
        name: Some(payload.name),
        description: payload.description,
    };

    Ok(Json(state.muscle_groups.update(id, patch).await?))
}

/// Update a muscle group (partial update)
#[utoipa::path(
    patch,
    path = "/muscle-groups/{id}",
    tag = "Muscle Groups",
    params(("id" = i32, Path, description = "Muscle group id")),
    request_body = PatchMuscleGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Muscle group updated", body = muscle_group::Model),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Muscle group not found")
    )
)]
pub async fn patch_muscle_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchMuscleGroupRequest>,
) -> AppResult<Json<muscle_group::Model>> {
    let patch = MuscleGroupPatch {
        name: payload.name,
        description: payload.description,
    };

    Ok(Json(state.muscle_groups.update(id, patch).await?))
}

/// Delete a muscle group
#[utoipa::path(
    delete,
    path = "/muscle-groups/{id}",
    tag = "Muscle Groups",
    params(("id" = i32, Path, description = "Muscle group id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Muscle group deleted", body = MessageResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Muscle group not found")
    )
)]
pub async fn delete_muscle_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.muscle_groups.delete(id).await?;

    Ok(Json(MessageResponse::new("Muscle group deleted")))
}
