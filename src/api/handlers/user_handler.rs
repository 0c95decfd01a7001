//! User management handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::types::{MessageResponse, PageParams};

/// User update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ann Updated")]
    pub name: Option<String>,
}

/// Public user routes (reads)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

/// User routes that require authentication (mutations)
pub fn user_mutation_routes() -> Router<AppState> {
    Router::new().route("/:id", patch(update_user).delete(delete_user))
}

/// List users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PageParams),
    responses(
        (status = 200, description = "List of users", body = [UserResponse])
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let page = page.clamped(state.config.pagination_max_limit);
    let users = state.user_service.list_users(page).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Update a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update_user(id, payload.name).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(id).await?;

    Ok(Json(MessageResponse::new("User deleted")))
}
