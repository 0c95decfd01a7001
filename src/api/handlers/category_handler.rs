//! Exercise category handlers.

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
use crate::infra::repositories::entities::{category, exercise};
use crate::infra::repositories::CategoryPatch;
use crate::types::{MessageResponse, PageParams};

/// Category creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[schema(example = "Endurance")]
    pub name: String,
    /// Category description
    #[schema(example = "Training designed to increase stamina and overall fitness")]
    pub description: Option<String>,
}

/// Category partial update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[schema(example = "Endurance")]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .put(replace_category)
                .patch(patch_category)
                .delete(delete_category),
        )
        .route("/:id/exercises", get(list_category_exercises))
}

/// List categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    params(PageParams),
    responses(
        (status = 200, description = "List of categories", body = [category::Model])
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<category::Model>>> {
    let page = page.clamped(state.config.pagination_max_limit);
    Ok(Json(state.categories.list(page).await?))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = category::Model),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<category::Model>> {
    Ok(Json(state.categories.get(id).await?))
}

/// List the exercises of a category
#[utoipa::path(
    get,
    path = "/categories/{id}/exercises",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Exercises in the category", body = [exercise::Model]),
        (status = 404, description = "Category not found")
    )
)]
pub async fn list_category_exercises(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<exercise::Model>>> {
    // 404 for an unknown category; an empty exercise list is a valid result
    state.categories.get(id).await?;
    Ok(Json(state.exercises.list_by_category(id).await?))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = category::Model),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Category already exists")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<category::Model>)> {
    let category = state
        .categories
        .create(payload.name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Replace a category (full update)
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = category::Model),
        (status = 404, description = "Category not found")
    )
)]
pub async fn replace_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<Json<category::Model>> {
    let patch = CategoryPatch {
        name: Some(payload.name),
        description: payload.description,
    };

    Ok(Json(state.categories.update(id, patch).await?))
}

/// Update a category (partial update)
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    request_body = PatchCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = category::Model),
        (status = 404, description = "Category not found")
    )
)]
pub async fn patch_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchCategoryRequest>,
) -> AppResult<Json<category::Model>> {
    let patch = CategoryPatch {
        name: payload.name,
        description: payload.description,
    };

    Ok(Json(state.categories.update(id, patch).await?))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.categories.delete(id).await?;

    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
