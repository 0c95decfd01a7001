//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, category_routes, exercise_routes, muscle_group_routes, user_mutation_routes,
    user_routes, workout_plan_routes, workout_routes,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured.
///
/// Protection policy: `/auth`, `/categories` and `/exercises` are public,
/// as are user reads; `/muscle-groups`, `/workouts`, `/workout-plans` and
/// user mutations require a bearer token.
pub fn create_router(state: AppState) -> Router {
    let authenticated = middleware::from_fn_with_state(state.clone(), auth_middleware);

    Router::new()
        // Service info and health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication routes
        .nest("/auth", auth_routes())
        // Public catalog routes
        .nest("/categories", category_routes())
        .nest("/exercises", exercise_routes())
        // User routes: reads are public, mutations require authentication
        .nest(
            "/users",
            user_routes().merge(user_mutation_routes().route_layer(authenticated.clone())),
        )
        // Protected routes
        .nest(
            "/muscle-groups",
            muscle_group_routes().route_layer(authenticated.clone()),
        )
        .nest("/workouts", workout_routes().route_layer(authenticated.clone()))
        .nest(
            "/workout-plans",
            workout_plan_routes().route_layer(authenticated),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Service banner returned by the root endpoint
#[derive(Serialize)]
struct ServiceInfo {
    title: &'static str,
    version: &'static str,
}

/// Root endpoint
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        title: "Fitness Workout Tracker",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => ServiceStatus {
            status: "unhealthy",
            error: Some(e.to_string()),
        },
    };

    let healthy = db_status.status == "healthy";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        database: db_status,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
