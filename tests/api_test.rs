//! Router-driven API tests.
//!
//! Build the real router with in-memory repositories behind the service
//! traits, then drive it with `tower::ServiceExt::oneshot`. The token
//! codec, authentication middleware, handlers and error mapping are all
//! the real thing; only the store is substituted.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{json, Value};
use tower::ServiceExt;

use fitness_tracker_api::api::{create_router, AppState};
use fitness_tracker_api::config::Config;
use fitness_tracker_api::domain::User;
use fitness_tracker_api::errors::{AppError, AppResult};
use fitness_tracker_api::infra::repositories::entities::{
    category, exercise, muscle_group, workout_exercise, workout_plan,
};
use fitness_tracker_api::infra::repositories::{
    CategoryPatch, CategoryRepository, ExercisePatch, ExerciseRepository, MuscleGroupPatch,
    MuscleGroupRepository, NewExercise, NewWorkout, NewWorkoutPlan, UserPatch, UserRepository,
    WorkoutPatch, WorkoutPlanPatch, WorkoutPlanRepository, WorkoutRepository,
};
use fitness_tracker_api::infra::Database;
use fitness_tracker_api::services::{Authenticator, Claims, TokenCodec, UserManager};
use fitness_tracker_api::types::PageParams;

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, page: PageParams) -> AppResult<Vec<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("User"));
        }
        let user = User::new(rows.len() as i32 + 1, name, email, password_hash);
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, patch: UserPatch) -> AppResult<Option<User>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(user) = rows.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            user.name = name;
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
struct InMemoryCategories {
    rows: Mutex<Vec<category::Model>>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list(&self, page: PageParams) -> AppResult<Vec<category::Model>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i32) -> AppResult<category::Model> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<category::Model> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|c| c.name == name) {
            return Err(AppError::conflict("Category"));
        }
        let model = category::Model {
            id: rows.len() as i32 + 1,
            name,
            description,
        };
        rows.push(model.clone());
        Ok(model)
    }

    async fn update(&self, id: i32, patch: CategoryPatch) -> AppResult<category::Model> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|c| c.id == id) else {
            return Err(AppError::NotFound);
        };
        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() < before {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

#[derive(Default)]
struct InMemoryPlans {
    rows: Mutex<Vec<workout_plan::Model>>,
}

#[async_trait]
impl WorkoutPlanRepository for InMemoryPlans {
    async fn list(&self, page: PageParams) -> AppResult<Vec<workout_plan::Model>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<workout_plan::Model>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i32) -> AppResult<workout_plan::Model> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create(&self, data: NewWorkoutPlan) -> AppResult<workout_plan::Model> {
        let mut rows = self.rows.lock().unwrap();
        let model = workout_plan::Model {
            id: rows.len() as i32 + 1,
            user_id: data.user_id,
            date: data.date.unwrap_or_else(|| chrono::Utc::now().date_naive()),
            comments: data.comments,
        };
        rows.push(model.clone());
        Ok(model)
    }

    async fn update(
        &self,
        id: i32,
        patch: WorkoutPlanPatch,
    ) -> AppResult<workout_plan::Model> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
            return Err(AppError::NotFound);
        };
        if let Some(date) = patch.date {
            row.date = date;
        }
        if let Some(comments) = patch.comments {
            row.comments = comments;
        }
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() < before {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

/// Muscle group repository that always returns an empty catalog.
struct EmptyMuscleGroups;

#[async_trait]
impl MuscleGroupRepository for EmptyMuscleGroups {
    async fn list(&self, _page: PageParams) -> AppResult<Vec<muscle_group::Model>> {
        Ok(vec![])
    }

    async fn get(&self, _id: i32) -> AppResult<muscle_group::Model> {
        Err(AppError::NotFound)
    }

    async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<muscle_group::Model> {
        Ok(muscle_group::Model {
            id: 1,
            name,
            description,
        })
    }

    async fn update(
        &self,
        _id: i32,
        _patch: MuscleGroupPatch,
    ) -> AppResult<muscle_group::Model> {
        Err(AppError::NotFound)
    }

    async fn delete(&self, _id: i32) -> AppResult<()> {
        Err(AppError::NotFound)
    }
}

/// Exercise repository that always returns an empty catalog.
struct EmptyExercises;

#[async_trait]
impl ExerciseRepository for EmptyExercises {
    async fn list(&self, _page: PageParams) -> AppResult<Vec<exercise::Model>> {
        Ok(vec![])
    }

    async fn list_by_category(&self, _category_id: i32) -> AppResult<Vec<exercise::Model>> {
        Ok(vec![])
    }

    async fn get(&self, _id: i32) -> AppResult<exercise::Model> {
        Err(AppError::NotFound)
    }

    async fn create(&self, data: NewExercise) -> AppResult<exercise::Model> {
        Ok(exercise::Model {
            id: 1,
            name: data.name,
            description: data.description,
            category_id: data.category_id,
            muscle_group_id: data.muscle_group_id,
        })
    }

    async fn update(&self, _id: i32, _patch: ExercisePatch) -> AppResult<exercise::Model> {
        Err(AppError::NotFound)
    }

    async fn delete(&self, _id: i32) -> AppResult<()> {
        Err(AppError::NotFound)
    }
}

/// Workout repository that always returns an empty log.
struct EmptyWorkouts;

#[async_trait]
impl WorkoutRepository for EmptyWorkouts {
    async fn list(&self, _page: PageParams) -> AppResult<Vec<workout_exercise::Model>> {
        Ok(vec![])
    }

    async fn get(&self, _id: i32) -> AppResult<workout_exercise::Model> {
        Err(AppError::NotFound)
    }

    async fn create(&self, _data: NewWorkout) -> AppResult<workout_exercise::Model> {
        Err(AppError::NotFound)
    }

    async fn update(
        &self,
        _id: i32,
        _patch: WorkoutPatch,
    ) -> AppResult<workout_exercise::Model> {
        Err(AppError::NotFound)
    }

    async fn delete(&self, _id: i32) -> AppResult<()> {
        Err(AppError::NotFound)
    }
}

// =============================================================================
// Test helpers
// =============================================================================

fn test_state() -> AppState {
    let config = Config::from_env();
    let token_codec = Arc::new(TokenCodec::from_config(&config));
    let users = Arc::new(InMemoryUsers::default());

    AppState {
        config,
        token_codec: token_codec.clone(),
        auth_service: Arc::new(Authenticator::new(users.clone(), token_codec)),
        user_service: Arc::new(UserManager::new(users)),
        categories: Arc::new(InMemoryCategories::default()),
        muscle_groups: Arc::new(EmptyMuscleGroups),
        exercises: Arc::new(EmptyExercises),
        workouts: Arc::new(EmptyWorkouts),
        workout_plans: Arc::new(InMemoryPlans::default()),
        database: Arc::new(Database::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        )),
    }
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, auth_header: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = auth_header {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Registration and login
// =============================================================================

#[tokio::test]
async fn register_returns_created_without_the_password() {
    let app = create_router(test_state());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({"name": "Ann", "email": "ann@example.com", "password": "Password@123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["email"], "ann@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    // Registering the same email again conflicts
    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({"name": "Ann", "email": "ann@example.com", "password": "Password@123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_rejects_an_invalid_email() {
    let app = create_router(test_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({"name": "Ann", "email": "not-an-email", "password": "Password@123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_reports_unknown_email_and_bad_password_distinctly() {
    let state = test_state();
    let app = create_router(state);

    app.clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({"name": "Ann", "email": "ann@example.com", "password": "Password@123"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({"email": "ghost@example.com", "password": "Password@123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({"email": "ann@example.com", "password": "WrongPassword1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_returns_a_decodable_token_pair() {
    let state = test_state();
    let codec = state.token_codec.clone();
    let app = create_router(state);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            None,
            json!({"name": "Ann", "email": "ann@example.com", "password": "Password@123"}),
        ))
        .await
        .unwrap();
    let registered = body_json(response).await;
    let user_id = registered["id"].as_i64().unwrap() as i32;

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({"email": "ann@example.com", "password": "Password@123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let access_token = body["access_token"].as_str().unwrap();
    let refresh_token = body["refresh_token"].as_str().unwrap();
    assert!(!access_token.is_empty());
    assert!(!refresh_token.is_empty());

    let access = codec.decode(access_token).unwrap();
    assert_eq!(access.user_id, user_id);
    assert!(!access.is_refresh());

    let refresh = codec.decode(refresh_token).unwrap();
    assert!(refresh.is_refresh());
}

// =============================================================================
// Authentication gate
// =============================================================================

#[tokio::test]
async fn protected_route_requires_a_valid_bearer_token() {
    let state = test_state();
    let config = state.config.clone();
    let codec = state.token_codec.clone();
    let app = create_router(state);

    // No Authorization header
    let response = app
        .clone()
        .oneshot(get_request("/muscle-groups", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Wrong scheme
    let response = app
        .clone()
        .oneshot(get_request(
            "/muscle-groups",
            Some("Token abcdef".to_string()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Bearer with no token value
    let response = app
        .clone()
        .oneshot(get_request("/muscle-groups", Some("Bearer ".to_string())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Expired token, correctly signed
    let expired_codec = TokenCodec::new(config.jwt_secret_bytes(), config.jwt_algorithm, -300);
    let expired = expired_codec.encode(Claims::access(1)).unwrap();
    let response = app
        .clone()
        .oneshot(get_request(
            "/muscle-groups",
            Some(format!("Bearer {}", expired)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Freshly issued valid token
    let token = codec.encode(Claims::access(1)).unwrap();
    let response = app
        .oneshot(get_request(
            "/muscle-groups",
            Some(format!("Bearer {}", token)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn public_routes_skip_the_gate() {
    let app = create_router(test_state());

    let response = app
        .clone()
        .oneshot(get_request("/categories", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/users", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn workout_plans_are_scoped_to_the_token_subject() {
    let state = test_state();
    let codec = state.token_codec.clone();
    let app = create_router(state);

    let ann = codec.encode(Claims::access(42)).unwrap();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/workout-plans",
            Some(&ann),
            json!({"comments": "Push day"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["user_id"], 42);

    // The owner sees the plan under /mine
    let response = app
        .clone()
        .oneshot(get_request(
            "/workout-plans/mine",
            Some(format!("Bearer {}", ann)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let plans = body_json(response).await;
    assert_eq!(plans.as_array().unwrap().len(), 1);

    // Another user sees nothing
    let bob = codec.encode(Claims::access(7)).unwrap();
    let response = app
        .oneshot(get_request(
            "/workout-plans/mine",
            Some(format!("Bearer {}", bob)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// =============================================================================
// Category CRUD
// =============================================================================

#[tokio::test]
async fn category_crud_round_trip() {
    let app = create_router(test_state());

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/categories",
            None,
            json!({"name": "Endurance", "description": "Stamina work"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Endurance");

    // Duplicate name conflicts
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/categories",
            None,
            json!({"name": "Endurance"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Read back
    let response = app
        .clone()
        .oneshot(get_request(&format!("/categories/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Endurance");

    // Partial update
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/categories/{}", id),
            None,
            json!({"description": "Long steady efforts"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["name"], "Endurance");
    assert_eq!(patched["description"], "Long steady efforts");

    // Delete, then the id is gone
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/categories/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/categories/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get_request(&format!("/categories/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
