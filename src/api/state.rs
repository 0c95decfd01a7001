//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! repositories. Everything here is stateless or read-only after
//! startup, so cloning per request is cheap and safe.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::repositories::{
    CategoryRepository, CategoryStore, ExerciseRepository, ExerciseStore, MuscleGroupRepository,
    MuscleGroupStore, UserStore, WorkoutPlanRepository, WorkoutPlanStore, WorkoutRepository,
    WorkoutStore,
};
use crate::infra::Database;
use crate::services::{AuthService, Authenticator, TokenCodec, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Immutable runtime configuration
    pub config: Config,
    /// Token codec shared by the auth service and the middleware
    pub token_codec: Arc<TokenCodec>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Category repository
    pub categories: Arc<dyn CategoryRepository>,
    /// Muscle group repository
    pub muscle_groups: Arc<dyn MuscleGroupRepository>,
    /// Exercise repository
    pub exercises: Arc<dyn ExerciseRepository>,
    /// Workout repository
    pub workouts: Arc<dyn WorkoutRepository>,
    /// Workout plan repository
    pub workout_plans: Arc<dyn WorkoutPlanRepository>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let db = database.get_connection();

        let token_codec = Arc::new(TokenCodec::from_config(&config));
        let users = Arc::new(UserStore::new(db.clone()));
        let auth_service = Arc::new(Authenticator::new(users.clone(), token_codec.clone()));
        let user_service = Arc::new(UserManager::new(users));

        Self {
            config,
            token_codec,
            auth_service,
            user_service,
            categories: Arc::new(CategoryStore::new(db.clone())),
            muscle_groups: Arc::new(MuscleGroupStore::new(db.clone())),
            exercises: Arc::new(ExerciseStore::new(db.clone())),
            workouts: Arc::new(WorkoutStore::new(db.clone())),
            workout_plans: Arc::new(WorkoutPlanStore::new(db)),
            database,
        }
    }
}
