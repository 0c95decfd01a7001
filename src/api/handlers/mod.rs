//! HTTP request handlers.

pub mod auth_handler;
pub mod category_handler;
pub mod exercise_handler;
pub mod muscle_group_handler;
pub mod user_handler;
pub mod workout_handler;
pub mod workout_plan_handler;

pub use auth_handler::auth_routes;
pub use category_handler::category_routes;
pub use exercise_handler::exercise_routes;
pub use muscle_group_handler::muscle_group_routes;
pub use user_handler::{user_mutation_routes, user_routes};
pub use workout_handler::workout_routes;
pub use workout_plan_handler::workout_plan_routes;
