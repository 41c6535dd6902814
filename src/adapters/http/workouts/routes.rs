//! Routes for the workout catalog.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_workout, delete_workout, get_exercise, get_workout, list_workouts, WorkoutHandlers,
};

pub fn workout_routes(handlers: WorkoutHandlers) -> Router {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:id", get(get_workout).delete(delete_workout))
        .route("/exercise/:id", get(get_exercise))
        .with_state(handlers)
}
