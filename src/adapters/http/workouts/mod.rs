//! Workout catalog endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::WorkoutHandlers;
pub use routes::workout_routes;
