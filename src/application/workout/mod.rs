//! Workout catalog: cascade writes, hydrated reads, deletes.

mod create_workout;
mod delete_workout;
mod queries;

pub use create_workout::{CreateWorkoutHandler, CreateWorkoutResult};
pub use delete_workout::DeleteWorkoutHandler;
pub use queries::WorkoutQueries;
