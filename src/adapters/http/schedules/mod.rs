//! Workout schedule endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::ScheduleHandlers;
pub use routes::schedule_routes;
