//! Routes for workout schedules.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    complete_schedule, create_schedule, delete_schedule, get_schedule, list_schedules,
    schedules_for_date, update_schedule, ScheduleHandlers,
};

pub fn schedule_routes(handlers: ScheduleHandlers) -> Router {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route("/date/:date", get(schedules_for_date))
        .route(
            "/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
        .route("/:id/complete", post(complete_schedule))
        .with_state(handlers)
}
