//! Routes for the dashboard.

use axum::routing::get;
use axum::Router;

use super::handlers::{summary, DashboardHandlers};

pub fn dashboard_routes(handlers: DashboardHandlers) -> Router {
    Router::new()
        .route("/summary", get(summary))
        .with_state(handlers)
}
