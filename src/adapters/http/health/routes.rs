//! Routes for health-data ingestion.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{daily, ingest, HealthHandlers};

pub fn health_routes(handlers: HealthHandlers) -> Router {
    Router::new()
        .route("/ingest", post(ingest))
        .route("/daily", get(daily))
        .with_state(handlers)
}
