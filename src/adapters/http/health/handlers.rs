//! HTTP handlers for health-data ingestion.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::health::IngestHandler;
use crate::ports::HealthRepository;

use super::dto::{DailyQuery, IngestRequest, IngestResponse};

#[derive(Clone)]
pub struct HealthHandlers {
    ingest: Arc<IngestHandler>,
    health: Arc<dyn HealthRepository>,
}

impl HealthHandlers {
    pub fn new(ingest: Arc<IngestHandler>, health: Arc<dyn HealthRepository>) -> Self {
        Self { ingest, health }
    }
}

/// POST /api/health/ingest
pub async fn ingest(
    State(handlers): State<HealthHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<IngestRequest>,
) -> Response {
    match handlers.ingest.handle(req.into_command(user.id)).await {
        Ok(result) => Json(IngestResponse {
            device_id: result.device_id,
            samples_inserted: result.samples_inserted,
            samples_dropped: result.samples_dropped,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/health/daily?date=
pub async fn daily(
    State(handlers): State<HealthHandlers>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<DailyQuery>,
) -> Response {
    match handlers.health.daily_for(user.id, query.date).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => e.into_response(),
    }
}
