//! HTTP handler for the dashboard summary.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::dashboard::SummaryHandler;

#[derive(Clone)]
pub struct DashboardHandlers {
    summary: Arc<SummaryHandler>,
}

impl DashboardHandlers {
    pub fn new(summary: Arc<SummaryHandler>) -> Self {
        Self { summary }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryQuery {
    /// Defaults to today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// GET /api/dashboard/summary
pub async fn summary(
    State(handlers): State<DashboardHandlers>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());
    match handlers.summary.handle(user.id, date).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => e.into_response(),
    }
}
