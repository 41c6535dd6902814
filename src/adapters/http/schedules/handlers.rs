//! HTTP handlers for workout schedules.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;

use crate::adapters::http::middleware::RequireAuth;
use crate::domain::schedule::{ScheduleChanges, ScheduleFilter, STATUS_COMPLETED, STATUS_PENDING};
use crate::domain::DomainError;
use crate::ports::ScheduleRepository;

use super::dto::{
    CreateScheduleRequest, CreateScheduleResponse, ScheduleListQuery, UpdateScheduleRequest,
};

#[derive(Clone)]
pub struct ScheduleHandlers {
    schedules: Arc<dyn ScheduleRepository>,
}

impl ScheduleHandlers {
    pub fn new(schedules: Arc<dyn ScheduleRepository>) -> Self {
        Self { schedules }
    }
}

/// POST /api/schedules
pub async fn create_schedule(
    State(handlers): State<ScheduleHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateScheduleRequest>,
) -> Response {
    match handlers
        .schedules
        .create(&req.into_new_schedule(user.id))
        .await
    {
        Ok(id) => (StatusCode::CREATED, Json(CreateScheduleResponse { id })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/schedules
pub async fn list_schedules(
    State(handlers): State<ScheduleHandlers>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<ScheduleListQuery>,
) -> Response {
    let filter = ScheduleFilter {
        user_id: Some(user.id),
        start_date: query.start_date,
        end_date: query.end_date,
    };
    match handlers.schedules.list(&filter).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/schedules/date/:date
pub async fn schedules_for_date(
    State(handlers): State<ScheduleHandlers>,
    RequireAuth(user): RequireAuth,
    Path(date): Path<NaiveDate>,
) -> Response {
    match handlers.schedules.for_date(date, Some(user.id)).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/schedules/:id
pub async fn get_schedule(
    State(handlers): State<ScheduleHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Response {
    match handlers.schedules.find(id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => DomainError::not_found("Schedule", id).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /api/schedules/:id
pub async fn update_schedule(
    State(handlers): State<ScheduleHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
    Json(req): Json<UpdateScheduleRequest>,
) -> Response {
    if let Some(status) = &req.status {
        if status != STATUS_PENDING && status != STATUS_COMPLETED {
            return DomainError::validation("status", "Status must be pending or completed")
                .into_response();
        }
    }
    let changes = ScheduleChanges::from(req);
    if changes.is_empty() {
        return DomainError::validation("body", "No fields to update").into_response();
    }

    match handlers.schedules.update(id, &changes).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => DomainError::not_found("Schedule", id).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/schedules/:id/complete
pub async fn complete_schedule(
    State(handlers): State<ScheduleHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Response {
    match handlers.schedules.complete(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => DomainError::not_found("Schedule", id).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /api/schedules/:id
pub async fn delete_schedule(
    State(handlers): State<ScheduleHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Response {
    match handlers.schedules.delete(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => DomainError::not_found("Schedule", id).into_response(),
        Err(e) => e.into_response(),
    }
}
