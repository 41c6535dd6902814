//! HTTP handlers for the workout catalog.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::workout::{CreateWorkoutHandler, DeleteWorkoutHandler, WorkoutQueries};

use super::dto::{CreateWorkoutRequest, CreateWorkoutResponse};

#[derive(Clone)]
pub struct WorkoutHandlers {
    create: Arc<CreateWorkoutHandler>,
    queries: Arc<WorkoutQueries>,
    delete: Arc<DeleteWorkoutHandler>,
}

impl WorkoutHandlers {
    pub fn new(
        create: Arc<CreateWorkoutHandler>,
        queries: Arc<WorkoutQueries>,
        delete: Arc<DeleteWorkoutHandler>,
    ) -> Self {
        Self {
            create,
            queries,
            delete,
        }
    }
}

/// POST /api/workouts
pub async fn create_workout(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(_user): RequireAuth,
    Json(req): Json<CreateWorkoutRequest>,
) -> Response {
    match handlers.create.handle(req.into()).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(CreateWorkoutResponse {
                id: result.workout_id,
                skipped_branches: result.skipped_branches,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/workouts
pub async fn list_workouts(State(handlers): State<WorkoutHandlers>) -> Response {
    match handlers.queries.list().await {
        Ok(workouts) => Json(workouts).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/workouts/:id
pub async fn get_workout(
    State(handlers): State<WorkoutHandlers>,
    Path(id): Path<i64>,
) -> Response {
    match handlers.queries.get(id).await {
        Ok(workout) => Json(workout).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/workouts/exercise/:id
pub async fn get_exercise(
    State(handlers): State<WorkoutHandlers>,
    Path(id): Path<i64>,
) -> Response {
    match handlers.queries.get_exercise(id).await {
        Ok(exercise) => Json(exercise).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /api/workouts/:id
pub async fn delete_workout(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Response {
    match handlers.delete.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
