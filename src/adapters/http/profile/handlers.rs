//! HTTP handlers for the authenticated user's profile.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::adapters::http::auth::UserResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::user::{email_is_valid, BodyMetrics};
use crate::domain::DomainError;
use crate::ports::{ImageStore, UserRepository};

use super::dto::{
    MessageResponse, UpdateBodyMetricsRequest, UpdatePersonalDataRequest, UpdatePictureRequest,
    UpdatePictureResponse,
};

#[derive(Clone)]
pub struct ProfileHandlers {
    users: Arc<dyn UserRepository>,
    images: Arc<dyn ImageStore>,
}

impl ProfileHandlers {
    pub fn new(users: Arc<dyn UserRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { users, images }
    }
}

/// GET /api/profile
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.users.find_by_id(user.id).await {
        Ok(Some(profile)) => Json(UserResponse::from(profile)).into_response(),
        Ok(None) => DomainError::not_found("User", user.id).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /api/profile
pub async fn update_body_metrics(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdateBodyMetricsRequest>,
) -> Response {
    let metrics = BodyMetrics {
        height: req.height,
        weight: req.weight,
        age: req.age,
    };
    if let Err(e) = metrics.validate() {
        return e.into_response();
    }

    match handlers.users.update_body_metrics(user.id, metrics).await {
        Ok(()) => Json(MessageResponse::new("Body metrics updated")).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PATCH /api/profile/personal-data
pub async fn update_personal_data(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdatePersonalDataRequest>,
) -> Response {
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return DomainError::validation("name", "First and last name are required")
            .into_response();
    }
    if !email_is_valid(&req.email) {
        return DomainError::validation("email", "Invalid email format").into_response();
    }

    match handlers.users.email_taken_by_other(&req.email, user.id).await {
        Ok(true) => {
            return DomainError::conflict("Email already registered").into_response();
        }
        Ok(false) => {}
        Err(e) => return e.into_response(),
    }

    let result = handlers
        .users
        .update_personal_data(
            user.id,
            &req.first_name,
            &req.last_name,
            &req.email,
            req.phone_number.as_deref(),
        )
        .await;
    match result {
        Ok(()) => Json(MessageResponse::new("Personal data updated")).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/profile/upload-picture
pub async fn update_picture(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdatePictureRequest>,
) -> Response {
    let filename = match handlers.images.save_data_uri(&req.image).await {
        Ok(f) => f,
        Err(e) => return e.into_response(),
    };

    match handlers.users.set_profile_picture(user.id, &filename).await {
        Ok(previous) => {
            // The row now points at the new file; the old one is only
            // disk waste if removal fails.
            if let Some(old) = previous {
                if let Err(e) = handlers.images.remove(&old).await {
                    warn!(user_id = user.id, error = %e, "old profile picture not removed");
                }
            }
            Json(UpdatePictureResponse {
                profile_picture: filename,
            })
            .into_response()
        }
        Err(e) => e.into_response(),
    }
}
