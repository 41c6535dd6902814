//! HTTP handlers for the progress-photo gallery.
//!
//! The listing is grouped by the day the photo was taken, newest day
//! first, with stored filenames mapped to their public URLs.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use tracing::warn;

use crate::adapters::http::middleware::RequireAuth;
use crate::config::StorageConfig;
use crate::domain::gallery::{group_by_day, next_reminder};
use crate::domain::DomainError;
use crate::ports::{GalleryRepository, ImageStore};

use super::dto::{GalleryResponse, UploadPhotoRequest, UploadPhotoResponse};

#[derive(Clone)]
pub struct GalleryHandlers {
    gallery: Arc<dyn GalleryRepository>,
    images: Arc<dyn ImageStore>,
    storage: StorageConfig,
}

impl GalleryHandlers {
    pub fn new(
        gallery: Arc<dyn GalleryRepository>,
        images: Arc<dyn ImageStore>,
        storage: StorageConfig,
    ) -> Self {
        Self {
            gallery,
            images,
            storage,
        }
    }
}

/// GET /api/gallery
pub async fn list_gallery(
    State(handlers): State<GalleryHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.gallery.list(Some(user.id)).await {
        Ok(photos) => {
            let groups = group_by_day(&photos, |name| handlers.storage.public_url(name));
            Json(GalleryResponse {
                next_photo_reminder: next_reminder(&photos),
                groups,
            })
            .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// POST /api/gallery
pub async fn upload_photo(
    State(handlers): State<GalleryHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UploadPhotoRequest>,
) -> Response {
    let filename = match handlers.images.save_data_uri(&req.photo_base64).await {
        Ok(f) => f,
        Err(e) => return e.into_response(),
    };
    let taken_at = req.taken_at.unwrap_or_else(|| Local::now().date_naive());

    match handlers
        .gallery
        .insert(Some(user.id), &filename, taken_at)
        .await
    {
        Ok(id) => (
            StatusCode::CREATED,
            Json(UploadPhotoResponse {
                id,
                url: handlers.storage.public_url(&filename),
            }),
        )
            .into_response(),
        Err(e) => {
            // The row never landed; don't leave the file behind.
            if let Err(cleanup) = handlers.images.remove(&filename).await {
                warn!(error = %cleanup, "orphaned gallery upload not removed");
            }
            e.into_response()
        }
    }
}

/// DELETE /api/gallery/:id
pub async fn delete_photo(
    State(handlers): State<GalleryHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Response {
    let filename = match handlers.gallery.photo_name(id).await {
        Ok(Some(name)) => name,
        Ok(None) => return DomainError::not_found("Photo", id).into_response(),
        Err(e) => return e.into_response(),
    };

    match handlers.gallery.delete(id).await {
        Ok(true) => {
            if let Err(e) = handlers.images.remove(&filename).await {
                warn!(photo_id = id, error = %e, "photo file not removed");
            }
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => DomainError::not_found("Photo", id).into_response(),
        Err(e) => e.into_response(),
    }
}
