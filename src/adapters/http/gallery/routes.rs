//! Routes for the progress-photo gallery.

use axum::routing::{delete, get};
use axum::Router;

use super::handlers::{delete_photo, list_gallery, upload_photo, GalleryHandlers};

pub fn gallery_routes(handlers: GalleryHandlers) -> Router {
    Router::new()
        .route("/", get(list_gallery).post(upload_photo))
        .route("/:id", delete(delete_photo))
        .with_state(handlers)
}
