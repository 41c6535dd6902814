//! Routes for profile endpoints.

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{
    get_profile, update_body_metrics, update_personal_data, update_picture, ProfileHandlers,
};

pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", get(get_profile).put(update_body_metrics))
        .route("/personal-data", patch(update_personal_data))
        .route("/upload-picture", post(update_picture))
        .with_state(handlers)
}
