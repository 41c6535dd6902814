//! Routes for the contact form.

use axum::routing::post;
use axum::Router;

use super::handlers::{send_contact, ContactHandlers};

pub fn contact_routes(handlers: ContactHandlers) -> Router {
    Router::new()
        .route("/send", post(send_contact))
        .with_state(handlers)
}
