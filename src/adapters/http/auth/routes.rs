//! Routes for registration and login.

use axum::routing::post;
use axum::Router;

use super::handlers::{login, register, AuthHandlers};

pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(handlers)
}
