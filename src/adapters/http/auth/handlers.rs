//! HTTP handlers for registration and login.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::auth::{LoginCommand, LoginHandler, RegisterCommand, RegisterHandler};

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

#[derive(Clone)]
pub struct AuthHandlers {
    register: Arc<RegisterHandler>,
    login: Arc<LoginHandler>,
}

impl AuthHandlers {
    pub fn new(register: Arc<RegisterHandler>, login: Arc<LoginHandler>) -> Self {
        Self { register, login }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterCommand {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
        phone_number: req.phone_number,
        gender: req.gender,
    };

    match handlers.register.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(RegisterResponse {
                id: result.user_id,
                email: result.email,
                message: "Account created".to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/auth/login
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login.handle(cmd).await {
        Ok(result) => Json(LoginResponse {
            token: result.token,
            user: result.user.into(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
