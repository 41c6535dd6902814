//! Bearer-token middleware and the `RequireAuth` extractor.
//!
//! The middleware validates the `Authorization: Bearer <token>` header
//! through the `TokenService` port and injects `AuthenticatedUser` into
//! request extensions. A missing header passes through untouched so
//! public routes share the same stack; handlers that need an identity
//! take `RequireAuth` and get a 401 when none was injected.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::user::AuthenticatedUser;
use crate::domain::DomainError;
use crate::ports::TokenService;

pub type AuthState = Arc<dyn TokenService>;

pub async fn auth_middleware(
    State(tokens): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match tokens.validate(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => e.into_response(),
        },
        None => next.run(request).await,
    }
}

/// Extractor for handlers that require an authenticated user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(|| {
                DomainError::unauthorized("Authentication required").into_response()
            })
    }
}
