//! Error envelope shared by every endpoint.
//!
//! Clients branch on the stable `code` string. Infrastructure failures
//! (5xx) are logged server-side and returned with a generic message so
//! connection strings and SQL never leak into a response body.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{DomainError, ErrorCode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    fn from_error(err: &DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details: if err.details.is_empty() {
                None
            } else {
                Some(err.details.clone())
            },
        }
    }

    fn sanitized(code: ErrorCode) -> Self {
        let message = match code {
            ErrorCode::DatabaseError => "A database error occurred",
            ErrorCode::StorageError => "A storage error occurred",
            ErrorCode::EmailError => "Failed to send email",
            _ => "An unexpected error occurred",
        };
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = if status.is_server_error() {
            error!(code = %self.code, error = %self, "request failed");
            ErrorResponse::sanitized(self.code)
        } else {
            ErrorResponse::from_error(&self)
        };

        (status, Json(body)).into_response()
    }
}
