//! HTTP handler for the contact form.
//!
//! Two messages go out per submission: a notification to the support
//! address and a confirmation back to the sender. The notification is
//! the one that matters; a failed confirmation is logged, not fatal.
//! Form fields are interpolated into HTML bodies, so they are escaped
//! first.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::domain::user::email_is_valid;
use crate::domain::DomainError;
use crate::ports::{Mailer, OutboundEmail};

use super::dto::{ContactRequest, ContactResponse};

#[derive(Clone)]
pub struct ContactHandlers {
    mailer: Arc<dyn Mailer>,
    recipient: String,
}

impl ContactHandlers {
    pub fn new(mailer: Arc<dyn Mailer>, recipient: String) -> Self {
        Self { mailer, recipient }
    }
}

/// POST /api/contact/send
pub async fn send_contact(
    State(handlers): State<ContactHandlers>,
    Json(req): Json<ContactRequest>,
) -> Response {
    if req.first_name.trim().is_empty()
        || req.last_name.trim().is_empty()
        || req.message.trim().is_empty()
    {
        return DomainError::validation("required", "Name and message are required")
            .into_response();
    }
    if !email_is_valid(&req.email) {
        return DomainError::validation("email", "Invalid email format").into_response();
    }

    let name = format!(
        "{} {}",
        escape_html(req.first_name.trim()),
        escape_html(req.last_name.trim())
    );
    let subject = match req.subject.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => format!("Contact form: {}", s),
        _ => "Contact form message".to_string(),
    };

    let notification = OutboundEmail {
        to: handlers.recipient.clone(),
        subject,
        html_body: format!(
            "<h2>New contact form message</h2>\
             <p><strong>From:</strong> {} &lt;{}&gt;</p>\
             <p>{}</p>",
            name,
            escape_html(&req.email),
            escape_html(&req.message).replace('\n', "<br>"),
        ),
    };
    if let Err(e) = handlers.mailer.send(&notification).await {
        return e.into_response();
    }

    let confirmation = OutboundEmail {
        to: req.email.clone(),
        subject: "We received your message".to_string(),
        html_body: format!(
            "<p>Hi {},</p>\
             <p>Thanks for getting in touch. We received your message and \
             will get back to you as soon as we can.</p>",
            escape_html(req.first_name.trim()),
        ),
    };
    if let Err(e) = handlers.mailer.send(&confirmation).await {
        warn!(error = %e, "contact confirmation email not sent");
    }

    Json(ContactResponse {
        message: "Message sent".to_string(),
    })
    .into_response()
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
