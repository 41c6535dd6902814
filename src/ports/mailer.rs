//! Port for outbound email.

use async_trait::async_trait;

use crate::domain::DomainError;

/// One outbound message.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one email. Fails with `EMAIL_ERROR` on transport failure.
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError>;
}
