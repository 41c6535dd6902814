//! SMTP implementation of Mailer using lettre's async transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::EmailConfig;
use crate::domain::{DomainError, ErrorCode};
use crate::ports::{Mailer, OutboundEmail};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_header: String,
}

impl SmtpMailer {
    /// Builds a STARTTLS transport from configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, DomainError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::EmailError,
                    format!("Failed to build SMTP transport: {}", e),
                )
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_header: config.from_header(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        let message = Message::builder()
            .from(self.from_header.parse().map_err(|e| {
                DomainError::new(ErrorCode::EmailError, format!("Invalid from address: {}", e))
            })?)
            .to(email.to.parse().map_err(|e| {
                DomainError::new(ErrorCode::EmailError, format!("Invalid recipient: {}", e))
            })?)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| {
                DomainError::new(ErrorCode::EmailError, format!("Failed to build email: {}", e))
            })?;

        self.transport.send(message).await.map_err(|e| {
            DomainError::new(ErrorCode::EmailError, format!("Failed to send email: {}", e))
        })?;

        Ok(())
    }
}
