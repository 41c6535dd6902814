//! Outbound email adapters.

mod smtp_mailer;

pub use smtp_mailer::SmtpMailer;
