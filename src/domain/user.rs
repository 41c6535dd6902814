//! User identity and profile types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted user row. The password hash never leaves this layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<i32>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
}

/// The identity a verified bearer token resolves to.
///
/// Lives only in request extensions for the duration of one request;
/// no session state is retained server-side.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
}

/// Body metrics carried on the profile update path.
#[derive(Debug, Clone, Copy)]
pub struct BodyMetrics {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<i32>,
}

impl BodyMetrics {
    /// Range checks matching the profile update rules.
    pub fn validate(&self) -> Result<(), super::DomainError> {
        if let Some(h) = self.height {
            if !(50.0..=300.0).contains(&h) {
                return Err(super::DomainError::validation(
                    "height",
                    "Height must be between 50 and 300 cm",
                ));
            }
        }
        if let Some(w) = self.weight {
            if !(20.0..=500.0).contains(&w) {
                return Err(super::DomainError::validation(
                    "weight",
                    "Weight must be between 20 and 500 kg",
                ));
            }
        }
        if let Some(a) = self.age {
            if !(1..=150).contains(&a) {
                return Err(super::DomainError::validation(
                    "age",
                    "Age must be between 1 and 150",
                ));
            }
        }
        Ok(())
    }
}

/// Minimal shape email syntax check: something@something.tld, no whitespace.
pub fn email_is_valid(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails_accepted() {
        assert!(email_is_valid("a@b.com"));
        assert!(email_is_valid("first.last@sub.domain.org"));
    }

    #[test]
    fn invalid_emails_rejected() {
        assert!(!email_is_valid("no-at-sign"));
        assert!(!email_is_valid("two@@signs.com"));
        assert!(!email_is_valid("@nodomain.com"));
        assert!(!email_is_valid("user@nodot"));
        assert!(!email_is_valid("user @space.com"));
    }

    #[test]
    fn body_metrics_in_range() {
        let m = BodyMetrics {
            height: Some(180.0),
            weight: Some(75.0),
            age: Some(30),
        };
        assert!(m.validate().is_ok());
    }

    #[test]
    fn body_metrics_out_of_range_rejected() {
        let too_tall = BodyMetrics {
            height: Some(400.0),
            weight: None,
            age: None,
        };
        assert!(too_tall.validate().is_err());

        let too_old = BodyMetrics {
            height: None,
            weight: None,
            age: Some(200),
        };
        assert!(too_old.validate().is_err());
    }

    #[test]
    fn absent_metrics_pass_validation() {
        let none = BodyMetrics {
            height: None,
            weight: None,
            age: None,
        };
        assert!(none.validate().is_ok());
    }
}
