//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::user::{BodyMetrics, NewUser, User};
use crate::domain::DomainError;

/// User table access.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns the generated id.
    ///
    /// A duplicate email must surface as `ErrorCode::Conflict`.
    async fn create(&self, user: &NewUser) -> Result<i64, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Updates height/weight/age. Errors with NotFound when the row is
    /// missing.
    async fn update_body_metrics(&self, id: i64, metrics: BodyMetrics)
        -> Result<(), DomainError>;

    /// Whether `email` belongs to a user other than `id`.
    async fn email_taken_by_other(&self, email: &str, id: i64) -> Result<bool, DomainError>;

    /// Updates name/email/phone. Errors with NotFound when the row is
    /// missing.
    async fn update_personal_data(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Replaces the profile picture reference and returns the previous
    /// filename, if any, so the caller can remove the old file.
    async fn set_profile_picture(
        &self,
        id: i64,
        filename: &str,
    ) -> Result<Option<String>, DomainError>;
}
