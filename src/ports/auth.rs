//! Ports for token issuing/validation and password hashing.

use async_trait::async_trait;

use crate::domain::user::AuthenticatedUser;
use crate::domain::DomainError;

/// Issues and validates bearer tokens.
///
/// The middleware depends on this trait, not on any JWT library, so a
/// mock can stand in for tests.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Issues a signed, time-limited token for a user.
    fn issue(&self, user_id: i64, email: &str) -> Result<String, DomainError>;

    /// Validates a token and returns the embedded identity. Fails with
    /// `UNAUTHORIZED` on an invalid or expired token.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, DomainError>;
}

/// One-way password hashing. Plaintext is never stored or compared.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verifies a plaintext candidate against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
