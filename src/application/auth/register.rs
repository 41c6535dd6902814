//! RegisterHandler - creates a new user account.

use std::sync::Arc;

use crate::domain::user::{email_is_valid, NewUser};
use crate::domain::DomainError;
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a user.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user_id: i64,
    pub email: String,
}

pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<RegisterResult, DomainError> {
        if cmd.first_name.trim().is_empty()
            || cmd.last_name.trim().is_empty()
            || cmd.email.trim().is_empty()
            || cmd.password.is_empty()
            || cmd.confirm_password.is_empty()
        {
            return Err(DomainError::validation(
                "required",
                "First name, last name, email, and password are required",
            ));
        }
        if !email_is_valid(&cmd.email) {
            return Err(DomainError::validation("email", "Invalid email format"));
        }
        if cmd.password != cmd.confirm_password {
            return Err(DomainError::validation(
                "confirm_password",
                "Passwords do not match",
            ));
        }
        if cmd.password.len() < 6 {
            return Err(DomainError::validation(
                "password",
                "Password must be at least 6 characters",
            ));
        }

        // The unique index is the authority on duplicates; the repository
        // maps its violation to Conflict.
        let password_hash = self.hasher.hash(&cmd.password)?;

        let user_id = self
            .users
            .create(&NewUser {
                first_name: cmd.first_name,
                last_name: cmd.last_name,
                email: cmd.email.clone(),
                password_hash,
                phone_number: cmd.phone_number,
                gender: cmd.gender,
            })
            .await?;

        Ok(RegisterResult {
            user_id,
            email: cmd.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockPasswordHasher, MockUserRepository};
    use crate::domain::ErrorCode;

    fn command() -> RegisterCommand {
        RegisterCommand {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
            phone_number: None,
            gender: None,
        }
    }

    fn handler(users: Arc<MockUserRepository>) -> RegisterHandler {
        RegisterHandler::new(users, Arc::new(MockPasswordHasher))
    }

    #[tokio::test]
    async fn register_persists_hashed_password() {
        let users = Arc::new(MockUserRepository::new());
        let result = handler(users.clone()).handle(command()).await.unwrap();

        assert_eq!(result.user_id, 1);
        let stored = users.created();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email, "ada@example.com");
        // Plaintext never reaches the repository.
        assert_ne!(stored[0].password_hash, "secret123");
    }

    #[tokio::test]
    async fn missing_fields_rejected() {
        let users = Arc::new(MockUserRepository::new());
        let cmd = RegisterCommand {
            first_name: " ".into(),
            ..command()
        };
        let err = handler(users).handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn password_mismatch_rejected() {
        let users = Arc::new(MockUserRepository::new());
        let cmd = RegisterCommand {
            confirm_password: "different".into(),
            ..command()
        };
        let err = handler(users).handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn short_password_rejected() {
        let users = Arc::new(MockUserRepository::new());
        let cmd = RegisterCommand {
            password: "abc".into(),
            confirm_password: "abc".into(),
            ..command()
        };
        let err = handler(users).handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict_and_first_user_untouched() {
        let users = Arc::new(MockUserRepository::new());
        let h = handler(users.clone());

        h.handle(command()).await.unwrap();
        let err = h.handle(command()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(users.created().len(), 1);
    }
}
