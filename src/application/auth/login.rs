//! LoginHandler - verifies credentials and issues a bearer token.

use std::sync::Arc;

use crate::domain::user::User;
use crate::domain::DomainError;
use crate::ports::{PasswordHasher, TokenService, UserRepository};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// A successful login: token plus the profile the client renders.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        if cmd.email.trim().is_empty() || cmd.password.is_empty() {
            return Err(DomainError::validation(
                "required",
                "Email and password are required",
            ));
        }

        // Unknown email and wrong password produce the same response so
        // the endpoint cannot be used to probe which emails exist.
        let user = self
            .users
            .find_by_email(&cmd.email)
            .await?
            .ok_or_else(Self::invalid_credentials)?;

        if !self.hasher.verify(&cmd.password, &user.password_hash)? {
            return Err(Self::invalid_credentials());
        }

        let token = self.tokens.issue(user.id, &user.email)?;
        Ok(LoginResult { token, user })
    }

    fn invalid_credentials() -> DomainError {
        DomainError::unauthorized("Invalid email or password")
    }
}
