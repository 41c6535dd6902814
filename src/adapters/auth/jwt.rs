//! JWT implementation of TokenService.
//!
//! HS256 tokens carrying the user id and email, expiring after the
//! configured TTL (7 days by default).

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::user::AuthenticatedUser;
use crate::domain::{DomainError, ErrorCode};
use crate::ports::TokenService;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id.
    sub: i64,
    email: String,
    /// Expiry as unix seconds.
    exp: u64,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    fn now_unix() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before unix epoch")
            .as_secs()
    }
}

#[async_trait]
impl TokenService for JwtTokenService {
    fn issue(&self, user_id: i64, email: &str) -> Result<String, DomainError> {
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            exp: Self::now_unix() + self.ttl.as_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to sign token: {}", e))
        })
    }

    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| DomainError::unauthorized("Invalid or expired token"))?;

        Ok(AuthenticatedUser {
            id: data.claims.sub,
            email: data.claims.email,
        })
    }
}
