//! Authentication adapters: JWT tokens and argon2id password hashing.

mod jwt;
mod password;

pub use jwt::JwtTokenService;
pub use password::Argon2PasswordHasher;
