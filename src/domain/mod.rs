//! Domain types shared across adapters and application handlers.

mod errors;
pub mod gallery;
pub mod health;
pub mod schedule;
pub mod user;
pub mod workout;

pub use errors::{DomainError, ErrorCode};
