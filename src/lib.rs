//! FitTrack backend - REST API for the FitTrack fitness-tracking app.
//!
//! Hexagonal layout: `domain` holds the types and rules, `ports` the
//! trait seams, `adapters` the PostgreSQL/HTTP/storage/auth/email
//! implementations, and `application` the use-case handlers that
//! orchestrate between them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
