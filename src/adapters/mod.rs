//! Adapters - concrete implementations of the ports.

pub mod auth;
pub mod email;
pub mod http;
pub mod postgres;
pub mod storage;
