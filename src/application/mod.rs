//! Application layer: use-case handlers wired to ports.
//!
//! Handlers own the orchestration (validation, ordering, fan-out,
//! partial-failure policy) and depend only on the port traits. Simple
//! single-query CRUD stays in the HTTP handlers; anything with multiple
//! steps or a policy decision lives here.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod workout;

#[cfg(test)]
pub mod test_support;
