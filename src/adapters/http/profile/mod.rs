//! Profile endpoints for the authenticated user.

mod dto;
mod handlers;
mod routes;

pub use handlers::ProfileHandlers;
pub use routes::profile_routes;
