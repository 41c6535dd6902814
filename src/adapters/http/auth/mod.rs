//! Registration and login endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::UserResponse;
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
