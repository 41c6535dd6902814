//! Contact form endpoint.

mod dto;
mod handlers;
mod routes;

pub use handlers::ContactHandlers;
pub use routes::contact_routes;
