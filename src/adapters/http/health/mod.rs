//! Health-data ingestion endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::HealthHandlers;
pub use routes::health_routes;
