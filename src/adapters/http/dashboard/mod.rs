//! Dashboard endpoints.

mod handlers;
mod routes;

pub use handlers::DashboardHandlers;
pub use routes::dashboard_routes;
