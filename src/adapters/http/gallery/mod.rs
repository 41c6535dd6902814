//! Progress-photo gallery endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::GalleryHandlers;
pub use routes::gallery_routes;
