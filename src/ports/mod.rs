//! Ports - trait seams between the application core and its adapters.

mod auth;
mod dashboard_reader;
mod gallery_repository;
mod health_repository;
mod image_store;
mod mailer;
mod schedule_repository;
mod user_repository;
mod workout_repository;

pub use auth::{PasswordHasher, TokenService};
pub use dashboard_reader::DashboardReader;
pub use gallery_repository::GalleryRepository;
pub use health_repository::HealthRepository;
pub use image_store::ImageStore;
pub use mailer::{Mailer, OutboundEmail};
pub use schedule_repository::ScheduleRepository;
pub use user_repository::UserRepository;
pub use workout_repository::WorkoutRepository;
