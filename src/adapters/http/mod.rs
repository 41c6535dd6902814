//! HTTP adapters - the REST API surface.
//!
//! Each resource gets its own module with dto/handlers/routes; this
//! module assembles them into one router, mounts the upload directory
//! as static files, and applies the shared middleware stack.

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod gallery;
pub mod health;
pub mod middleware;
pub mod profile;
pub mod schedules;
pub mod workouts;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::auth::{LoginHandler, RegisterHandler};
use crate::application::dashboard::SummaryHandler;
use crate::application::health::IngestHandler;
use crate::application::workout::{CreateWorkoutHandler, DeleteWorkoutHandler, WorkoutQueries};
use crate::config::{ServerConfig, StorageConfig};
use crate::ports::{
    DashboardReader, GalleryRepository, HealthRepository, ImageStore, Mailer, PasswordHasher,
    ScheduleRepository, TokenService, UserRepository, WorkoutRepository,
};

pub use error::ErrorResponse;

/// Everything the router needs, wired once at startup.
pub struct ApiDependencies {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub contact_recipient: String,
    pub tokens: Arc<dyn TokenService>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub users: Arc<dyn UserRepository>,
    pub workouts: Arc<dyn WorkoutRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub gallery: Arc<dyn GalleryRepository>,
    pub health: Arc<dyn HealthRepository>,
    pub dashboard: Arc<dyn DashboardReader>,
    pub images: Arc<dyn ImageStore>,
    pub mailer: Arc<dyn Mailer>,
}

pub fn api_router(deps: ApiDependencies) -> Router {
    let auth_handlers = auth::AuthHandlers::new(
        Arc::new(RegisterHandler::new(deps.users.clone(), deps.hasher.clone())),
        Arc::new(LoginHandler::new(
            deps.users.clone(),
            deps.hasher.clone(),
            deps.tokens.clone(),
        )),
    );
    let profile_handlers =
        profile::ProfileHandlers::new(deps.users.clone(), deps.images.clone());
    let workout_handlers = workouts::WorkoutHandlers::new(
        Arc::new(CreateWorkoutHandler::new(
            deps.workouts.clone(),
            deps.images.clone(),
        )),
        Arc::new(WorkoutQueries::new(deps.workouts.clone())),
        Arc::new(DeleteWorkoutHandler::new(
            deps.workouts.clone(),
            deps.images.clone(),
        )),
    );
    let schedule_handlers = schedules::ScheduleHandlers::new(deps.schedules.clone());
    let gallery_handlers = gallery::GalleryHandlers::new(
        deps.gallery.clone(),
        deps.images.clone(),
        deps.storage.clone(),
    );
    let health_handlers = health::HealthHandlers::new(
        Arc::new(IngestHandler::new(deps.health.clone())),
        deps.health.clone(),
    );
    let dashboard_handlers =
        dashboard::DashboardHandlers::new(Arc::new(SummaryHandler::new(deps.dashboard.clone())));
    let contact_handlers =
        contact::ContactHandlers::new(deps.mailer.clone(), deps.contact_recipient.clone());

    Router::new()
        .nest("/api/auth", auth::auth_routes(auth_handlers))
        .nest("/api/profile", profile::profile_routes(profile_handlers))
        .nest("/api/workouts", workouts::workout_routes(workout_handlers))
        .nest(
            "/api/schedules",
            schedules::schedule_routes(schedule_handlers),
        )
        .nest("/api/gallery", gallery::gallery_routes(gallery_handlers))
        .nest("/api/health", health::health_routes(health_handlers))
        .nest(
            "/api/dashboard",
            dashboard::dashboard_routes(dashboard_handlers),
        )
        .nest("/api/contact", contact::contact_routes(contact_handlers))
        .route("/healthz", get(health_check))
        .nest_service(
            &deps.storage.public_prefix,
            ServeDir::new(deps.storage.upload_path()),
        )
        .layer(axum::middleware::from_fn_with_state(
            deps.tokens.clone(),
            middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(Duration::from_secs(
            deps.server.request_timeout_secs,
        )))
        .layer(cors_layer(&deps.server))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
