//! Server entry point: load config, connect, wire adapters, serve.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use fittrack_backend::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use fittrack_backend::adapters::email::SmtpMailer;
use fittrack_backend::adapters::http::{api_router, ApiDependencies};
use fittrack_backend::adapters::postgres::{
    build_pool, PostgresDashboardReader, PostgresGalleryRepository, PostgresHealthRepository,
    PostgresScheduleRepository, PostgresUserRepository, PostgresWorkoutRepository,
};
use fittrack_backend::adapters::storage::LocalImageStore;
use fittrack_backend::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.log_level)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = build_pool(&config.database).await?;
    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    tokio::fs::create_dir_all(config.storage.upload_path()).await?;

    let deps = ApiDependencies {
        server: config.server.clone(),
        storage: config.storage.clone(),
        contact_recipient: config.email.contact_recipient.clone(),
        tokens: Arc::new(JwtTokenService::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl(),
        )),
        hasher: Arc::new(Argon2PasswordHasher),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        workouts: Arc::new(PostgresWorkoutRepository::new(pool.clone())),
        schedules: Arc::new(PostgresScheduleRepository::new(pool.clone())),
        gallery: Arc::new(PostgresGalleryRepository::new(pool.clone())),
        health: Arc::new(PostgresHealthRepository::new(pool.clone())),
        dashboard: Arc::new(PostgresDashboardReader::new(pool.clone())),
        images: Arc::new(LocalImageStore::new(config.storage.upload_path())),
        mailer: Arc::new(SmtpMailer::new(&config.email)?),
    };
    let app = api_router(deps);

    let addr = config.server.socket_addr();
    info!(%addr, environment = ?config.server.environment, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
