use axum::{extract::FromRef, middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{HttpMessageRelay, HttpSpeechSynthesizer, PgReadingRepository, PgUserRepository};
use application::{
    DeliveryConfig, DeliveryScheduler, DeliveryService, ReadingService, SchedulerConfig,
    UserService,
};
use auth::SessionAuth;
use config::ServerConfig;
use lectio::ReadingCatalog;

/// Type aliases for application services with concrete repository implementations
pub type AppUserService = UserService<PgUserRepository>;
pub type AppReadingService = ReadingService<PgReadingRepository>;
pub type AppDeliveryService = DeliveryService<PgUserRepository, PgReadingRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: Arc<AppUserService>,
    pub reading_service: Arc<AppReadingService>,
    pub delivery_service: Arc<AppDeliveryService>,
    pub auth: Arc<SessionAuth>,
    pub catalog: ReadingCatalog,
}

// Allow extracting PgPool directly from AppState
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.pool.clone()
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Lectio API is running - daily readings on schedule".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lectio_server=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("📖 Lectio API initializing...");

    let config = ServerConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("✅ Database migrations completed");

    // Wire adapters and application services
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let reading_repo = Arc::new(PgReadingRepository::new(pool.clone()));
    let speech = Arc::new(HttpSpeechSynthesizer::new(
        config.tts_url.clone(),
        config.tts_language.clone(),
        config.audio_dir.clone(),
    ));
    let relay = Arc::new(HttpMessageRelay::new(config.sender_url.clone()));

    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let reading_service = Arc::new(ReadingService::new(reading_repo.clone()));
    let delivery_service = Arc::new(DeliveryService::new(
        user_repo.clone(),
        reading_repo.clone(),
        speech,
        relay,
        DeliveryConfig {
            pending_window: chrono::Duration::days(config.pending_window_days),
        },
    ));

    let state = AppState {
        pool,
        user_service,
        reading_service,
        delivery_service: delivery_service.clone(),
        auth: Arc::new(SessionAuth::new(&config.session_secret)),
        catalog: ReadingCatalog::new(),
    };

    // Start the minute sweep in the background
    let scheduler = DeliveryScheduler::new(
        user_repo,
        delivery_service,
        Some(SchedulerConfig {
            interval: config.scheduler_interval,
            enabled: config.scheduler_enabled,
        }),
    );
    let _scheduler_handle = scheduler.start();

    // Protected routes (require a session token)
    let protected_routes = routes::users::protected_router().layer(middleware::from_fn_with_state(
        state.clone(),
        auth::session_middleware,
    ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::auth::router())
        .merge(routes::users::public_router())
        .merge(routes::catalog::router())
        .merge(routes::delivery::router())
        .merge(routes::readings::router())
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("✅ Lectio API ready on {}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
