use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use config::AppConfig;
use services::embed::SeededEmbed;
use services::profile_db::ProfileDB;

pub struct AppState {
    pub config: AppConfig,
    pub profiles: ProfileDB<SeededEmbed>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig, profiles: ProfileDB<SeededEmbed>) -> SharedState {
        Arc::new(AppState { config, profiles })
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    info!(origins = ?state.config.cors_origins, "cors origins");

    let mut router = Router::new()
        .route("/recommend", post(handlers::recommend))
        .route("/profiles", get(handlers::list_profiles))
        .route("/", get(handlers::spa_index))
        .route("/{*path}", get(handlers::spa_index));

    let static_dir = state.config.static_dir();
    if static_dir.is_dir() {
        info!(path = %static_dir.display(), "mounting static assets");
        router = router.nest_service("/static", ServeDir::new(static_dir));
    } else {
        warn!(path = %static_dir.display(), "static directory not found; /static not mounted");
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
