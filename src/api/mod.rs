mod handlers;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::provider::WordProvider;

/// Shared per-process handler state. Holds configuration only; history lives
/// in the client's cookie.
#[derive(Clone, Debug)]
pub struct AppState {
    pub provider: WordProvider,
    /// Mark the history cookie `Secure`.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            provider: WordProvider::new(config.provider),
            secure_cookies: config.production,
        }
    }
}

pub fn create_router(config: ServerConfig) -> Router {
    let api = Router::new()
        .route("/words", get(handlers::get_word))
        .route(
            "/history",
            get(handlers::get_history).post(handlers::append_history),
        )
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(config))
}
