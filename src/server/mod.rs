// Thin HTTP surface over the analysis service.
pub mod error;
pub mod handlers;

use crate::config::ServerConfig;
use crate::service::AnalysisService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Shared application state handed to every handler.
pub struct AppState {
    pub service: AnalysisService,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // The API serves a browser extension, so CORS stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/analyze", post(handlers::analyze))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(cfg: &ServerConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let addr = format!("{}:{}", cfg.host, cfg.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Web server listening on http://{addr}");
    axum::serve(listener, app).await
}
