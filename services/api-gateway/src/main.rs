use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, Method},
    response::Json,
    routing::get,
    serve, Router,
};
use couture_utils::{init_logging, AppConfig, CoutureError};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

mod handlers;
mod metrics;
mod middleware;
mod routes;

use metrics::Metrics;
use middleware::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting Banana Couture impact API");

    let state = AppState::new(config)?;
    let host: std::net::IpAddr = state
        .config
        .server
        .host
        .parse()
        .map_err(|_| CoutureError::configuration(format!("Invalid host: {}", state.config.server.host)))?;
    let addr = SocketAddr::new(host, state.config.server.port);

    let app = create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Impact API listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

pub fn create_app(state: AppState) -> Router {
    let config = &state.config;

    let mut app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", routes::create_api_routes())
        .fallback(not_found);

    if config.monitoring.metrics_enabled {
        app = app.route("/metrics", get(metrics_handler));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE]),
            )
            .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout_seconds)))
            .layer(DefaultBodyLimit::max(config.server.max_request_size))
            .layer(axum::middleware::from_fn(request_id_middleware))
            .layer(axum::middleware::from_fn(error_handling_middleware)),
    )
    .with_state(state)
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let metrics = Metrics::new(&config.monitoring.prometheus_namespace)?;
        Ok(Self { config, metrics })
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "couture-api-gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn metrics_handler(State(state): State<AppState>) -> Result<String, ApiError> {
    state.metrics.encode().map_err(ApiError::from)
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    CoutureError::not_found(uri.path()).into()
}
