//! HTTP server for inference
//!
//! Exposes `POST /predict` plus health and schema endpoints.

mod handlers;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::engine::Executor;

pub use handlers::{AppState, ErrorDetail, ErrorResponse, FeaturesResponse, PredictResponse};
pub use routes::api_routes;

/// Build the application router with middleware applied
pub fn router(state: Arc<AppState>, config: &ServerConfig) -> Result<Router> {
    let mut app = api_routes().layer(DefaultBodyLimit::max(config.max_body_size));

    if config.cors_enabled {
        app = app.layer(cors_layer(&config.cors_origins)?);
    }
    if config.request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    Ok(app.with_state(state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins = origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Start the HTTP inference server
pub async fn start(executor: Executor, config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new(executor));
    let app = router(state, &config)?;

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /features - Feature schema");
    tracing::info!("  POST /predict - Run the classifier");

    axum::serve(listener, app).await?;

    Ok(())
}
