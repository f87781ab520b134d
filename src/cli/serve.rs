//! HTTP server command

use std::path::PathBuf;

use anyhow::Result;

use crate::config::AppConfig;
use crate::engine::Executor;
use crate::loader;
use crate::server;

/// Start the inference server
pub async fn serve(
    model: Option<PathBuf>,
    config: Option<PathBuf>,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    let mut app_config = match config {
        Some(ref path) => AppConfig::from_path(path)?,
        None => AppConfig::default(),
    };

    if let Some(port) = port {
        app_config.server.port = port;
    }
    if let Some(host) = host {
        app_config.server.host = host;
    }

    // Load once; the handle is shared read-only by every request
    let model_path = app_config.model.resolve(model);
    let predictor = loader::load_model(&model_path)?;
    tracing::info!("Model loaded successfully");

    let addr = app_config.server.addr();
    tracing::info!("Starting server at http://{}", addr);

    server::start(Executor::new(predictor), app_config.server).await?;

    Ok(())
}
