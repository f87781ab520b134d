//! One-shot prediction command

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::ModelConfig;
use crate::engine::Executor;
use crate::loader;
use crate::server::PredictResponse;

/// Predict for a payload read from a file or stdin
pub async fn predict(model: Option<PathBuf>, input: Option<PathBuf>) -> Result<()> {
    let body = match input {
        Some(ref path) => std::fs::read(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read payload from stdin")?;
            buf
        }
    };

    let model_path = ModelConfig::default().resolve(model);
    let executor = Executor::new(loader::load_model(&model_path)?);

    let prediction = executor.predict_bytes(&body)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&PredictResponse { prediction })?
    );

    Ok(())
}
