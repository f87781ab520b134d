//! Model info command

use std::path::PathBuf;

use anyhow::Result;

use crate::config::ModelConfig;
use crate::features::FEATURE_COUNT;
use crate::loader::{detect_model_source, load_source};

/// Show model information
pub async fn info(model: Option<PathBuf>) -> Result<()> {
    let model_path = ModelConfig::default().resolve(model);
    let source = detect_model_source(&model_path)?;

    println!("Model: {}\n", model_path.display());
    println!("Path: {}", source.weights_path.display());
    println!("Format: {}", source.format);

    if let Ok(metadata) = std::fs::metadata(&source.weights_path) {
        let size_kb = metadata.len() as f64 / 1024.0;
        if size_kb >= 1024.0 {
            println!("File size: {:.2} MB", size_kb / 1024.0);
        } else {
            println!("File size: {:.2} KB", size_kb);
        }
    }

    let predictor = load_source(&source)?;
    let info = predictor.describe();

    println!("\nBackend: {}", info.backend);
    println!("Expected input: [1, {}] f32", FEATURE_COUNT);
    println!("Inputs:");
    for input in &info.inputs {
        println!("  {}", input);
    }
    println!("Outputs:");
    for output in &info.outputs {
        println!("  {}", output);
    }

    Ok(())
}
