//! Model loading utilities
//!
//! Resolves a model path (file or directory) to an artifact and loads it
//! into a shareable [`Predictor`] handle.

mod detect;

pub use detect::{detect_model_source, ModelFormat, ModelSource};

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::model::{OnnxModel, Predictor};

/// Load a model from any supported format
///
/// This function auto-detects the format and loads the model appropriately.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Arc<dyn Predictor>> {
    let source = detect_model_source(path)?;
    load_source(&source)
}

/// Load a model from an already detected source
pub fn load_source(source: &ModelSource) -> Result<Arc<dyn Predictor>> {
    tracing::info!(
        path = %source.weights_path.display(),
        format = %source.format,
        "Loading model"
    );

    match source.format {
        ModelFormat::Onnx => Ok(Arc::new(OnnxModel::load(&source.weights_path)?)),
    }
}
