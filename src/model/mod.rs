//! Model abstraction.
//!
//! The classifier is an opaque artifact. Anything that can turn a one-row
//! feature batch into an output tensor implements [`Predictor`].

mod onnx;
mod prediction;
#[cfg(test)]
pub(crate) mod stub;

pub use onnx::OnnxModel;
pub use prediction::Prediction;

use crate::error::InferenceError;
use crate::features::FeatureBatch;

/// A loaded, read-only model shared across requests
pub trait Predictor: Send + Sync {
    /// Run inference on a single-sample batch
    fn predict(&self, batch: &FeatureBatch) -> Result<Prediction, InferenceError>;

    /// Describe the model's input and output facts
    fn describe(&self) -> ModelInfo;
}

/// Human-readable model metadata
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Runtime backing the model (e.g. "onnx")
    pub backend: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}
