//! Error types for the prediction path

use thiserror::Error;

/// Errors raised by a model while running inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference failed: {0}")]
    Failed(String),

    #[error("Model produced no output")]
    NoOutput,

    #[error("Output shape {shape:?} does not match {len} values")]
    ShapeMismatch { shape: Vec<usize>, len: usize },

    #[error("Inference task aborted: {0}")]
    Aborted(String),
}

/// Errors surfaced to callers of `predict`
#[derive(Debug, Error)]
pub enum PredictError {
    /// Body is not valid JSON, or not a JSON object
    #[error("Malformed request body: {0}")]
    BadRequest(String),

    #[error("Missing feature: {0}")]
    MissingFeature(&'static str),

    #[error("Invalid value for feature '{name}': expected boolean or number, got {found}")]
    InvalidFeature {
        name: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl PredictError {
    /// True when the caller sent something unusable, false for server-side failures
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PredictError::Inference(_))
    }
}
