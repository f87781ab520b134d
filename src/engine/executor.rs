//! Inference executor
//!
//! Stateless request-to-prediction transformation over an injected model.

use std::sync::Arc;

use serde_json::Value;

use crate::error::PredictError;
use crate::features::FeatureVector;
use crate::model::{Prediction, Predictor};

/// Inference executor
///
/// Holds the read-only model handle. Safe to share across threads; nothing
/// here is mutated after construction.
pub struct Executor {
    model: Arc<dyn Predictor>,
}

impl Executor {
    pub fn new(model: Arc<dyn Predictor>) -> Self {
        Self { model }
    }

    /// Parse a raw JSON body and predict.
    pub fn predict_bytes(&self, body: &[u8]) -> Result<Prediction, PredictError> {
        let payload: Value =
            serde_json::from_slice(body).map_err(|e| PredictError::BadRequest(e.to_string()))?;
        self.predict(&payload)
    }

    /// Predict for a single payload.
    ///
    /// The payload must be a JSON object containing every schema key. Extra
    /// keys are dropped. Model failures are returned, never retried.
    pub fn predict(&self, payload: &Value) -> Result<Prediction, PredictError> {
        tracing::debug!(%payload, "Received payload");

        let object = payload.as_object().ok_or_else(|| {
            PredictError::BadRequest(format!("expected a JSON object, got {}", kind(payload)))
        })?;

        let features = FeatureVector::from_payload(object)?;
        tracing::debug!(features = ?features.as_slice(), "Projected feature vector");

        let batch = features.into_batch();
        let prediction = self.model.predict(&batch).map_err(|e| {
            tracing::warn!(error = %e, "Model invocation failed");
            PredictError::from(e)
        })?;

        tracing::debug!(shape = ?prediction.shape(), values = ?prediction.values(), "Prediction");
        Ok(prediction)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
