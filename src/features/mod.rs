//! Feature schema and payload projection
//!
//! The classifier was trained on 18 symptom/exposure indicators in a fixed
//! column order. Every request payload is projected onto that order before it
//! reaches the model.

use serde_json::{Map, Value};

use crate::error::PredictError;

/// Number of features the model consumes
pub const FEATURE_COUNT: usize = 18;

/// Feature names in training column order. Do not reorder.
pub const FEATURE_SCHEMA: [&str; FEATURE_COUNT] = [
    "breathingProblem",
    "fever",
    "dryCough",
    "soreThroat",
    "runningNose",
    "asthma",
    "chronicLungDisease",
    "headache",
    "heartDisease",
    "diabetes",
    "hyperTension",
    "fatigue",
    "gastrointestinal",
    "abroadTravel",
    "contactWithCovidPatient",
    "attendedLargeGathering",
    "visitedPublicExposedPlaces",
    "familyWorkingInPublicExposedPlaces",
];

/// Ordered feature values for a single sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    /// Project a JSON object onto the schema.
    ///
    /// Keys outside the schema are ignored. A missing schema key is an error,
    /// never a default.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, PredictError> {
        let mut values = [0.0f32; FEATURE_COUNT];

        for (slot, &name) in values.iter_mut().zip(FEATURE_SCHEMA.iter()) {
            let value = payload
                .get(name)
                .ok_or(PredictError::MissingFeature(name))?;
            *slot = feature_value(name, value)?;
        }

        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Reshape into a one-row batch
    pub fn into_batch(self) -> FeatureBatch {
        FeatureBatch { row: self }
    }
}

/// A batch holding exactly one sample, shape `[1, FEATURE_COUNT]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBatch {
    row: FeatureVector,
}

impl FeatureBatch {
    pub const SHAPE: [usize; 2] = [1, FEATURE_COUNT];

    pub fn shape(&self) -> [usize; 2] {
        Self::SHAPE
    }

    /// Row-major values
    pub fn as_slice(&self) -> &[f32] {
        self.row.as_slice()
    }
}

/// Convert a single JSON value into a model input.
///
/// Booleans map to 0/1, numbers pass through as f32. Numbers outside the
/// f32 range are rejected rather than saturating to infinity.
fn feature_value(name: &'static str, value: &Value) -> Result<f32, PredictError> {
    let invalid = |found: &'static str| PredictError::InvalidFeature { name, found };

    match value {
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => {
            let v = n.as_f64().map(|v| v as f32).ok_or_else(|| invalid("number"))?;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(invalid("non-finite number"))
            }
        }
        Value::Null => Err(invalid("null")),
        Value::String(_) => Err(invalid("string")),
        Value::Array(_) => Err(invalid("array")),
        Value::Object(_) => Err(invalid("object")),
    }
}
