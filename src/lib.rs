//! symptom-infer - inference server for a symptom-based COVID-19 classifier
//!
//! A thin HTTP layer around a pre-trained model. Each request carries a flat
//! JSON object of symptom and exposure indicators; the server projects it onto
//! the fixed 18-feature training schema, runs the model on a single-row batch
//! and returns the raw output.
//!
//! # Architecture
//!
//! - **features**: schema constant and payload projection
//! - **model**: `Predictor` trait, ONNX backend (tract), prediction output
//! - **loader**: locate and load the model artifact once at startup
//! - **engine**: `Executor`, the `predict(payload)` operation
//! - **server**: axum routes, CORS, request tracing
//!
//! # Example
//!
//! ```bash
//! # Start server
//! symptom-infer serve --model ./model.onnx --port 5000
//!
//! # One-off prediction
//! symptom-infer predict --model ./model.onnx --input payload.json
//!
//! # Show the feature order the model expects
//! symptom-infer features
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod loader;
pub mod model;
pub mod server;

// Re-export key types
pub use config::{AppConfig, ModelConfig, ServerConfig};
pub use engine::Executor;
pub use error::{InferenceError, PredictError};
pub use features::{FeatureBatch, FeatureVector, FEATURE_COUNT, FEATURE_SCHEMA};
pub use loader::{load_model, ModelFormat, ModelSource};
pub use model::{Prediction, Predictor};
