//! Model location settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable consulted when no model path is given on the command line
pub const MODEL_PATH_ENV: &str = "SYMPTOM_MODEL_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to an ONNX file or a directory containing one
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("model.onnx")
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl ModelConfig {
    /// Pick the model path: explicit argument, then `SYMPTOM_MODEL_PATH`, then
    /// `path` from the config file (`model.onnx` when unset).
    ///
    /// The environment variable takes precedence over a config file's `model.path`.
    pub fn resolve(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var_os(MODEL_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| self.path.clone())
    }
}
