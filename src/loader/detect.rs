//! Model format and source detection

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Detected model format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// ONNX graph (Keras models are exported to ONNX before deployment)
    Onnx,
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFormat::Onnx => f.write_str("ONNX"),
        }
    }
}

/// Detected model source
#[derive(Debug, Clone)]
pub struct ModelSource {
    /// Path to the model artifact
    pub weights_path: PathBuf,
    /// Detected format
    pub format: ModelFormat,
}

/// Detect model format and source from a path
///
/// The path can be:
/// - A direct path to a .onnx file
/// - A directory containing `model.onnx` or another .onnx file
pub fn detect_model_source<P: AsRef<Path>>(path: P) -> Result<ModelSource> {
    let path = path.as_ref();

    if path.is_file() {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "onnx" => Ok(ModelSource {
                weights_path: path.to_path_buf(),
                format: ModelFormat::Onnx,
            }),
            "h5" | "keras" => Err(anyhow!(
                "Keras model {} must be exported to ONNX first (e.g. with tf2onnx)",
                path.display()
            )),
            _ => Err(anyhow!("Unsupported model file format: .{}", ext)),
        }
    } else if path.is_dir() {
        detect_model_in_directory(path)
    } else {
        Err(anyhow!("Model path does not exist: {}", path.display()))
    }
}

/// Detect model files in a directory
fn detect_model_in_directory(dir: &Path) -> Result<ModelSource> {
    let preferred = dir.join("model.onnx");
    if preferred.is_file() {
        return Ok(ModelSource {
            weights_path: preferred,
            format: ModelFormat::Onnx,
        });
    }

    if let Some(onnx_file) = find_onnx_in_dir(dir) {
        return Ok(ModelSource {
            weights_path: onnx_file,
            format: ModelFormat::Onnx,
        });
    }

    Err(anyhow!(
        "No supported model files found in directory: {}",
        dir.display()
    ))
}

/// First .onnx file in a directory, in glob (sorted) order
fn find_onnx_in_dir(dir: &Path) -> Option<PathBuf> {
    let pattern = dir.join("*.onnx");
    glob::glob(pattern.to_str()?)
        .ok()?
        .filter_map(|r| r.ok())
        .find(|p| p.is_file())
}
