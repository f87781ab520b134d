//! ONNX-backed predictor (tract)

use std::path::Path;

use anyhow::{Context, Result};
use tract_onnx::prelude::*;

use super::{ModelInfo, Prediction, Predictor};
use crate::error::InferenceError;
use crate::features::{FeatureBatch, FEATURE_COUNT};

type Plan = TypedRunnableModel<TypedModel>;

/// ONNX classifier optimized for a fixed `[1, 18]` f32 input
pub struct OnnxModel {
    plan: Plan,
    info: ModelInfo,
}

impl OnnxModel {
    /// Load and optimize an ONNX graph.
    ///
    /// Input 0 is pinned to `f32[1, FEATURE_COUNT]`; a graph that cannot accept
    /// that shape fails here rather than on the first request.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .with_context(|| format!("Failed to parse ONNX model: {}", path.display()))?
            .with_input_fact(0, f32::fact(FeatureBatch::SHAPE).into())
            .context("Failed to pin model input")?
            .into_optimized()
            .with_context(|| {
                format!("Model does not accept a [1, {FEATURE_COUNT}] f32 input")
            })?;

        let info = model_info(&model)?;
        let plan = model.into_runnable().context("Failed to build execution plan")?;

        tracing::info!(
            path = %path.display(),
            inputs = ?info.inputs,
            outputs = ?info.outputs,
            "ONNX model loaded"
        );

        Ok(Self { plan, info })
    }
}

fn model_info(model: &TypedModel) -> Result<ModelInfo> {
    let inputs = (0..model.inputs.len())
        .map(|i| model.input_fact(i).map(|f| format!("{f:?}")))
        .collect::<TractResult<Vec<_>>>()?;
    let outputs = (0..model.outputs.len())
        .map(|i| model.output_fact(i).map(|f| format!("{f:?}")))
        .collect::<TractResult<Vec<_>>>()?;

    Ok(ModelInfo {
        backend: "onnx".to_string(),
        inputs,
        outputs,
    })
}

impl Predictor for OnnxModel {
    fn predict(&self, batch: &FeatureBatch) -> Result<Prediction, InferenceError> {
        let input = Tensor::from_shape(&FeatureBatch::SHAPE, batch.as_slice())
            .map_err(|e| InferenceError::Failed(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::Failed(e.to_string()))?;

        let output = outputs.first().ok_or(InferenceError::NoOutput)?;
        let output = output
            .cast_to::<f32>()
            .map_err(|e| InferenceError::Failed(e.to_string()))?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Failed(e.to_string()))?;

        Prediction::new(view.shape().to_vec(), view.iter().copied().collect())
    }

    fn describe(&self) -> ModelInfo {
        self.info.clone()
    }
}
