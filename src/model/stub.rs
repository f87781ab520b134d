//! In-memory predictors for tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use prost::Message;
use serde_json::{json, Value};
use tract_onnx::pb;

use super::{ModelInfo, Prediction, Predictor};
use crate::error::InferenceError;
use crate::features::{FeatureBatch, FEATURE_COUNT};

/// Records every batch it sees and answers with a fixed probability pair
#[derive(Default)]
pub(crate) struct RecordingModel {
    pub seen: Mutex<Vec<Vec<f32>>>,
}

impl Predictor for RecordingModel {
    fn predict(&self, batch: &FeatureBatch) -> Result<Prediction, InferenceError> {
        self.seen.lock().unwrap().push(batch.as_slice().to_vec());
        Prediction::new(vec![1, 2], vec![0.25, 0.75])
    }

    fn describe(&self) -> ModelInfo {
        ModelInfo {
            backend: "stub".into(),
            inputs: vec!["1,18,F32".into()],
            outputs: vec!["1,2,F32".into()],
        }
    }
}

pub(crate) struct FailingModel;

impl Predictor for FailingModel {
    fn predict(&self, _batch: &FeatureBatch) -> Result<Prediction, InferenceError> {
        Err(InferenceError::Failed("graph exploded".into()))
    }

    fn describe(&self) -> ModelInfo {
        ModelInfo {
            backend: "stub".into(),
            inputs: vec![],
            outputs: vec![],
        }
    }
}

/// Write an ONNX graph computing `MatMul(x, w)` with `x: f32[1, 18]` and
/// `w: f32[18, 1] = 1..=18`, so the single output is a weighted feature sum.
pub(crate) fn write_weighted_sum_model(dir: &Path) -> PathBuf {
    let float = pb::tensor_proto::DataType::Float as i32;
    let tensor_info = |name: &str, dims: &[i64]| pb::ValueInfoProto {
        name: name.to_string(),
        r#type: Some(pb::TypeProto {
            value: Some(pb::type_proto::Value::TensorType(pb::type_proto::Tensor {
                elem_type: float,
                shape: Some(pb::TensorShapeProto {
                    dim: dims
                        .iter()
                        .map(|&d| pb::tensor_shape_proto::Dimension {
                            value: Some(pb::tensor_shape_proto::dimension::Value::DimValue(d)),
                            ..Default::default()
                        })
                        .collect(),
                }),
            })),
            ..Default::default()
        }),
        ..Default::default()
    };

    let weights = pb::TensorProto {
        name: "w".to_string(),
        dims: vec![FEATURE_COUNT as i64, 1],
        data_type: float,
        float_data: (1..=FEATURE_COUNT).map(|i| i as f32).collect(),
        ..Default::default()
    };

    let graph = pb::GraphProto {
        name: "weighted_sum".to_string(),
        node: vec![pb::NodeProto {
            name: "matmul".to_string(),
            op_type: "MatMul".to_string(),
            input: vec!["x".to_string(), "w".to_string()],
            output: vec!["y".to_string()],
            ..Default::default()
        }],
        initializer: vec![weights],
        input: vec![tensor_info("x", &[1, FEATURE_COUNT as i64])],
        output: vec![tensor_info("y", &[1, 1])],
        ..Default::default()
    };

    let model = pb::ModelProto {
        ir_version: 7,
        opset_import: vec![pb::OperatorSetIdProto {
            domain: String::new(),
            version: 13,
        }],
        graph: Some(graph),
        ..Default::default()
    };

    let path = dir.join("model.onnx");
    std::fs::write(&path, model.encode_to_vec()).unwrap();
    path
}

/// Schema-complete payload with a trailing `label` field, as sent by the patient app
pub(crate) fn full_payload() -> Value {
    json!({
        "breathingProblem": 1,
        "fever": 0,
        "dryCough": 1,
        "soreThroat": 0,
        "runningNose": 0,
        "asthma": 0,
        "chronicLungDisease": 0,
        "headache": 0,
        "heartDisease": 0,
        "diabetes": 0,
        "hyperTension": 0,
        "fatigue": 1,
        "gastrointestinal": 0,
        "abroadTravel": 0,
        "contactWithCovidPatient": 1,
        "attendedLargeGathering": 0,
        "visitedPublicExposedPlaces": 0,
        "familyWorkingInPublicExposedPlaces": 0,
        "label": 1
    })
}
