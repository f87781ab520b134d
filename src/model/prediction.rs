//! Raw model output

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::InferenceError;

/// Model output tensor, row-major.
///
/// Serializes as a nested JSON array following `shape`, so a `[1, 2]` output
/// becomes `[[p0, p1]]` and a rank-0 output becomes a bare number.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    shape: Vec<usize>,
    values: Vec<f32>,
}

impl Prediction {
    pub fn new(shape: Vec<usize>, values: Vec<f32>) -> Result<Self, InferenceError> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(InferenceError::ShapeMismatch {
                shape,
                len: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

impl Serialize for Prediction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Nested {
            shape: &self.shape,
            values: &self.values,
        }
        .serialize(serializer)
    }
}

/// View over one sub-tensor
struct Nested<'a> {
    shape: &'a [usize],
    values: &'a [f32],
}

impl Serialize for Nested<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some((&dim, rest)) = self.shape.split_first() else {
            return match self.values.first() {
                Some(v) => serializer.serialize_f32(*v),
                None => serializer.serialize_none(),
            };
        };

        let stride: usize = rest.iter().product();
        let mut seq = serializer.serialize_seq(Some(dim))?;
        for i in 0..dim {
            seq.serialize_element(&Nested {
                shape: rest,
                values: &self.values[i * stride..(i + 1) * stride],
            })?;
        }
        seq.end()
    }
}
