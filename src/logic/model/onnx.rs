//! ONNX Runtime adapter
//!
//! Expects a binary classifier exported with a single `[N, F]` float input and
//! two outputs: predicted class (`i64`, `[N]`) then probabilities (`f32`, `[N, 2]`).

use ndarray::Array2;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Tensor;
use parking_lot::Mutex;

use crate::error::LoadError;
use crate::models::{FeatureRow, FeatureValue};
use super::classifier::{Classifier, ClassifierError, RawPrediction};

const CLASS_COUNT: usize = 2;

pub struct OnnxClassifier {
    /// `Session::run` needs exclusive access
    session: Mutex<Session>,
    input_name: String,
    label_output: String,
    probability_output: String,
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("input_name", &self.input_name)
            .field("label_output", &self.label_output)
            .field("probability_output", &self.probability_output)
            .finish()
    }
}

impl OnnxClassifier {
    /// Load ONNX model from bytes
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self, LoadError> {
        let session = Session::builder()
            .map_err(|e| LoadError::Model(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| LoadError::Model(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| LoadError::Model(format!("Failed to load model: {}", e)))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| LoadError::Model("No input defined".to_string()))?;

        let mut outputs = session.outputs.iter().map(|o| o.name.clone());
        let label_output = outputs
            .next()
            .ok_or_else(|| LoadError::Model("No label output defined".to_string()))?;
        let probability_output = outputs
            .next()
            .ok_or_else(|| LoadError::Model("No probability output defined".to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            label_output,
            probability_output,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<RawPrediction>, ClassifierError> {
        let input = encode_rows(rows)?;
        let row_count = input.nrows();

        let input_tensor = Tensor::from_array(input)
            .map_err(|e| ClassifierError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let labels = outputs
            .get(self.label_output.as_str())
            .ok_or_else(|| ClassifierError::Output(format!("missing '{}'", self.label_output)))?
            .try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::Output(format!("labels: {}", e)))?
            .1;

        let probabilities = outputs
            .get(self.probability_output.as_str())
            .ok_or_else(|| {
                ClassifierError::Output(format!("missing '{}'", self.probability_output))
            })?
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Output(format!("probabilities: {}", e)))?
            .1;

        decode_outputs(labels, probabilities, row_count)
    }
}

/// Flatten prepared rows into an `[N, F]` matrix.
/// Every row must carry the same columns in the same order.
pub fn encode_rows(rows: &[FeatureRow]) -> Result<Array2<f32>, ClassifierError> {
    let first = rows.first().ok_or(ClassifierError::EmptyBatch)?;
    let width = first.len();

    let mut data = Vec::with_capacity(rows.len() * width);

    for (idx, row) in rows.iter().enumerate() {
        if !row.names().eq(first.names()) {
            return Err(ClassifierError::ShapeMismatch { row: idx });
        }

        for (column, value) in row.names().zip(row.values()) {
            data.push(coerce(column, value)?);
        }
    }

    Array2::from_shape_vec((rows.len(), width), data)
        .map_err(|e| ClassifierError::Inference(format!("Array error: {}", e)))
}

fn coerce(column: &str, value: &FeatureValue) -> Result<f32, ClassifierError> {
    let non_numeric = |raw: &str| ClassifierError::NonNumeric {
        column: column.to_string(),
        value: raw.to_string(),
    };

    match value {
        FeatureValue::Number(n) => Ok(*n as f32),
        FeatureValue::Text(s) => s.trim().parse::<f32>().map_err(|_| non_numeric(s)),
        FeatureValue::Missing => Err(non_numeric("null")),
    }
}

fn decode_outputs(
    labels: &[i64],
    probabilities: &[f32],
    row_count: usize,
) -> Result<Vec<RawPrediction>, ClassifierError> {
    if labels.len() != row_count || probabilities.len() != row_count * CLASS_COUNT {
        return Err(ClassifierError::Output(format!(
            "expected {} labels and {} probabilities, got {} and {}",
            row_count,
            row_count * CLASS_COUNT,
            labels.len(),
            probabilities.len()
        )));
    }

    Ok(labels
        .iter()
        .zip(probabilities.chunks_exact(CLASS_COUNT))
        .map(|(&class_index, pair)| RawPrediction {
            class_index,
            probabilities: pair.iter().map(|&p| p as f64).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, FeatureValue)]) -> FeatureRow {
        cells
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_encode_numeric_and_categorical_text() {
        let rows = vec![
            row(&[
                ("koi_period", FeatureValue::Number(10.0)),
                ("flag", FeatureValue::Text("1".to_string())),
            ]),
            row(&[
                ("koi_period", FeatureValue::Number(2.5)),
                ("flag", FeatureValue::Text("0".to_string())),
            ]),
        ];

        let matrix = encode_rows(&rows).unwrap();
        assert_eq!(matrix.dim(), (2, 2));
        assert_eq!(matrix[[0, 1]], 1.0);
        assert_eq!(matrix[[1, 0]], 2.5);
    }

    #[test]
    fn test_encode_rejects_non_numeric_text() {
        let rows = vec![row(&[("koi_depth", FeatureValue::Text("deep".to_string()))])];
        let err = encode_rows(&rows).unwrap_err();
        assert!(matches!(err, ClassifierError::NonNumeric { ref column, .. } if column == "koi_depth"));
    }

    #[test]
    fn test_encode_rejects_missing_values() {
        let rows = vec![row(&[("koi_depth", FeatureValue::Missing)])];
        assert!(encode_rows(&rows).is_err());
    }

    #[test]
    fn test_encode_rejects_ragged_batch() {
        let rows = vec![
            row(&[("a", FeatureValue::Number(1.0))]),
            row(&[("b", FeatureValue::Number(1.0))]),
        ];
        assert_eq!(
            encode_rows(&rows).unwrap_err(),
            ClassifierError::ShapeMismatch { row: 1 }
        );
    }

    #[test]
    fn test_encode_rejects_empty_batch() {
        assert_eq!(encode_rows(&[]).unwrap_err(), ClassifierError::EmptyBatch);
    }

    #[test]
    fn test_decode_pairs_probabilities_per_row() {
        let decoded = decode_outputs(&[1, 0], &[0.25, 0.75, 0.5, 0.5], 2).unwrap();
        assert_eq!(decoded[0].class_index, 1);
        assert_eq!(decoded[0].probabilities, vec![0.25, 0.75]);
        assert_eq!(decoded[1].probabilities, vec![0.5, 0.5]);
    }

    #[test]
    fn test_decode_rejects_short_output() {
        assert!(decode_outputs(&[1], &[0.2], 1).is_err());
    }
}
