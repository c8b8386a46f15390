//! Model Module - classifier adaptation
//!
//! The predictor only sees the `Classifier` trait. `OnnxClassifier` is the one
//! adapter over a real inference library; tests plug in their own.

pub mod classifier;
pub mod schema;
pub mod onnx;
pub mod adapter;

// Re-export common types
pub use classifier::{Classifier, ClassifierError, RawPrediction};
pub use schema::{FeatureSchema, prepare_row, prepare_rows};
pub use onnx::OnnxClassifier;
pub use adapter::{ModelAdapter, ModelInfo};
