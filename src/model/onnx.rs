//! ONNX Runtime integration.
//!
//! The exported artifact takes a single `[1, 20]` float32 tensor in
//! schema order and yields a `[1, 1]` float32 score.

use ndarray::Array2;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;
use parking_lot::Mutex;

use super::{Model, ModelError};
use crate::features::{FeatureVector, FEATURE_COUNT};

/// A loaded ONNX session.
///
/// `Session::run` takes `&mut self`, so the session sits behind a mutex
/// and concurrent predictions serialize on it.
pub struct OnnxModel {
    session: Mutex<Session>,
}

impl OnnxModel {
    /// Build a session from an artifact known to exist on disk.
    pub fn load(path: &str) -> Result<Self, ModelError> {
        let session = Session::builder()
            .map_err(|e| ModelError::Session(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Session(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Session(format!("Failed to load model: {}", e)))?;

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Model for OnnxModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let mut session = self.session.lock();

        let input_data: Vec<f32> = features.as_slice().iter().map(|&v| v as f32).collect();
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), input_data)
            .map_err(|e| ModelError::InputTensor(format!("Array error: {}", e)))?;

        // The output name has to be read before `run` borrows the
        // session mutably.
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or(ModelError::EmptyOutput)?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::InputTensor(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs.get(&output_name).ok_or(ModelError::EmptyOutput)?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;

        data.first().map(|&v| v as f64).ok_or(ModelError::EmptyOutput)
    }
}
