//! Model loading and inference.
//!
//! The trained regressor is an externally produced artifact. Everything
//! here treats it as opaque: load it once at startup, expose a single
//! scalar-scoring operation.

mod onnx;

pub use onnx::OnnxModel;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::features::FeatureVector;

/// Errors from model loading and inference.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to build ONNX session: {0}")]
    Session(String),
    #[error("failed to build input tensor: {0}")]
    InputTensor(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("model produced no output")]
    EmptyOutput,
}

/// A loaded scoring model: one feature vector in, one raw score out.
///
/// Request handling depends on this seam rather than on the ONNX
/// session directly, so tests can drive the endpoint with a stub.
pub trait Model: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// Shared handle to the loaded model.
pub type SharedModel = Arc<dyn Model>;

/// Load the trained model from `path`.
///
/// A missing file is the degraded-startup case and returns `Ok(None)`.
/// Any other failure means the artifact exists but is unusable, and is
/// a startup fault for the caller to propagate.
pub fn load_model(path: &str) -> Result<Option<SharedModel>, ModelError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let model = OnnxModel::load(path)?;
    Ok(Some(Arc::new(model)))
}
