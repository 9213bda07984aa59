//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::features::InputError;
use crate::model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// No model artifact was found at startup. Every prediction reports
    /// this until the service is restarted with one in place.
    ModelUnavailable,

    /// The submitted form failed validation.
    InvalidInput(InputError),

    /// Unexpected fault while scoring. The client gets a generic message
    /// plus a correlation id; the detail stays in the server log.
    ProcessingFailure { error_id: Uuid, detail: String },
}

impl AppError {
    /// Wrap an internal fault with a fresh correlation id.
    pub fn processing(detail: impl ToString) -> Self {
        AppError::ProcessingFailure {
            error_id: Uuid::new_v4(),
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ModelUnavailable => {
                let body = Json(json!({
                    "error": "Model is not loaded. Please run the training notebook and restart the server."
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::InvalidInput(err) => {
                let body = Json(json!({
                    "error": err.to_string()
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::ProcessingFailure { error_id, detail } => {
                tracing::error!("Prediction failed [{}]: {}", error_id, detail);
                let body = Json(json!({
                    "error": "Failed to process the request. Check input values.",
                    "error_id": error_id
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::InvalidInput(err)
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::processing(err)
    }
}
