//! Garment Worker Productivity Prediction Service
//!
//! Serves productivity-score predictions for garment-factory employee
//! records from a pre-trained regression model, plus rule-based
//! recommendations derived from the score.

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;
pub mod recommend;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
pub use model::SharedModel;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` when the service came up without a model artifact.
    pub model: Option<SharedModel>,
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
