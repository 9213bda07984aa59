//! Garment Worker Productivity Prediction Server
//!
//! Web front end for a pre-trained productivity regression model.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │  HTML Form   │──▶│  Feature Vector  │──▶│  Trained Model   │
//! │  (Axum)      │   │  (20 slots)      │   │  (ONNX Runtime)  │
//! └──────────────┘   └──────────────────┘   └────────┬─────────┘
//!                                                    ▼
//!                                  ┌──────────────────────────────┐
//!                                  │  Score Bucketing + Advice    │
//!                                  └──────────────────────────────┘
//! ```

use anyhow::Context;
use gwp_predictor::{config::Config, create_router, model, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gwp_predictor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Productivity prediction server starting...");
    tracing::info!("Model path: {}", config.model_path);

    // Load the model once. A missing artifact degrades the service
    // instead of aborting; a corrupt one is a startup fault.
    let model = model::load_model(&config.model_path)
        .with_context(|| format!("Failed to load model from {}", config.model_path))?;

    match &model {
        Some(_) => tracing::info!("Model loaded successfully"),
        None => {
            tracing::error!("FATAL: Model file '{}' not found.", config.model_path);
            tracing::error!("Run the training notebook to export it, then restart the server.");
        }
    }

    // Build application state
    let state = AppState {
        model,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
