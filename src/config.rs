//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address for the HTTP listener
    pub host: String,

    /// Server port
    pub port: u16,

    /// Path to the exported model artifact
    pub model_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            model_path: env::var("MODEL_PATH").unwrap_or_else(|_| "gwp.onnx".to_string()),
        }
    }
}
