//! Error types for wikigraph-core
//!
//! Resolution, rewriting and aggregation never fail on user-authored text;
//! only the I/O-facing edges of the crate return these errors.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for wikigraph operations
#[derive(Debug, Error)]
pub enum WikigraphError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for wikigraph operations
pub type Result<T> = std::result::Result<T, WikigraphError>;
