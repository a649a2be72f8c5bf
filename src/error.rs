//! Error types for q-rng

use thiserror::Error;

/// Main error type for q-rng operations
#[derive(Error, Debug)]
pub enum Error {
    /// A generation pipeline failed after parameter validation.
    ///
    /// Carries the method's display name and a human-readable cause so the
    /// web layer can surface a structured failure instead of a bare string.
    #[error("{method} method failed: {cause}")]
    Generation { method: String, cause: String },

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid qubit count: {0}")]
    InvalidQubits(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Random source error: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for q-rng operations
pub type Result<T> = std::result::Result<T, Error>;
