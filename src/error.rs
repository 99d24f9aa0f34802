//! Error types for the AlphaReach service.

use std::path::PathBuf;

use uuid::Uuid;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Interview error: {0}")]
    Interview(#[from] InterviewError),

    #[error("Dossier error: {0}")]
    Dossier(#[from] DossierError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Interview session errors at the HTTP boundary.
///
/// A validation rejection during the interview is NOT an error — it is part
/// of the normal flow and stays inside the sequencer.
#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("Interview session not found: {id}")]
    SessionNotFound { id: Uuid },
}

/// Dossier writer errors.
#[derive(Debug, thiserror::Error)]
pub enum DossierError {
    #[error("Failed to serialize dossier: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write dossier at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
