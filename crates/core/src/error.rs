use std::io;

/// Errors that can occur during gpr-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed task definition: {0}")]
    InvalidDefinition(String),

    #[error("Could not find a task named: {0}")]
    TaskNotFound(String),

    #[error("Project error: {0}")]
    ProjectError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for gpr-runner operations
pub type Result<T> = std::result::Result<T, Error>;
