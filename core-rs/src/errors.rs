//! Error types for bitport
//!
//! Only construction, configuration loading and registry lookups return
//! these. Runtime exhaustion and out-of-range IDs are ordinary return values
//! on the allocator itself (`Option` / `bool`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitportError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Pool already exists: {0}")]
    PoolAlreadyExists(String),

    #[error("Pool not found: {0}")]
    PoolNotFound(String),
}

pub type Result<T> = std::result::Result<T, BitportError>;
